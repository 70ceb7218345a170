use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the title bar: app name on the left, task count on the right
pub fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let count = app.list.task_count();
    let right = match count {
        0 => "no tasks".to_string(),
        1 => "1 task".to_string(),
        n => format!("{} tasks", n),
    };

    let mut spans = vec![
        Span::styled("[>] ", Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled("keep", Style::default().fg(app.theme.text_bright).bg(bg)),
    ];
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let right_width = right.chars().count();
    if content_width + right_width < width {
        let padding = width - content_width - right_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(right, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
