use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): the transient notice when one
/// is pending, key hints otherwise
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(ref notice) = app.notice {
        Line::from(Span::styled(
            format!("{:<width$}", notice, width = width),
            Style::default().fg(app.theme.notice).bg(bg),
        ))
    } else {
        let hint = match app.mode {
            Mode::Navigate => "a add  d remove  C clear  q quit",
            Mode::Input => "Enter add  Esc cancel",
        };
        let hint_width = hint.chars().count();
        let mut spans = Vec::new();
        if hint_width < width {
            spans.push(Span::styled(
                " ".repeat(width - hint_width),
                Style::default().bg(bg),
            ));
        }
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        Line::from(spans)
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
