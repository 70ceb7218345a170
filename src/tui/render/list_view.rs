use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

/// Render the task list with the selection bar, scrolled so the cursor
/// stays visible
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let height = area.height as usize;
    let width = area.width as usize;
    if height == 0 || width == 0 {
        return;
    }

    // Keep the cursor inside the viewport
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    }
    if app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }

    let bg = app.theme.background;
    let mut lines = Vec::new();

    for (i, entry) in app
        .list
        .entries
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let selected = i == app.cursor;
        let is_placeholder = app.list.has_placeholder;

        let row_bg = if selected { app.theme.selection_bg } else { bg };
        let marker_style = if selected {
            Style::default().fg(app.theme.selection_border).bg(row_bg)
        } else {
            Style::default().bg(row_bg)
        };
        let text_style = if is_placeholder {
            Style::default().fg(app.theme.dim).bg(row_bg)
        } else if selected {
            Style::default().fg(app.theme.text_bright).bg(row_bg)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };

        let marker = if selected { "\u{258C} " } else { "  " };
        let text = truncate_to_width(entry, width.saturating_sub(2));
        let used = 2 + text.chars().count();
        let padding = width.saturating_sub(used);

        lines.push(Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(text, text_style),
            Span::styled(" ".repeat(padding), Style::default().bg(row_bg)),
        ]));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
