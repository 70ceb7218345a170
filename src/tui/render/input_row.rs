use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::grapheme_at;

/// Render the input row. In Input mode: a prompt, the buffer, and a block
/// cursor over the current grapheme. In Navigate mode: a dim hint.
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Input => {
            let before = &app.input[..app.input_cursor];
            let at = grapheme_at(&app.input, app.input_cursor);
            let after = if at.is_empty() {
                ""
            } else {
                &app.input[app.input_cursor + at.len()..]
            };
            // Cursor cell: the grapheme under the cursor, or a space at the end
            let cursor_cell = if at.is_empty() { " " } else { at };

            let mut spans = vec![
                Span::styled("> ", Style::default().fg(app.theme.highlight).bg(bg)),
                Span::styled(
                    before.to_string(),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled(
                    cursor_cell.to_string(),
                    Style::default().fg(bg).bg(app.theme.highlight),
                ),
                Span::styled(
                    after.to_string(),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
            ];
            let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(bg),
                ));
            }
            Line::from(spans)
        }
        Mode::Navigate => Line::from(Span::styled(
            format!("{:<width$}", "press a to add a task", width = width),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
