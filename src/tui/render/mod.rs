pub mod input_row;
pub mod list_view;
pub mod status_row;
pub mod title_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title bar | list | input row | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    title_bar::render_title_bar(frame, app, chunks[0]);
    list_view::render_list_view(frame, app, chunks[1]);
    input_row::render_input_row(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);
}
