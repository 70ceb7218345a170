use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::list_ops::{self, TaskError};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

use super::app::{App, Mode};

/// Notice text for a rejected empty add
pub const EMPTY_TASK_NOTICE: &str = "Task is empty";

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // The notice is transient: the next key press dismisses it.
    app.notice = None;

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Input => handle_input(app, key),
    }
}

fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < app.list.entries.len() {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => app.cursor = 0,
        KeyCode::Char('G') => app.cursor = app.list.entries.len().saturating_sub(1),
        KeyCode::Char('a') | KeyCode::Char('i') => app.mode = Mode::Input,
        // Removal goes by displayed text, first match. The placeholder row
        // is not removable, so deleting it is a no-op.
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(text) = app.selected_text().map(str::to_string) {
                list_ops::remove_task(&mut app.list, &text);
                app.clamp_cursor();
            }
        }
        KeyCode::Char('C') => {
            list_ops::clear_all(&mut app.list);
            app.cursor = 0;
            app.scroll_offset = 0;
        }
        _ => {}
    }
}

fn handle_input(app: &mut App, key: KeyEvent) {
    match key.code {
        // Esc keeps the draft, like leaving a half-typed input field
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Enter => submit_input(app),
        KeyCode::Backspace => {
            if let Some(prev) = prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.replace_range(prev..app.input_cursor, "");
                app.input_cursor = prev;
            }
        }
        KeyCode::Left => {
            if let Some(prev) = prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = next;
            }
        }
        KeyCode::Home => app.input_cursor = 0,
        KeyCode::End => app.input_cursor = app.input.len(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
        }
        _ => {}
    }
}

/// Add the input buffer as a task. A rejected empty add fires the transient
/// notice and leaves both the list and the buffer untouched. On success the
/// buffer clears and Input mode stays active for rapid entry.
fn submit_input(app: &mut App) {
    match list_ops::add_task(&mut app.list, &app.input) {
        Ok(()) => {
            app.input.clear();
            app.input_cursor = 0;
            // Select the task that was just appended
            app.cursor = app.list.entries.len() - 1;
        }
        Err(TaskError::EmptyTask) => {
            app.notice = Some(EMPTY_TASK_NOTICE.to_string());
        }
    }
}

/// Handle a bracketed paste (terminal sends pasted text as a single string).
/// Only active in Input mode — newlines are flattened so the buffer stays a
/// single line.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.mode != Mode::Input || text.is_empty() {
        return;
    }
    let clean = text.replace('\n', " ").replace('\r', "");
    app.input.insert_str(app.input_cursor, &clean);
    app.input_cursor += clean.len();
}
