use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config;
use crate::io::state::{UiState, read_ui_state, write_ui_state};
use crate::io::store_io::{load_list, save_list};
use crate::model::list::TaskList;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Input,
}

/// Main application state
pub struct App {
    pub store_dir: PathBuf,
    pub list: TaskList,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Selected row in the list view
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// Input row buffer
    pub input: String,
    /// Byte offset of the input cursor
    pub input_cursor: usize,
    /// Transient notice shown in the status row until the next key press
    pub notice: Option<String>,
}

impl App {
    pub fn new(store_dir: PathBuf, list: TaskList, theme: Theme) -> Self {
        App {
            store_dir,
            list,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            cursor: 0,
            scroll_offset: 0,
            input: String::new(),
            input_cursor: 0,
            notice: None,
        }
    }

    /// Clamp the cursor to the current list length
    pub fn clamp_cursor(&mut self) {
        if self.cursor >= self.list.entries.len() {
            self.cursor = self.list.entries.len().saturating_sub(1);
        }
    }

    /// Text of the selected row, if any
    pub fn selected_text(&self) -> Option<&str> {
        self.list.entries.get(self.cursor).map(String::as_str)
    }
}

/// Restore cursor and scroll from .state.json
pub fn restore_ui_state(app: &mut App) {
    let Some(state) = read_ui_state(&app.store_dir) else {
        return;
    };
    app.cursor = state.cursor;
    app.scroll_offset = state.scroll_offset;
    app.clamp_cursor();
}

/// Save cursor and scroll to .state.json
pub fn save_ui_state(app: &App) {
    let state = UiState {
        cursor: app.cursor,
        scroll_offset: app.scroll_offset,
    };
    let _ = write_ui_state(&app.store_dir, &state);
}

/// Run the TUI application
pub fn run(store_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = read_config(store_dir);
    let theme = Theme::from_config(&config.ui);

    // A read failure must not kill the session: warn and start empty.
    let list = match load_list(store_dir) {
        Ok(list) => list,
        Err(e) => {
            eprintln!("warning: {}", e);
            TaskList::from_tasks(Vec::new())
        }
    };

    let mut app = App::new(store_dir.to_path_buf(), list, theme);
    restore_ui_state(&mut app);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // The session is over: flush the list (placeholder stripped inside save)
    // and the UI state. A failed save is logged, never surfaced.
    if let Err(e) = save_list(&app.store_dir, &mut app.list) {
        eprintln!("warning: {}", e);
    }
    save_ui_state(&app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => {
                    input::handle_paste(app, &text);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
