//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, renders whatever screen
//! the core is currently on, and turns crossterm key events into
//! `core::action::Key` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! There is no animation and no background work, so the adapter only draws
//! in response to something: a dialog waiting for its next key, a message,
//! a new log line, or a terminal event (resize, ignored key) while blocked
//! on input. Each draw renders the full current screen; ratatui diffs the
//! buffers, so a "clear" is just drawing a screen with less on it.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::Key;
use crate::core::config::ResolvedConfig;
use crate::core::dialog::KeySource;
use crate::core::state::InputState;
use crate::core::workflow::{self, Console};
use crate::provision::SystemProvisioner;
use crate::tui::components::LogView;
use crate::tui::event::{TuiEvent, read_event};

/// What currently fills the screen.
#[derive(Debug)]
pub enum Screen {
    /// The menu or a nested dialog, with the prompt it was opened with.
    Dialog { prompt: String, state: InputState },
    /// A single message line.
    Message(String),
    /// The incremental log in `TuiState::log`.
    Log,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub screen: Screen,
    /// Last message shown during the running workflow; repeated under its
    /// dialogs and dropped once the menu is back.
    pub notice: Option<String>,
    pub log: LogView,
    /// Waiting for any key before going back to the menu.
    pub paused: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Dialog {
                prompt: String::new(),
                state: InputState::default(),
            },
            notice: None,
            log: LogView::new(),
            paused: false,
        }
    }

    pub fn enter_dialog(&mut self, prompt: &str, state: &InputState) {
        if matches!(state, InputState::MenuNav(_)) {
            self.notice = None;
        }
        self.screen = Screen::Dialog {
            prompt: prompt.to_string(),
            state: state.clone(),
        };
        self.paused = false;
    }

    pub fn show_message(&mut self, text: &str) {
        self.notice = Some(text.to_string());
        self.screen = Screen::Message(text.to_string());
    }

    /// Appends to the log, starting it over if another screen was shown since.
    pub fn log_line(&mut self, line: &str) {
        if !matches!(self.screen, Screen::Log) {
            self.log.reset();
            self.screen = Screen::Log;
        }
        self.log.push(line);
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(
            stdout(),
            Hide,                        // Only the text prompt shows a cursor, per frame
            SetCursorStyle::SteadyBlock, // Non-blinking: redraws reset the blink timer
        )?;
        info!("Terminal modes enabled (hidden steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape, Show);
    }
}

/// `Console` backed by the real terminal.
pub struct TuiConsole {
    terminal: DefaultTerminal,
    state: TuiState,
}

impl TuiConsole {
    pub fn new(terminal: DefaultTerminal) -> Self {
        Self {
            terminal,
            state: TuiState::new(),
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        self.terminal.draw(|f| ui::draw_ui(f, &self.state))?;
        Ok(())
    }

    /// Redraw and block until a mapped key arrives. Resizes and ignored
    /// events only redraw the current screen.
    fn wait_for_key(&mut self) -> io::Result<Key> {
        loop {
            self.draw()?;
            match read_event()? {
                Some(TuiEvent::Key(key)) => return Ok(key),
                Some(TuiEvent::Resize) => debug!("Terminal resized"),
                Some(TuiEvent::OtherKey) | None => {}
            }
        }
    }

    /// Redraw and block until any key is pressed, mapped or not.
    fn wait_for_any_key(&mut self) -> io::Result<()> {
        loop {
            self.draw()?;
            if read_event()?.is_some_and(|event| event.is_key_press()) {
                return Ok(());
            }
        }
    }
}

impl KeySource for TuiConsole {
    fn next_key(&mut self, prompt: &str, state: &InputState) -> io::Result<Key> {
        self.state.enter_dialog(prompt, state);
        self.wait_for_key()
    }
}

impl Console for TuiConsole {
    fn show_message(&mut self, text: &str) -> io::Result<()> {
        self.state.show_message(text);
        self.draw()
    }

    fn log_line(&mut self, line: &str) -> io::Result<()> {
        info!("{}", line);
        self.state.log_line(line);
        self.draw()
    }

    fn pause(&mut self) -> io::Result<()> {
        self.state.paused = true;
        let result = self.wait_for_any_key();
        self.state.paused = false;
        result
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let terminal = ratatui::try_init()?;
    let terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Failed to set terminal modes: {}", e))
        .ok();

    let mut console = TuiConsole::new(terminal);
    let mut provisioner = SystemProvisioner::new();
    let result = workflow::run_menu(&mut console, &mut provisioner, &config);

    drop(terminal_mode_guard);
    ratatui::restore();
    result
}
