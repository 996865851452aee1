//! # Actions
//!
//! Every key the user presses becomes a `Key`. The `update()` function takes
//! the current `InputState` and a key, mutates the state in place and, when
//! the key completes the dialog, returns the committed value.
//!
//! ```text
//! InputState + Key  →  update()  →  InputState' (+ Option<Commit>)
//! ```
//!
//! No I/O happens here, so every transition is unit-testable without a
//! terminal. Vi-style letters (`h`/`j`/`k`/`l`) are navigation only in the
//! menu and the yes/no dialog; while capturing text they are ordinary input.

use log::debug;

use crate::core::state::{InputState, MenuEntry};

/// A key event, already stripped of terminal specifics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Backspace,
    Char(char),
}

/// The semantic result of a dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit {
    /// The menu entry under the cursor was activated.
    Select(MenuEntry),
    /// The yes/no question was answered.
    Confirm(bool),
    /// The text prompt was submitted. May be empty.
    Text(String),
}

/// Applies `key` to `state`. Returns `Some` exactly when the key commits.
///
/// A committed `Confirming` or `CapturingText` state is finished: callers
/// drop it. A committed `MenuNav` state is kept for the next round.
pub fn update(state: &mut InputState, key: Key) -> Option<Commit> {
    let commit = match state {
        InputState::MenuNav(menu) => match key {
            Key::Up | Key::Char('k') => {
                menu.move_up();
                None
            }
            Key::Down | Key::Char('j') => {
                menu.move_down();
                None
            }
            Key::Enter | Key::Right | Key::Char('l') => Some(Commit::Select(menu.selected_entry())),
            _ => None,
        },
        InputState::Confirming(confirm) => match key {
            Key::Right | Key::Char('l') => {
                confirm.select_no();
                None
            }
            Key::Left | Key::Char('h') => {
                confirm.select_yes();
                None
            }
            Key::Enter => Some(Commit::Confirm(confirm.is_yes())),
            _ => None,
        },
        InputState::CapturingText(text) => match key {
            Key::Char(c) => {
                text.push(c);
                None
            }
            Key::Backspace => {
                text.backspace();
                None
            }
            Key::Enter => Some(Commit::Text(text.take())),
            _ => None,
        },
    };

    if let Some(ref c) = commit {
        debug!("Commit: {:?}", c);
    }
    commit
}
