//! # Input State
//!
//! The three dialog models and the `InputState` enum that tags which one is
//! currently receiving keys.
//!
//! ```text
//! InputState
//! ├── MenuNav(MenuModel)              // lives for the whole process
//! ├── Confirming(ConfirmModel)        // fresh per yes/no question
//! └── CapturingText(TextCaptureModel) // fresh per text prompt
//! ```
//!
//! Models only change through their own methods, which `action::update`
//! calls. None of them knows about the terminal.

/// An entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    CreateUser,
    DeleteUser,
    Exit,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 3] = [MenuEntry::CreateUser, MenuEntry::DeleteUser, MenuEntry::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::CreateUser => "Create User",
            MenuEntry::DeleteUser => "Delete User",
            MenuEntry::Exit => "Exit",
        }
    }
}

/// Ordered list of menu entries with a clamped selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuModel {
    entries: Vec<MenuEntry>,
    selected: usize,
}

impl MenuModel {
    /// Builds a menu with the first entry selected.
    ///
    /// Returns `None` for an empty entry list, since no valid selection exists.
    pub fn new(entries: Vec<MenuEntry>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self { entries, selected: 0 })
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> MenuEntry {
        self.entries[self.selected]
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1).min(self.entries.len() - 1);
    }
}

impl Default for MenuModel {
    fn default() -> Self {
        Self {
            entries: MenuEntry::ALL.to_vec(),
            selected: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmOption {
    #[default]
    Yes,
    No,
}

/// A yes/no question. Starts on `Yes`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfirmModel {
    pub selected: ConfirmOption,
}

impl ConfirmModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_yes(&mut self) {
        self.selected = ConfirmOption::Yes;
    }

    pub fn select_no(&mut self) {
        self.selected = ConfirmOption::No;
    }

    pub fn is_yes(&self) -> bool {
        self.selected == ConfirmOption::Yes
    }
}

/// Free-text buffer restricted to printable ASCII.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextCaptureModel {
    buffer: String,
}

impl TextCaptureModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Appends `c` if it is printable ASCII (32..=126). Returns whether it was accepted.
    pub fn push(&mut self, c: char) -> bool {
        if is_printable_ascii(c) {
            self.buffer.push(c);
            true
        } else {
            false
        }
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }
}

pub fn is_printable_ascii(c: char) -> bool {
    (' '..='~').contains(&c)
}

/// Which dialog currently owns the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputState {
    MenuNav(MenuModel),
    Confirming(ConfirmModel),
    CapturingText(TextCaptureModel),
}

impl InputState {
    pub fn confirming() -> Self {
        InputState::Confirming(ConfirmModel::new())
    }

    pub fn capturing_text() -> Self {
        InputState::CapturingText(TextCaptureModel::new())
    }
}

impl Default for InputState {
    fn default() -> Self {
        InputState::MenuNav(MenuModel::default())
    }
}
