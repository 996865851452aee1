//! # TUI Components
//!
//! Drawing helpers for each screen the menu can show.
//!
//! ## Component Architecture
//!
//! All components are transient wrappers built each frame from borrowed
//! props (props-based rendering). Persistent state is either a core model
//! (`MenuModel`, `ConfirmModel`, `TextCaptureModel`) or, for the incremental
//! log, `LogView`, which lives in `TuiState`.
//!
//! Every component writes text at fixed (row, column) offsets from the top
//! left of its area, the way a plain curses screen would: row 1, column 2
//! is the first line of content.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs         (this file, shared placement helpers)
//! ├── menu.rs        (menu with highlighted row)
//! ├── banner.rs      (single message line)
//! ├── confirm.rs     (yes/no toggle)
//! ├── text_prompt.rs (prompt with typed text and cursor)
//! └── log_view.rs    (incremental log lines)
//! ```

pub mod banner;
pub mod confirm;
pub mod log_view;
pub mod menu;
pub mod text_prompt;

pub use banner::Banner;
pub use confirm::ConfirmToggle;
pub use log_view::{LogPanel, LogView};
pub use menu::Menu;
pub use text_prompt::TextPrompt;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

/// First content row and column, relative to the area.
pub const TOP_ROW: u16 = 1;
pub const LEFT_COLUMN: u16 = 2;

/// Highlight for the selected menu row or yes/no option.
pub fn highlight_style() -> Style {
    Style::default().fg(Color::Magenta).bg(Color::Black)
}

/// A one-line rect at (`row`, `column`) inside `area`, or `None` if that
/// position falls outside it.
pub fn line_rect(area: Rect, row: u16, column: u16) -> Option<Rect> {
    if row >= area.height || column >= area.width {
        return None;
    }
    Some(Rect {
        x: area.x + column,
        y: area.y + row,
        width: area.width - column,
        height: 1,
    })
}

#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}

/// Row `y` of `buffer`, trailing spaces trimmed.
#[cfg(test)]
pub(crate) fn buffer_row(buffer: &ratatui::buffer::Buffer, y: u16) -> String {
    let width = buffer.area.width;
    (0..width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect::<String>()
        .trim_end()
        .to_string()
}
