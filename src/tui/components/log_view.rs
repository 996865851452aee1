//! # Log View
//!
//! Incremental status lines written one below the other during a workflow.
//! `LogView` is persistent state kept in `TuiState`; `LogPanel` is the
//! transient render wrapper built each frame.
//!
//! Each line is stored with the position it was written at. The write
//! cursor goes back to the top whenever the log is reset, which happens
//! every time another screen has been shown in between.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use super::{LEFT_COLUMN, TOP_ROW, line_rect};
use crate::tui::component::Component;

/// Where the next log line is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    pub row: u16,
    pub column: u16,
}

impl CursorPosition {
    pub const TOP: CursorPosition = CursorPosition {
        row: TOP_ROW,
        column: LEFT_COLUMN,
    };
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self::TOP
    }
}

#[derive(Debug, Default)]
pub struct LogView {
    lines: Vec<(CursorPosition, String)>,
    cursor: CursorPosition,
}

impl LogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: &str) {
        self.lines.push((self.cursor, line.to_string()));
        self.cursor.row = self.cursor.row.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.lines.clear();
        self.cursor = CursorPosition::TOP;
    }

    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub struct LogPanel<'a> {
    view: &'a LogView,
}

impl<'a> LogPanel<'a> {
    pub fn new(view: &'a LogView) -> Self {
        Self { view }
    }
}

impl Component for LogPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        for (position, line) in &self.view.lines {
            if let Some(rect) = line_rect(area, position.row, position.column) {
                frame.render_widget(Span::raw(line.as_str()), rect);
            }
        }
    }
}
