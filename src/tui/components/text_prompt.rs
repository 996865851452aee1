//! # TextPrompt Component
//!
//! The prompt followed by the typed text on one line, with the terminal
//! cursor shown right after the last character. The buffer is printable
//! ASCII only, so one char is one cell.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};

use super::{Banner, LEFT_COLUMN, TOP_ROW};
use crate::core::state::TextCaptureModel;
use crate::tui::component::Component;

pub struct TextPrompt<'a> {
    prompt: &'a str,
    model: &'a TextCaptureModel,
}

impl<'a> TextPrompt<'a> {
    pub fn new(prompt: &'a str, model: &'a TextCaptureModel) -> Self {
        Self { prompt, model }
    }

    /// Where the cursor goes: after the text, clamped to the last column.
    pub fn cursor_position(&self, area: Rect) -> Position {
        let typed = u16::try_from(self.prompt.len() + self.model.buffer().len()).unwrap_or(u16::MAX);
        let x = LEFT_COLUMN.saturating_add(typed).min(area.width.saturating_sub(1));
        Position::new(area.x + x, area.y + TOP_ROW.min(area.height.saturating_sub(1)))
    }
}

impl Component for TextPrompt<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = format!("{}{}", self.prompt, self.model.buffer());
        Banner::new(&line).render(frame, area);
        frame.set_cursor_position(self.cursor_position(area));
    }
}
