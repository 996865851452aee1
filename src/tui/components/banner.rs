//! One line of text at the top of an otherwise empty screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use super::{LEFT_COLUMN, TOP_ROW, line_rect};
use crate::tui::component::Component;

pub struct Banner<'a> {
    pub text: &'a str,
}

impl<'a> Banner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Component for Banner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if let Some(rect) = line_rect(area, TOP_ROW, LEFT_COLUMN) {
            frame.render_widget(Span::raw(self.text), rect);
        }
    }
}
