//! # Menu Component
//!
//! Left-aligned list of menu entries. The selected row is prefixed with
//! `> ` and drawn in the highlight color.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use super::{LEFT_COLUMN, TOP_ROW, highlight_style, line_rect};
use crate::core::state::MenuModel;
use crate::tui::component::Component;

pub struct Menu<'a> {
    model: &'a MenuModel,
}

impl<'a> Menu<'a> {
    pub fn new(model: &'a MenuModel) -> Self {
        Self { model }
    }
}

impl Component for Menu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        for (idx, entry) in self.model.entries().iter().enumerate() {
            let Some(rect) = line_rect(area, TOP_ROW + idx as u16, LEFT_COLUMN) else {
                break;
            };
            let span = if idx == self.model.selected() {
                Span::styled(format!("> {}", entry.label()), highlight_style())
            } else {
                Span::raw(entry.label())
            };
            frame.render_widget(span, rect);
        }
    }
}
