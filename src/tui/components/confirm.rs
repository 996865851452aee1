//! # Confirm Component
//!
//! A question on the first row and a `yes  no` toggle just below the
//! vertical middle of the area. The selected option is highlighted.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use super::{Banner, highlight_style, line_rect};
use crate::core::state::{ConfirmModel, ConfirmOption};
use crate::tui::component::Component;

/// Horizontal span reserved for both options, centered on the area.
const OPTIONS_WIDTH: u16 = 10;

pub struct ConfirmToggle<'a> {
    prompt: &'a str,
    model: &'a ConfirmModel,
}

impl<'a> ConfirmToggle<'a> {
    pub fn new(prompt: &'a str, model: &'a ConfirmModel) -> Self {
        Self { prompt, model }
    }

    fn render_option(&self, frame: &mut Frame, area: Rect, row: u16, column: u16, option: ConfirmOption) {
        let label = match option {
            ConfirmOption::Yes => "yes",
            ConfirmOption::No => "no",
        };
        let Some(rect) = line_rect(area, row, column) else {
            return;
        };
        let span = if self.model.selected == option {
            Span::styled(label, highlight_style())
        } else {
            Span::raw(label)
        };
        frame.render_widget(span, rect);
    }
}

/// Columns of the `yes` and `no` labels for an area `width` cells wide.
fn option_columns(width: u16) -> (u16, u16) {
    let center = width / 2;
    let yes = (center + 3).saturating_sub(OPTIONS_WIDTH / 2);
    let no = (center + OPTIONS_WIDTH / 2).saturating_sub(2);
    (yes, no)
}

impl Component for ConfirmToggle<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        Banner::new(self.prompt).render(frame, area);

        let row = area.height / 2 + 1;
        let (yes_column, no_column) = option_columns(area.width);
        self.render_option(frame, area, row, yes_column, ConfirmOption::Yes);
        self.render_option(frame, area, row, no_column, ConfirmOption::No);
    }
}
