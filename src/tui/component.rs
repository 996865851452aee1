use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive their data via props (struct fields, usually borrowed
/// core models) and render to a `Frame` within a given `Rect`. They never
/// change core state; key handling lives in `core::action::update`.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
