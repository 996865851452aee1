use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::InputState;
use crate::tui::component::Component;
use crate::tui::components::{
    Banner, ConfirmToggle, LEFT_COLUMN, LogPanel, Menu, TOP_ROW, TextPrompt, line_rect,
};
use crate::tui::{Screen, TuiState};

pub const PAUSE_HINT: &str = "Press any key to return to the menu";

/// Notice sits one blank row below the prompt line.
const NOTICE_ROW: u16 = TOP_ROW + 2;

pub fn draw_ui(frame: &mut Frame, tui: &TuiState) {
    let area = frame.area();

    match &tui.screen {
        Screen::Dialog { prompt, state } => {
            match state {
                InputState::MenuNav(menu) => Menu::new(menu).render(frame, area),
                InputState::Confirming(confirm) => {
                    ConfirmToggle::new(prompt, confirm).render(frame, area)
                }
                InputState::CapturingText(text) => TextPrompt::new(prompt, text).render(frame, area),
            }
            if !matches!(state, InputState::MenuNav(_))
                && let Some(notice) = &tui.notice
            {
                draw_dim_line(frame, area, NOTICE_ROW, notice);
            }
        }
        Screen::Message(text) => Banner::new(text).render(frame, area),
        Screen::Log => LogPanel::new(&tui.log).render(frame, area),
    }

    if tui.paused {
        draw_dim_line(frame, area, area.height.saturating_sub(1), PAUSE_HINT);
    }
}

fn draw_dim_line(frame: &mut Frame, area: Rect, row: u16, text: &str) {
    if let Some(rect) = line_rect(area, row, LEFT_COLUMN) {
        frame.render_widget(Span::styled(text, Style::default().fg(Color::DarkGray)), rect);
    }
}
