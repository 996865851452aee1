use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Key;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Key(Key),
    /// A key press with no `Key` mapping (Esc, Tab, F-keys, chords).
    /// Dialogs ignore it; it still counts as "any key".
    OtherKey,
    Resize,
}

impl TuiEvent {
    /// True for every key press, mapped or not.
    pub fn is_key_press(&self) -> bool {
        matches!(self, TuiEvent::Key(_) | TuiEvent::OtherKey)
    }
}

/// Block until the next terminal event. Returns `None` for events that
/// carry no meaning here (mouse, focus, key releases).
pub fn read_event() -> std::io::Result<Option<TuiEvent>> {
    let event = event::read()?;
    if let Event::Key(key_event) = &event {
        log::debug!(
            "Key event: {:?} with modifiers {:?} ({:?})",
            key_event.code,
            key_event.modifiers,
            key_event.kind
        );
    }
    Ok(translate(event))
}

pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            Some(map_key(key_event).map_or(TuiEvent::OtherKey, TuiEvent::Key))
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Translate a crossterm key event into a core `Key`.
///
/// Only presses count. In raw mode a bare line feed arrives as Ctrl+J and a
/// carriage return may arrive as Ctrl+M; both are Enter.
pub fn map_key(key_event: KeyEvent) -> Option<Key> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    let modified = key_event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match key_event.code {
        KeyCode::Char('j') | KeyCode::Char('m') if key_event.modifiers == KeyModifiers::CONTROL => {
            Some(Key::Enter)
        }
        KeyCode::Char(_) if modified => None,
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        _ => None,
    }
}
