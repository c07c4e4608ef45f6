use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::session::SessionEvent;

/// Translate a terminal key press into a session event
pub fn map_key(key: KeyEvent) -> Option<SessionEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(SessionEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(SessionEvent::Quit)
        }
        KeyCode::Backspace => Some(SessionEvent::Erase),
        KeyCode::Enter => Some(SessionEvent::Restart),
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            None
        }
        KeyCode::Char(c) => Some(SessionEvent::Character(c)),
        _ => None,
    }
}
