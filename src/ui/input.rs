//! Maps physical keys to the abstract events the game loop understands.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveCursorUp,
    MoveCursorDown,
    MoveCursorLeft,
    MoveCursorRight,
    Confirm,
    /// Leave before the game is over
    Interrupt,
}

impl InputEvent {
    /// Translate a key press; keys with no meaning yield `None`.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        match key.code {
            // Raw mode swallows SIGINT, so Ctrl-C arrives as a key
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(InputEvent::Interrupt)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Interrupt),
            KeyCode::Up => Some(InputEvent::MoveCursorUp),
            KeyCode::Down => Some(InputEvent::MoveCursorDown),
            KeyCode::Left => Some(InputEvent::MoveCursorLeft),
            KeyCode::Right => Some(InputEvent::MoveCursorRight),
            KeyCode::Enter | KeyCode::Char(' ') => Some(InputEvent::Confirm),
            _ => None,
        }
    }
}

/// Block until the next terminal event. Returns `None` for anything that is not
/// a key press (resizes, key releases), which still warrants a redraw.
pub fn next_key() -> io::Result<Option<KeyEvent>> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}
