//! Keyboard input decoding for the interactive selector
//!
//! Crossterm delivers decoded terminal events (including the `ESC [ A/B`
//! arrow sequences); this module narrows them down to the closed set of keys
//! the selector reacts to. Everything else maps to [`Key::Unknown`] and is
//! ignored by the state machine.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use super::{SelectError, SelectResult};

/// The keys the selector distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Arrow-up or `k`
    Up,
    /// Arrow-down or `j`
    Down,
    /// Toggle the highlighted item
    Space,
    /// Confirm the selection
    Enter,
    /// Abort the selection
    CtrlC,
    /// Anything the selector does not react to
    Unknown,
}

/// Block until the next key press and decode it.
pub fn read_key() -> SelectResult<Key> {
    loop {
        let event = event::read().map_err(SelectError::Io)?;

        if let Event::Key(key) = event {
            // Ignore release/repeat events reported by some terminals.
            if key.kind != KeyEventKind::Press {
                continue;
            }

            return Ok(decode(key.code, key.modifiers));
        }
    }
}

/// Map a crossterm key code to the selector's key set.
pub fn decode(code: KeyCode, modifiers: KeyModifiers) -> Key {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Key::CtrlC,
            _ => Key::Unknown,
        };
    }

    match code {
        KeyCode::Up | KeyCode::Char('k') => Key::Up,
        KeyCode::Down | KeyCode::Char('j') => Key::Down,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Enter => Key::Enter,
        _ => Key::Unknown,
    }
}
