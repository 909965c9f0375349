//! Key mapping from terminal events to buttons.

use crate::types::Buttons;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to the button it drives, if any.
pub fn button_for_key(code: KeyCode) -> Option<Buttons> {
    match code {
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Buttons::LEFT),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Buttons::RIGHT),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Buttons::UP),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Buttons::DOWN),

        // Regenerate
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(Buttons::START),

        _ => None,
    }
}

/// Check if key should quit the viewer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
