//! Key mapping from terminal events to menu actions.

use crate::types::MenuAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to menu actions.
///
/// Menu digits select their action directly; letter shortcuts are accepted
/// as well. Quitting is reported separately by [`should_quit`].
pub fn handle_key_event(key: KeyEvent) -> Option<MenuAction> {
    match key.code {
        KeyCode::Char(c @ '0'..='9') => MenuAction::from_digit(c),

        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Enter => Some(MenuAction::Play),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(MenuAction::Reserve),
        KeyCode::Char('u') | KeyCode::Char('U') => Some(MenuAction::UseReserved),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(MenuAction::SwapTop),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(MenuAction::SwapTriple),

        _ => None,
    }
}

/// Check if key should end the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('0') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
