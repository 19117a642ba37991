//! Input module - maps key events to game actions
//!
//! The game has a single gameplay input: the swing impulse. Quit detection
//! is kept separate so the loop can exit before touching game state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Map a key press to a game action, if any.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(GameAction::Flap),
        _ => None,
    }
}

/// Whether this key press should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn flap_keys_map_to_flap() {
        assert_eq!(handle_key_event(key(KeyCode::Char(' '))), Some(GameAction::Flap));
        assert_eq!(handle_key_event(key(KeyCode::Up)), Some(GameAction::Flap));
        assert_eq!(handle_key_event(key(KeyCode::Enter)), Some(GameAction::Flap));
    }

    #[test]
    fn unrelated_keys_do_nothing() {
        assert_eq!(handle_key_event(key(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(key(KeyCode::Down)), None);
        assert!(!should_quit(key(KeyCode::Char('x'))));
    }

    #[test]
    fn quit_keys_are_recognized() {
        assert!(should_quit(key(KeyCode::Esc)));
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(key(KeyCode::Char('c'))));
    }
}
