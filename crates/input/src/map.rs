//! Key mapping from terminal events to session commands.

use crate::types::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks of the session.
///
/// `Play` actions go to the running game; `Restart` and `Quit` are handled
/// by the runner regardless of game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Play(Action),
    Restart,
    Quit,
}

/// Map keyboard input to a session command.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyCommand> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(KeyCommand::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(KeyCommand::Play(Action::MoveLeft))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(KeyCommand::Play(Action::MoveRight))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(KeyCommand::Play(Action::SoftDrop))
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(KeyCommand::Play(Action::RotateCw)),

        // Session control
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyCommand::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(KeyCommand::Quit),

        _ => None,
    }
}
