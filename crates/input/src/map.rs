//! Key mapping from terminal events to ship commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single key's meaning for the ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipCommand {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

impl ShipCommand {
    /// `(rows_direction, columns_direction)` for movement commands.
    pub fn direction(self) -> Option<(i8, i8)> {
        match self {
            ShipCommand::Up => Some((-1, 0)),
            ShipCommand::Down => Some((1, 0)),
            ShipCommand::Left => Some((0, -1)),
            ShipCommand::Right => Some((0, 1)),
            ShipCommand::Fire => None,
        }
    }
}

/// Map keyboard input to ship commands.
pub fn handle_key_event(key: KeyEvent) -> Option<ShipCommand> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(ShipCommand::Up)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(ShipCommand::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(ShipCommand::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(ShipCommand::Right)
        }
        KeyCode::Char(' ') => Some(ShipCommand::Fire),
        _ => None,
    }
}

/// Check if key should quit the animation.
///
/// Raw mode swallows SIGINT, so Ctrl-C arrives here as a key.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
