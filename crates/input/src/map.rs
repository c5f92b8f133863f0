//! Key mapping from terminal events to commands.

use crate::types::ShiftDirection;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keyboard command before it is resolved against the focus cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Move the focus cursor by one cell.
    Focus { drow: isize, dcol: isize },
    /// Shift the focused row.
    ShiftRow(ShiftDirection),
    /// Shift the focused column.
    ShiftColumn(ShiftDirection),
    /// Press (or release) the focused cell.
    Activate,
    /// Drop an in-progress keyboard drag.
    Cancel,
    ToggleMode,
    Reset,
}

/// Map keyboard input to commands.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyCommand> {
    match key.code {
        // Focus
        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(KeyCommand::Focus { drow: 0, dcol: -1 })
        }
        KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(KeyCommand::Focus { drow: 0, dcol: 1 })
        }
        KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(KeyCommand::Focus { drow: -1, dcol: 0 })
        }
        KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(KeyCommand::Focus { drow: 1, dcol: 0 })
        }

        // Shifts: forward moves letters toward index 0
        KeyCode::Left => Some(KeyCommand::ShiftRow(ShiftDirection::Forward)),
        KeyCode::Right => Some(KeyCommand::ShiftRow(ShiftDirection::Backward)),
        KeyCode::Up => Some(KeyCommand::ShiftColumn(ShiftDirection::Forward)),
        KeyCode::Down => Some(KeyCommand::ShiftColumn(ShiftDirection::Backward)),

        // Actions
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyCommand::Activate),
        KeyCode::Esc => Some(KeyCommand::Cancel),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(KeyCommand::ToggleMode),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyCommand::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
