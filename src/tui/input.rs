//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::instrument;

use crate::games::tictactoe::Position;
use crate::session::Intent;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward an intent to the session.
    Dispatch(Intent),
    /// Move the keyboard cursor.
    MoveCursor(Position),
    /// Leave the game.
    Quit,
}

/// Moves cursor based on arrow keys. Stops at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps a key press to an [`Action`].
#[instrument]
pub fn key_action(key: KeyEvent, cursor: Position) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Dispatch(Intent::Restart)),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(Action::Dispatch(Intent::ToggleTheme)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Dispatch(Intent::ChooseCell(cursor))),
        KeyCode::Char(c) => {
            Position::from_keypad(c).map(|pos| Action::Dispatch(Intent::ChooseCell(pos)))
        }
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(move_cursor(cursor, key.code)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Tab), Position::Center);
    }

    #[test]
    fn test_keypad_chooses_cell() {
        assert_eq!(
            key_action(press(KeyCode::Char('7')), Position::Center),
            Some(Action::Dispatch(Intent::ChooseCell(Position::BottomLeft)))
        );
        assert_eq!(key_action(press(KeyCode::Char('0')), Position::Center), None);
    }

    #[test]
    fn test_enter_chooses_cursor_cell() {
        assert_eq!(
            key_action(press(KeyCode::Enter), Position::TopRight),
            Some(Action::Dispatch(Intent::ChooseCell(Position::TopRight)))
        );
    }

    #[test]
    fn test_control_keys() {
        let cursor = Position::Center;
        assert_eq!(key_action(press(KeyCode::Char('q')), cursor), Some(Action::Quit));
        assert_eq!(
            key_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), cursor),
            Some(Action::Quit)
        );
        assert_eq!(
            key_action(press(KeyCode::Char('r')), cursor),
            Some(Action::Dispatch(Intent::Restart))
        );
        assert_eq!(
            key_action(press(KeyCode::Char('t')), cursor),
            Some(Action::Dispatch(Intent::ToggleTheme))
        );
        assert_eq!(
            key_action(press(KeyCode::Left), cursor),
            Some(Action::MoveCursor(Position::MiddleLeft))
        );
    }
}
