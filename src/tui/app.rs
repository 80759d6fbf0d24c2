//! Application state and event handling.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, instrument};

use super::input::{Action, key_action};
use super::ui;
use crate::games::tictactoe::Position;
use crate::session::{Intent, Session, Snapshot};

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    viewport: Rect,
}

impl App {
    /// Creates an app around `session` with the cursor on the center cell.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            cursor: Position::Center,
            viewport: Rect::default(),
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Snapshot for the next frame.
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Records the frame size used for mouse hit-testing.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match key_action(key, self.cursor) {
            Some(Action::Quit) => {
                debug!("Quit requested");
                Flow::Quit
            }
            Some(Action::MoveCursor(pos)) => {
                self.cursor = pos;
                Flow::Continue
            }
            Some(Action::Dispatch(intent)) => {
                if let Intent::ChooseCell(pos) = intent {
                    self.cursor = pos;
                }
                self.session.dispatch(intent);
                Flow::Continue
            }
            None => Flow::Continue,
        }
    }

    /// Handles a mouse event. A left click on a cell chooses it.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        match ui::cell_at(self.viewport, event.column, event.row) {
            Some(pos) => {
                self.cursor = pos;
                self.session.dispatch(Intent::ChooseCell(pos));
            }
            None => debug!(column = event.column, row = event.row, "Click outside board"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameStatus, Mark, Square};
    use crate::score::{MemoryStore, ScoreTracker};
    use crate::theme::Theme;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App {
        let mut app = App::new(Session::new(
            ScoreTracker::load(Box::new(MemoryStore::new())),
            Theme::Light,
        ));
        app.set_viewport(Rect::new(0, 0, 80, 24));
        app
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(pos: Position, viewport: Rect) -> MouseEvent {
        let cell = ui::cell_rect(ui::board_area(viewport), pos);
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: cell.x + 1,
            row: cell.y + 1,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_keyboard_game() {
        let mut app = app();
        for key in ['1', '4', '2', '5', '3'] {
            assert_eq!(app.handle_key(press(KeyCode::Char(key))), Flow::Continue);
        }
        assert_eq!(app.session().game().status(), GameStatus::Won(Mark::X));
        assert_eq!(app.session().score().wins(Mark::X), 1);
        assert_eq!(app.cursor(), Position::TopRight);
    }

    #[test]
    fn test_arrows_then_enter() {
        let mut app = app();
        app.handle_key(press(KeyCode::Up));
        app.handle_key(press(KeyCode::Left));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(
            app.session().game().board().get(Position::TopLeft),
            Square::Occupied(Mark::X)
        );
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert_eq!(app.handle_key(press(KeyCode::Esc)), Flow::Quit);
    }

    #[test]
    fn test_left_click_plays_cell() {
        let mut app = app();
        let viewport = Rect::new(0, 0, 80, 24);
        app.handle_mouse(click(Position::BottomRight, viewport));
        assert_eq!(
            app.session().game().board().get(Position::BottomRight),
            Square::Occupied(Mark::X)
        );
        assert_eq!(app.cursor(), Position::BottomRight);
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let mut app = app();
        let mut event = click(Position::Center, Rect::new(0, 0, 80, 24));
        event.kind = MouseEventKind::Down(MouseButton::Right);
        app.handle_mouse(event);
        event.kind = MouseEventKind::Moved;
        app.handle_mouse(event);
        assert!(app.session().game().board().is_empty());
    }

    #[test]
    fn test_click_outside_board_ignored() {
        let mut app = app();
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert!(app.session().game().board().is_empty());
    }
}
