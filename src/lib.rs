//! Tic-Tac-Toe library - game rules, session score and terminal UI
//!
//! Two players alternate on a 3x3 grid. Wins are tallied per mark and kept
//! in a session-lifetime store so the score survives a restart of the
//! program but not the end of the login session.
//!
//! # Architecture
//!
//! - **Games**: Board types, the win/draw evaluator and the game state machine
//! - **Score**: Win counters written through to a [`SessionStore`]
//! - **Session**: Routes user intents to the game, score and theme
//! - **TUI**: ratatui front end rendering [`Snapshot`]s
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameStatus, Intent, Mark, MemoryStore, Position, ScoreTracker, Session, Theme};
//!
//! let tracker = ScoreTracker::load(Box::new(MemoryStore::new()));
//! let mut session = Session::new(tracker, Theme::Light);
//!
//! for pos in [
//!     Position::TopLeft,
//!     Position::MiddleLeft,
//!     Position::TopCenter,
//!     Position::Center,
//!     Position::TopRight,
//! ] {
//!     session.dispatch(Intent::ChooseCell(pos));
//! }
//!
//! let snapshot = session.snapshot();
//! assert_eq!(*snapshot.status(), GameStatus::Won(Mark::X));
//! assert_eq!(snapshot.score().wins(Mark::X), 1);
//! assert_eq!(snapshot.message(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod score;
mod session;
mod theme;
mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, SESSION_DIR_ENV, default_session_dir};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameStatus, Line, Mark, MoveRejection, Position, Square, Transition,
    WINNING_LINES, check_winner, is_draw, is_full, winning_line,
};

// Crate-level exports - Score tracking
pub use score::{FileStore, MemoryStore, SCORE_KEY, Score, ScoreTracker, SessionStore, StoreError};

// Crate-level exports - Session
pub use session::{Intent, Session, Snapshot};

// Crate-level exports - Theme
pub use theme::Theme;

// Crate-level exports - Terminal UI
pub use tui::{
    Action, App, CELL_HEIGHT, CELL_WIDTH, Flow, Palette, board_area, cell_at, cell_rect, draw,
    key_action, move_cursor, run_tui,
};
