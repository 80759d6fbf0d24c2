//! Tic-tac-toe: board, rules and game state machine.

mod game;
mod position;
mod rules;
mod types;

pub use game::{Game, MoveRejection, Transition};
pub use position::Position;
pub use rules::{Line, WINNING_LINES, check_winner, is_draw, is_full, winning_line};
pub use types::{Board, GameStatus, Mark, Square};
