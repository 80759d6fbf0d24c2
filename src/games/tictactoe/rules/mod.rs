//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from board storage and from the state machine so both the
//! game and its tests can call them directly.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, WINNING_LINES, check_winner, winning_line};
