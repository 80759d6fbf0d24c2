//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight triples of positions that wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if `pos` is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Winning lines in evaluation priority order.
pub const WINNING_LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first complete line in [`WINNING_LINES`] order.
///
/// A line is complete when all three squares hold the same mark.
#[instrument]
pub fn winning_line(board: &Board) -> Option<Line> {
    WINNING_LINES.into_iter().find(|line| {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns the mark on the line reported by [`winning_line`], so both
/// functions agree even when several lines are complete.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    let line = winning_line(board)?;
    board.get(line.positions()[0]).mark()
}
