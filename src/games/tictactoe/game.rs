//! Tic-tac-toe state machine.
//!
//! [`Game::apply_move`] returns an explicit [`Transition`] instead of
//! leaving callers to diff state. A [`Transition::Won`] is produced exactly
//! once per game: every move after that is ignored.

use super::rules::{Line, check_winner, is_draw, winning_line};
use super::{Board, GameStatus, Mark, Position, Square};
use tracing::{debug, info, instrument};

/// Why a move attempt was ignored.
///
/// Ignored moves are not errors; they leave the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The index does not name a square.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

/// Result of a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Ignored(MoveRejection),
    /// Mark placed; the game continues with `next` to move.
    Continue {
        /// Mark to move next.
        next: Mark,
    },
    /// Mark placed and it completed `line`.
    Won {
        /// The winning mark.
        winner: Mark,
        /// The line that won.
        line: Line,
    },
    /// Mark placed and filled the board without a winner.
    Draw,
}

/// Tic-tac-toe game engine.
///
/// Owns the board, the mark to move, the status and the winning line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    winning_line: Option<Line>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winning line, set only when the game is won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Number of marks placed so far.
    pub fn moves_made(&self) -> usize {
        self.board.occupied()
    }

    /// Places the current mark at `pos`.
    ///
    /// Ignored when the game is over or the square is occupied.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, pos: Position) -> Transition {
        if self.status.is_over() {
            debug!(status = ?self.status, "Move ignored, game is over");
            return Transition::Ignored(MoveRejection::GameOver);
        }

        if !self.board.is_empty(pos) {
            debug!(%pos, "Move ignored, square occupied");
            return Transition::Ignored(MoveRejection::SquareOccupied(pos));
        }

        let mark = self.to_move;
        self.board.set(pos, Square::Occupied(mark));
        self.to_move = mark.opponent();

        self.update_status()
    }

    /// Places the current mark at a raw board index (0-8).
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Transition {
        match Position::from_index(index) {
            Some(pos) => self.apply_move(pos),
            None => {
                debug!(index, "Move ignored, index out of bounds");
                Transition::Ignored(MoveRejection::OutOfBounds(index))
            }
        }
    }

    /// Resets to an empty board with X to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(moves_made = self.moves_made(), "Restarting game");
        *self = Self::new();
    }

    /// Re-derives status from the board after a move.
    fn update_status(&mut self) -> Transition {
        if let (Some(winner), Some(line)) = (check_winner(&self.board), winning_line(&self.board)) {
            self.status = GameStatus::Won(winner);
            self.winning_line = Some(line);
            info!(%winner, line = ?line.indices(), "Game won");
            return Transition::Won { winner, line };
        }

        if is_draw(&self.board) {
            self.status = GameStatus::Draw;
            info!("Game drawn");
            return Transition::Draw;
        }

        Transition::Continue { next: self.to_move }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut Game, indices: &[usize]) -> Vec<Transition> {
        indices.iter().map(|&i| game.apply_index(i)).collect()
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.to_move(), Mark::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.winning_line(), None);
        assert_eq!(game.moves_made(), 0);
    }

    #[test]
    fn test_move_flips_turn() {
        let mut game = Game::new();
        let t = game.apply_move(Position::Center);
        assert_eq!(t, Transition::Continue { next: Mark::O });
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(game.to_move(), Mark::O);
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut game = Game::new();
        game.apply_move(Position::Center);
        let before = game.clone();

        let t = game.apply_move(Position::Center);
        assert_eq!(
            t,
            Transition::Ignored(MoveRejection::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut game = Game::new();
        assert_eq!(
            game.apply_index(9),
            Transition::Ignored(MoveRejection::OutOfBounds(9))
        );
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_top_row_win() {
        let mut game = Game::new();
        let transitions = play(&mut game, &[0, 3, 1, 4, 2]);

        let last = transitions.last().copied();
        assert!(matches!(
            last,
            Some(Transition::Won { winner: Mark::X, line }) if line.indices() == [0, 1, 2]
        ));
        assert_eq!(game.status(), GameStatus::Won(Mark::X));
        assert_eq!(game.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
        assert_eq!(
            transitions.iter().filter(|t| matches!(t, Transition::Won { .. })).count(),
            1
        );
    }

    #[test]
    fn test_moves_after_win_are_ignored() {
        let mut game = Game::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        let before = game.clone();

        for i in [5, 6, 7, 8] {
            assert_eq!(
                game.apply_index(i),
                Transition::Ignored(MoveRejection::GameOver)
            );
        }
        assert_eq!(game, before);
    }

    #[test]
    fn test_draw() {
        let mut game = Game::new();
        // X O X / X O O / O X X
        let transitions = play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(transitions.last(), Some(&Transition::Draw));
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn test_win_on_last_square_is_not_draw() {
        let mut game = Game::new();
        // X O X / O X O / O X X  -> X completes the diagonal on the 9th move
        let transitions = play(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);
        assert!(
            transitions[..8]
                .iter()
                .all(|t| matches!(t, Transition::Continue { .. }))
        );
        assert!(matches!(
            transitions[8],
            Transition::Won { winner: Mark::X, .. }
        ));
    }

    #[test]
    fn test_restart_clears_everything() {
        let mut game = Game::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        game.restart();
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_mark_counts_stay_balanced() {
        let mut game = Game::new();
        for i in [4, 0, 8, 2, 6, 3, 5] {
            game.apply_index(i);
            let x = game.board().count(Mark::X);
            let o = game.board().count(Mark::O);
            assert!(x == o || x == o + 1, "x={x} o={o}");
            assert_eq!(x + o, game.moves_made());
        }
    }
}
