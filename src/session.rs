//! Game session: one board, one score, one theme.
//!
//! The session is the only caller of [`ScoreTracker::on_game_won`]; it does
//! so when [`Game::apply_move`] reports [`Transition::Won`], which happens
//! once per game.

use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::games::tictactoe::{Board, Game, GameStatus, Line, Mark, Position, Transition};
use crate::score::{Score, ScoreTracker};
use crate::theme::Theme;

/// A user action dispatched to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// The user chose a cell.
    ChooseCell(Position),
    /// The user asked for a new game.
    Restart,
    /// The user flipped the colour theme.
    ToggleTheme,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Snapshot {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    winning_line: Option<Line>,
    score: Score,
    theme: Theme,
    message: String,
}

impl Snapshot {
    /// Returns true if `pos` is part of the winning line.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(pos))
    }
}

/// A game session.
#[derive(Debug)]
pub struct Session {
    game: Game,
    tracker: ScoreTracker,
    theme: Theme,
}

impl Session {
    /// Creates a session with a fresh game.
    #[instrument(skip(tracker), fields(score = %tracker.score()))]
    pub fn new(tracker: ScoreTracker, theme: Theme) -> Self {
        info!("Creating new game session");
        Self {
            game: Game::new(),
            tracker,
            theme,
        }
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current score.
    pub fn score(&self) -> Score {
        self.tracker.score()
    }

    /// Handles one intent to completion and returns the new snapshot.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> Snapshot {
        match intent {
            Intent::ChooseCell(pos) => {
                self.choose_cell(pos);
            }
            Intent::Restart => self.restart(),
            Intent::ToggleTheme => {
                self.toggle_theme();
            }
        }
        self.snapshot()
    }

    /// Plays the current mark at `pos`, scoring the game if it is won.
    #[instrument(skip(self))]
    pub fn choose_cell(&mut self, pos: Position) -> Transition {
        let transition = self.game.apply_move(pos);
        match transition {
            Transition::Won { winner, .. } => {
                self.tracker.on_game_won(winner);
                info!(%winner, board = %self.game.board(), "Game over");
            }
            Transition::Draw => {
                info!(board = %self.game.board(), "Game over, draw");
            }
            Transition::Ignored(reason) => {
                debug!(%reason, "Cell choice ignored");
            }
            Transition::Continue { next } => {
                debug!(%next, "Move accepted");
            }
        }
        transition
    }

    /// Starts a new game. The score is kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.game.restart();
    }

    /// Flips the theme and returns the new one.
    #[instrument(skip(self))]
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        info!(theme = %self.theme, "Theme toggled");
        self.theme
    }

    /// Builds a render snapshot of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.game.board().clone(),
            to_move: self.game.to_move(),
            status: self.game.status(),
            winning_line: self.game.winning_line(),
            score: self.tracker.score(),
            theme: self.theme,
            message: status_message(self.game.status(), self.game.to_move()),
        }
    }
}

/// Human-readable status line.
fn status_message(status: GameStatus, to_move: Mark) -> String {
    match status {
        GameStatus::InProgress => format!("Next player: {}", to_move),
        GameStatus::Won(winner) => format!("Winner: {}", winner),
        GameStatus::Draw => "Draw!".to_string(),
    }
}
