//! Per-mark win counters persisted to a session store.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::games::tictactoe::Mark;
use crate::score::SessionStore;

/// Session store key holding the serialized [`Score`].
pub const SCORE_KEY: &str = "ttt-score";

/// Win count per mark.
///
/// Serialized as `{"X": <wins>, "O": <wins>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "X")]
    x: u32,
    #[serde(rename = "O")]
    o: u32,
}

impl Score {
    /// Creates a score with the given win counts.
    pub fn new(x: u32, o: u32) -> Self {
        Self { x, o }
    }

    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    fn increment(&mut self, mark: Mark) {
        let count = match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        };
        *count = count.saturating_add(1);
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X: {}  O: {}", self.x, self.o)
    }
}

/// Keeps the session score and writes it through after every change.
///
/// Store failures never reach the caller: a missing or corrupt value loads
/// as zero, and a failed write leaves the score in memory only.
#[derive(Debug)]
pub struct ScoreTracker {
    store: Box<dyn SessionStore>,
    score: Score,
}

impl ScoreTracker {
    /// Restores the score from `store`, or starts at zero.
    #[instrument(skip(store))]
    pub fn load(store: Box<dyn SessionStore>) -> Self {
        let score = match read_stored(store.as_ref()) {
            Some(score) => {
                info!(%score, "Score restored from session");
                score
            }
            None => Score::default(),
        };

        Self { store, score }
    }

    /// Current score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Records a win for `mark` and persists the new score.
    ///
    /// The stored score is re-read first, so wins recorded by another
    /// tracker on the same store since [`ScoreTracker::load`] are kept.
    /// Must be called exactly once per game that ends in a win.
    #[instrument(skip(self))]
    pub fn on_game_won(&mut self, mark: Mark) -> Score {
        if let Some(stored) = read_stored(self.store.as_ref()) {
            if stored != self.score {
                debug!(%stored, local = %self.score, "Adopting stored score");
            }
            self.score = stored;
        }
        self.score.increment(mark);
        info!(score = %self.score, "Win recorded");
        self.save();
        self.score
    }

    /// Clears both counters and persists the result.
    ///
    /// Returns false if the write failed.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> bool {
        self.score = Score::default();
        info!("Score reset");
        self.save()
    }

    /// Writes the current score to the store.
    ///
    /// Returns false if the write failed; the in-memory score is kept.
    #[instrument(skip(self), fields(score = %self.score))]
    pub fn save(&mut self) -> bool {
        let raw = match serde_json::to_string(&self.score) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Failed to serialize score");
                return false;
            }
        };

        match self.store.set(SCORE_KEY, &raw) {
            Ok(()) => {
                debug!("Score persisted");
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to persist score, keeping it in memory");
                false
            }
        }
    }
}

/// Reads and parses the stored score. Absent, unreadable or malformed
/// values yield `None`.
fn read_stored(store: &dyn SessionStore) -> Option<Score> {
    match store.get(SCORE_KEY) {
        Ok(Some(raw)) => match serde_json::from_str::<Score>(&raw) {
            Ok(score) => Some(score),
            Err(e) => {
                warn!(error = %e, "Stored score is malformed, ignoring it");
                None
            }
        },
        Ok(None) => {
            debug!("No stored score");
            None
        }
        Err(e) => {
            warn!(error = %e, "Failed to read stored score");
            None
        }
    }
}
