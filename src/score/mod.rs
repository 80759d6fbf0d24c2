//! Session-scoped score keeping.

mod error;
mod store;
mod tracker;

pub use error::StoreError;
pub use store::{FileStore, MemoryStore, SessionStore};
pub use tracker::{SCORE_KEY, Score, ScoreTracker};
