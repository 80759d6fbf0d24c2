//! Session store error types.

use derive_more::{Display, Error};
use std::path::Path;
use tracing::instrument;

/// A session store value could not be read or written.
///
/// Never surfaces past [`ScoreTracker`](crate::ScoreTracker), which logs it
/// and falls back to the in-memory score. Records where it was raised.
#[derive(Debug, Clone, Display, Error)]
#[display("Session store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// What failed, including the key or path involved.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Reading the value stored at `path` failed.
    #[track_caller]
    pub fn read(path: &Path, err: std::io::Error) -> Self {
        Self::new(format!("Cannot read '{}': {}", path.display(), err))
    }

    /// Writing the value stored at `path` failed.
    #[track_caller]
    pub fn write(path: &Path, err: std::io::Error) -> Self {
        Self::new(format!("Cannot write '{}': {}", path.display(), err))
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("Session directory unavailable: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_messages_name_the_path() {
        let path = Path::new("/run/user/1000/tictactoe/ttt-score.json");
        let read = StoreError::read(path, ErrorKind::PermissionDenied.into());
        let write = StoreError::write(path, ErrorKind::PermissionDenied.into());

        assert!(read.message.contains("Cannot read '/run/user/1000/tictactoe/ttt-score.json'"));
        assert!(write.message.contains("Cannot write '/run/user/1000/tictactoe"));
        assert!(read.to_string().starts_with("Session store error: Cannot read"));
    }

    #[test]
    fn test_records_caller_location() {
        let err = StoreError::new("boom");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.line > 0);
    }
}
