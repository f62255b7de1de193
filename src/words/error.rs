//! Word list error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Word list error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Word list error: {} at {}:{}", message, file, line)]
pub struct WordListError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WordListError {
    /// Creates a new word list error with caller location tracking.
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
}
