//! Arena error types.

use derive_more::{Display, Error};
use strictly_nrow::ai::AiError;
use strictly_nrow::{ConfigError, MoveError};

/// Arena error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Arena error: {} at {}:{}", message, file, line)]
pub struct ArenaError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ArenaError {
    /// Creates a new arena error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<ConfigError> for ArenaError {
    #[track_caller]
    fn from(err: ConfigError) -> Self {
        Self::new(format!("Invalid configuration: {}", err.message))
    }
}

impl From<MoveError> for ArenaError {
    #[track_caller]
    fn from(err: MoveError) -> Self {
        Self::new(format!("Rejected move: {}", err))
    }
}

impl From<AiError> for ArenaError {
    #[track_caller]
    fn from(err: AiError) -> Self {
        Self::new(format!("Strategy failed: {}", err))
    }
}
