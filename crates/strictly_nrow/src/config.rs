//! Board geometry configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Largest side length the one-byte-per-cell wire format is specified for.
pub const MAX_BOARD_SIZE: usize = 255;

/// Board size and win length for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cells per side.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Marks in a row needed to win.
    #[serde(default = "default_win_length")]
    win_length: usize,
}

fn default_board_size() -> usize {
    3
}

fn default_win_length() -> usize {
    3
}

impl GameConfig {
    /// Creates a configuration (unvalidated; see [`GameConfig::validate`]).
    pub fn new(board_size: usize, win_length: usize) -> Self {
        Self {
            board_size,
            win_length,
        }
    }

    /// Checks `1 <= win_length <= board_size <= MAX_BOARD_SIZE`.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "Board size must be between 1 and {}, got {}",
                MAX_BOARD_SIZE, self.board_size
            )));
        }
        if self.win_length == 0 || self.win_length > self.board_size {
            return Err(ConfigError::new(format!(
                "Win length must be between 1 and {}, got {}",
                self.board_size, self.win_length
            )));
        }
        debug!("Config valid");
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_board_size(), default_win_length())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
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
