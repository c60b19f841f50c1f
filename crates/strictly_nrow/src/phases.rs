//! Round phase and the result the rules report for a board.

use super::action::Move;
use super::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    #[default]
    Playing,
    /// A win or draw has been reached; only a round reset leaves this phase.
    GameOver,
}

/// What the rules say about a board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameResult {
    /// A player owns every cell of `line`.
    Win {
        /// The player occupying the line.
        winner: PlayerId,
        /// The winning cells, in line order.
        line: Vec<Move>,
    },
    /// The board is full and nobody won.
    Draw,
    /// Play continues.
    #[default]
    InProgress,
}

impl GameResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Win { winner, .. } => Some(*winner),
            GameResult::Draw | GameResult::InProgress => None,
        }
    }

    /// Returns true for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameResult::Draw)
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win { winner, .. } => write!(f, "Player {} wins", winner),
            GameResult::Draw => write!(f, "Draw"),
            GameResult::InProgress => write!(f, "In progress"),
        }
    }
}
