//! Move coordinates and the placements built from them.
//!
//! A [`Move`] is just a cell address. A [`Placement`] pairs it with the
//! player who intends to occupy it, which is what the state machine
//! validates and records.

use super::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based `(row, col)` board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board with `board_size` cells per side.
    pub fn to_index(self, board_size: usize) -> usize {
        self.row * board_size + self.col
    }

    /// Inverse of [`Move::to_index`].
    pub fn from_index(index: usize, board_size: usize) -> Self {
        Self::new(index / board_size, index % board_size)
    }

    /// Manhattan distance to `other`.
    pub fn manhattan_distance(self, other: Move) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A player placing their mark on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The player making the move.
    pub player: PlayerId,
    /// Where the mark goes.
    pub mv: Move,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(player: PlayerId, mv: Move) -> Self {
        Self { player, mv }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.player, self.mv)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The round has already ended.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("Not {}'s turn", _0)]
    WrongPlayer(PlayerId),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Move),

    /// The coordinates fall outside the board.
    #[display("Cell {} is outside a {}x{} board", mv, size, size)]
    OutOfBounds {
        /// The rejected coordinate.
        mv: Move,
        /// Cells per side of the board.
        size: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Result of applying a move: the new board, or the reason it was rejected.
pub type MoveOutcome = Result<super::Board, MoveError>;
