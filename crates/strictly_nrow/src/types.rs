//! Core domain types for N-in-a-row.

use super::action::{Move, MoveError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum PlayerId {
    /// Player X (moves first in a fresh game).
    X,
    /// Player O.
    O,
}

impl PlayerId {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::X => PlayerId::O,
            PlayerId::O => PlayerId::X,
        }
    }

    /// Seat index of this player (0 for X, 1 for O).
    pub fn index(self) -> u8 {
        match self {
            PlayerId::X => 0,
            PlayerId::O => 1,
        }
    }

    /// The mark this player leaves on the board.
    pub fn mark(self) -> CellState {
        match self {
            PlayerId::X => CellState::X,
            PlayerId::O => CellState::O,
        }
    }
}

/// State of a single cell.
///
/// Discriminants double as the byte encoding used by [`crate::codec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Nobody has played here.
    #[default]
    Empty = 0,
    /// Marked by X.
    X = 1,
    /// Marked by O.
    O = 2,
}

impl CellState {
    /// Returns the player owning this cell, if any.
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            CellState::Empty => None,
            CellState::X => Some(PlayerId::X),
            CellState::O => Some(PlayerId::O),
        }
    }

    fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::X => 'X',
            CellState::O => 'O',
        }
    }
}

/// Square board of `size × size` cells in row-major order.
///
/// Boards are values: [`Board::with_move`] returns a new board and never
/// touches the receiver, so search code can branch without undo logic.
/// A cell goes from `Empty` to a mark once and never reverts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Creates an empty board with `size` cells per side.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellState::Empty; size * size],
        }
    }

    /// Cells per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Returns true if `(row, col)` lies on the board.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Gets the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if either coordinate is outside `[0, size)`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<CellState, MoveError> {
        if !self.contains(row, col) {
            return Err(MoveError::OutOfBounds {
                mv: Move::new(row, col),
                size: self.size,
            });
        }
        Ok(self.cells[row * self.size + col])
    }

    /// Checks if the cell at `(row, col)` is on the board and empty.
    pub fn is_cell_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.cell_at(row, col), Ok(CellState::Empty))
    }

    /// Returns a new board with `player`'s mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if the coordinates are off the board.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    pub fn with_move(&self, row: usize, col: usize, player: PlayerId) -> Result<Self, MoveError> {
        if self.cell_at(row, col)? != CellState::Empty {
            return Err(MoveError::CellOccupied(Move::new(row, col)));
        }
        let mut cells = self.cells.clone();
        cells[row * self.size + col] = player.mark();
        Ok(Self {
            size: self.size,
            cells,
        })
    }

    /// Number of empty cells left.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == CellState::Empty).count()
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != CellState::Empty)
    }

    /// Number of cells carrying `player`'s mark.
    pub fn count_marks(&self, player: PlayerId) -> usize {
        let mark = player.mark();
        self.cells.iter().filter(|c| **c == mark).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(self.size.max(1)).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line: String = chunk.iter().map(|c| c.symbol()).collect();
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
