//! One-byte-per-cell board encoding for state sync.
//!
//! A board of side `n` encodes to `n²` bytes in row-major order:
//! `0` empty, `1` X, `2` O. Decoding replays the marks in index order
//! through [`Board::with_move`], so a decoded board obeys the same rules
//! as one built by play.

use crate::{Board, CellState, MAX_BOARD_SIZE, MoveError, PlayerId};
use derive_more::Display;
use tracing::{debug, instrument};

/// Errors from [`decode_board`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CodecError {
    /// The byte count is not a perfect square.
    #[display("Board data length {} is not a perfect square", _0)]
    NotSquare(usize),

    /// The side length is zero or above [`MAX_BOARD_SIZE`].
    #[display("Board size {} is outside 1..={}", _0, MAX_BOARD_SIZE)]
    InvalidSize(usize),

    /// A byte is not a known cell value.
    #[display("Invalid cell value {} at index {}", value, index)]
    InvalidCell {
        /// Offending byte offset.
        index: usize,
        /// Offending value.
        value: u8,
    },

    /// Replaying a mark failed.
    #[display("Failed to replay board data: {}", _0)]
    Replay(MoveError),
}

impl std::error::Error for CodecError {}

impl From<MoveError> for CodecError {
    fn from(err: MoveError) -> Self {
        CodecError::Replay(err)
    }
}

/// Encodes `board` as one byte per cell.
pub fn encode_board(board: &Board) -> Vec<u8> {
    board.cells().iter().map(|cell| *cell as u8).collect()
}

/// Rebuilds a board from [`encode_board`] output.
#[instrument(skip(data), fields(len = data.len()))]
pub fn decode_board(data: &[u8]) -> Result<Board, CodecError> {
    let size = data.len().isqrt();
    if size * size != data.len() {
        return Err(CodecError::NotSquare(data.len()));
    }
    if size == 0 || size > MAX_BOARD_SIZE {
        return Err(CodecError::InvalidSize(size));
    }

    let mut board = Board::new(size);
    for (index, value) in data.iter().copied().enumerate() {
        let player = match value {
            v if v == CellState::Empty as u8 => continue,
            v if v == CellState::X as u8 => PlayerId::X,
            v if v == CellState::O as u8 => PlayerId::O,
            value => return Err(CodecError::InvalidCell { index, value }),
        };
        board = board.with_move(index / size, index % size, player)?;
    }

    debug!(size, "Decoded board");
    Ok(board)
}
