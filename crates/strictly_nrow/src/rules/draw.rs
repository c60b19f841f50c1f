//! Draw detection.

use super::win::find_winning_line;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the board is full with no winning line of `win_length`.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, win_length: usize) -> bool {
    board.is_full() && find_winning_line(board, win_length).is_none()
}
