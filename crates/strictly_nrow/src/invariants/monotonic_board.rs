//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Once a cell transitions from Empty to a mark, it never changes.
/// This is verified by replaying the round's history and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new(state.board().size());

        for placement in state.history() {
            // with_move refuses to overwrite a mark
            match reconstructed.with_move(placement.mv.row, placement.mv.col, placement.player) {
                Ok(next) => reconstructed = next,
                Err(_) => return false,
            }
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
