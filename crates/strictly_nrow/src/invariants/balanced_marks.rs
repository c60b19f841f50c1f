//! Balanced marks invariant: players alternate, so mark counts stay close.

use super::Invariant;
use crate::{GameState, PlayerId};
use tracing::warn;

/// Invariant: the X and O mark counts differ by at most one.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count_marks(PlayerId::X);
        let o_count = state.board().count_marks(PlayerId::O);

        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}
