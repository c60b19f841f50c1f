//! Phase consistency invariant: the phase reflects the board's result.

use super::Invariant;
use crate::rules::check_result;
use crate::{GameState, Phase};

/// Invariant: `phase == GameOver` exactly when the rules report a win or
/// draw, and the stored result is the one the rules report.
pub struct PhaseConsistentInvariant;

impl Invariant<GameState> for PhaseConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let actual = check_result(state.board(), *state.win_length());
        let over = *state.phase() == Phase::GameOver;
        over == actual.is_terminal() && *state.result() == actual
    }

    fn description() -> &'static str {
        "Phase is GameOver iff the board is won or drawn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Placement, PlayerId};

    #[test]
    fn test_holds_through_a_win() {
        let state = [
            Placement::new(PlayerId::X, Move::new(0, 0)),
            Placement::new(PlayerId::O, Move::new(1, 0)),
            Placement::new(PlayerId::X, Move::new(0, 1)),
            Placement::new(PlayerId::O, Move::new(1, 1)),
            Placement::new(PlayerId::X, Move::new(0, 2)),
        ]
        .into_iter()
        .try_fold(GameState::new(3, 3, PlayerId::X), |s, p| {
            assert!(PhaseConsistentInvariant::holds(&s));
            s.apply(p)
        })
        .expect("legal moves");

        assert_eq!(*state.phase(), Phase::GameOver);
        assert!(PhaseConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_stale_phase_violates() {
        let mut state = GameState::new(3, 3, PlayerId::X);
        state.phase = Phase::GameOver;
        assert!(!PhaseConsistentInvariant::holds(&state));
    }
}
