//! Contract-based validation for move application.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{MoveError, Placement};
use super::invariants::{InvariantSet, RoundInvariants};
use super::{GameState, Phase};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: The round must still be in play.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks the precondition.
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.phase == Phase::GameOver {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks the precondition.
    pub fn check(placement: &Placement, state: &GameState) -> Result<(), MoveError> {
        if placement.player != state.current_player {
            Err(MoveError::WrongPlayer(placement.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The target cell must be on the board.
pub struct CellInBounds;

impl CellInBounds {
    /// Checks the precondition.
    pub fn check(placement: &Placement, state: &GameState) -> Result<(), MoveError> {
        let mv = placement.mv;
        if state.board.contains(mv.row, mv.col) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                mv,
                size: state.board.size(),
            })
        }
    }
}

/// Precondition: The target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks the precondition.
    pub fn check(placement: &Placement, state: &GameState) -> Result<(), MoveError> {
        let mv = placement.mv;
        match state.board.cell_at(mv.row, mv.col)? {
            crate::CellState::Empty => Ok(()),
            _ => Err(MoveError::CellOccupied(mv)),
        }
    }
}

/// Composite precondition: round in play, player's turn, cell on the board and empty.
///
/// Checks run in that order, so a move after the round ended reports
/// [`MoveError::GameOver`] even if it also targets an occupied cell.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(placement: &Placement, state: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        PlayersTurn::check(placement, state)?;
        CellInBounds::check(placement, state)?;
        CellIsEmpty::check(placement, state)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - Exactly one more move is recorded
/// - Board remains monotonic
/// - Mark counts stay balanced
/// - Phase matches the board's result
pub struct MoveContract;

impl Contract<GameState, Placement> for MoveContract {
    fn pre(state: &GameState, action: &Placement) -> Result<(), MoveError> {
        LegalMove::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.history.len() != before.history.len() + 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: history grew from {} to {}",
                before.history.len(),
                after.history.len()
            )));
        }
        RoundInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
