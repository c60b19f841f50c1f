//! Complete state of one round.

use super::action::{MoveError, Placement};
use super::phases::{GameResult, Phase};
use super::rules::check_result;
use super::{Board, PlayerId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Complete round state.
///
/// This is also the snapshot a network authority sends to peers to
/// resynchronise them.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub(crate) board: Board,
    /// Marks in a row needed to win.
    pub(crate) win_length: usize,
    /// Player to move (or the final mover once the round is over).
    pub(crate) current_player: PlayerId,
    /// Round phase.
    pub(crate) phase: Phase,
    /// Result of the last applied move.
    pub(crate) result: GameResult,
    /// Moves played this round, in order.
    pub(crate) history: Vec<Placement>,
}

impl GameState {
    /// Creates a fresh round on an empty board.
    pub fn new(board_size: usize, win_length: usize, starting_player: PlayerId) -> Self {
        Self {
            board: Board::new(board_size),
            win_length,
            current_player: starting_player,
            phase: Phase::Playing,
            result: GameResult::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the state after `placement`, leaving `self` untouched.
    ///
    /// Only board-level checks happen here; turn order and phase are the
    /// contract's job (see [`crate::contracts::MoveContract`]).
    pub(crate) fn apply(&self, placement: Placement) -> Result<Self, MoveError> {
        let Placement { player, mv } = placement;
        let board = self.board.with_move(mv.row, mv.col, player)?;
        let result = check_result(&board, self.win_length);

        let mut history = self.history.clone();
        history.push(placement);

        let (phase, current_player) = if result.is_terminal() {
            (Phase::GameOver, player)
        } else {
            (Phase::Playing, player.opponent())
        };

        Ok(Self {
            board,
            win_length: self.win_length,
            current_player,
            phase,
            result,
            history,
        })
    }
}
