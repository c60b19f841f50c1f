//! The authoritative turn-taking state machine.
//!
//! [`GameStateMachine`] owns the board, the player to move and the round
//! phase. It is the only place game progression changes. Rejected moves
//! are reported as [`crate::MoveError`]s and leave the machine untouched; a move
//! that ends the round flips the phase to [`Phase::GameOver`] and notifies
//! every registered observer exactly once.
//!
//! The machine is a single-writer resource: callers serialize `make_move`
//! calls for a given instance.

use super::action::{Move, MoveOutcome, Placement};
use super::config::{ConfigError, GameConfig};
use super::contracts::{Contract, MoveContract};
use super::phases::{GameResult, Phase};
use super::{Board, GameState, PlayerId};
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Callback fired when a round reaches a win or draw.
pub type GameEndedObserver = Box<dyn FnMut(&GameResult) + Send>;

/// Turn-based rules authority for one table.
pub struct GameStateMachine {
    state: GameState,
    observers: Vec<GameEndedObserver>,
}

impl GameStateMachine {
    /// Creates a machine for a `board_size` board needing `win_length` in a row.
    ///
    /// X moves first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] unless `1 <= win_length <= board_size`.
    #[instrument]
    pub fn new(board_size: usize, win_length: usize) -> Result<Self, ConfigError> {
        Self::from_config(&GameConfig::new(board_size, win_length))
    }

    /// Creates a machine from a validated configuration.
    #[instrument(skip(config), fields(board_size = config.board_size(), win_length = config.win_length()))]
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!("Creating game state machine");
        Ok(Self {
            state: GameState::new(*config.board_size(), *config.win_length(), PlayerId::X),
            observers: Vec::new(),
        })
    }

    /// Registers a callback for the end of each round.
    pub fn on_game_ended(&mut self, observer: impl FnMut(&GameResult) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Plays `(row, col)` for the player whose turn it is.
    pub fn make_move(&mut self, row: usize, col: usize) -> MoveOutcome {
        self.make_move_as(row, col, self.state.current_player)
    }

    /// Plays `(row, col)` on behalf of `player`.
    ///
    /// A network authority uses this to apply a remote participant's move.
    ///
    /// # Errors
    ///
    /// - [`crate::MoveError::GameOver`] if the round has ended.
    /// - [`crate::MoveError::WrongPlayer`] if it is not `player`'s turn.
    /// - [`crate::MoveError::OutOfBounds`] if the cell is off the board.
    /// - [`crate::MoveError::CellOccupied`] if the cell holds a mark.
    #[instrument(skip(self), fields(player = %player))]
    pub fn make_move_as(&mut self, row: usize, col: usize, player: PlayerId) -> MoveOutcome {
        let placement = Placement::new(player, Move::new(row, col));

        if let Err(e) = MoveContract::pre(&self.state, &placement) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        let next = self.state.apply(placement)?;

        #[cfg(debug_assertions)]
        MoveContract::post(&self.state, &next)?;

        self.state = next;
        debug!(board = %self.state.board, "Move applied");

        if self.state.phase == Phase::GameOver {
            info!(result = %self.state.result, "Round over");
            let result = &self.state.result;
            for observer in &mut self.observers {
                observer(result);
            }
        }

        Ok(self.state.board.clone())
    }

    /// Clears the board and starts a new round with `starting_player` to move.
    ///
    /// Board size, win length and observers carry over.
    #[instrument(skip(self))]
    pub fn start_next_round(&mut self, starting_player: PlayerId) {
        info!("Starting next round");
        self.state = GameState::new(
            self.state.board.size(),
            self.state.win_length,
            starting_player,
        );
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Player to move, or the final mover once the round is over.
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player
    }

    /// Round phase.
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Marks in a row needed to win.
    pub fn win_length(&self) -> usize {
        self.state.win_length
    }

    /// Result as of the last move.
    pub fn result(&self) -> &GameResult {
        &self.state.result
    }

    /// Moves played this round.
    pub fn history(&self) -> &[Placement] {
        &self.state.history
    }

    /// A serializable copy of the round state.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }
}

impl fmt::Debug for GameStateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameStateMachine")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellState, MoveError};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_new_machine() {
        let game = GameStateMachine::new(3, 3).unwrap();
        assert!(game.board().cells().iter().all(|c| *c == CellState::Empty));
        assert_eq!(game.current_player(), PlayerId::X);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.win_length(), 3);
    }

    #[test]
    fn test_rejects_bad_configuration() {
        assert!(GameStateMachine::new(3, 4).is_err());
        assert!(GameStateMachine::new(3, 0).is_err());
        assert!(GameStateMachine::new(0, 0).is_err());
    }

    #[test]
    fn test_valid_move_updates_board_and_switches_player() {
        let mut game = GameStateMachine::new(3, 3).unwrap();
        let board = game.make_move(0, 0).unwrap();
        assert_eq!(board.cell_at(0, 0), Ok(CellState::X));
        assert_eq!(game.board(), &board);
        assert_eq!(game.current_player(), PlayerId::O);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = GameStateMachine::new(3, 3).unwrap();
        game.make_move(0, 0).unwrap();
        let before = game.snapshot();

        assert_eq!(
            game.make_move_as(1, 1, PlayerId::X),
            Err(MoveError::WrongPlayer(PlayerId::X))
        );
        assert_eq!(
            game.make_move(0, 0),
            Err(MoveError::CellOccupied(Move::new(0, 0)))
        );
        assert!(matches!(
            game.make_move(5, 5),
            Err(MoveError::OutOfBounds { .. })
        ));
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_win_ends_game_and_notifies_once() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut game = GameStateMachine::new(3, 3).unwrap();
        let sink = Arc::clone(&seen);
        game.on_game_ended(move |result| sink.lock().unwrap().push(result.clone()));

        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.make_move(row, col).unwrap();
        }

        assert_eq!(game.phase(), Phase::GameOver);
        assert_eq!(game.result().winner(), Some(PlayerId::X));
        assert_eq!(game.current_player(), PlayerId::X);
        assert_eq!(game.make_move(2, 2), Err(MoveError::GameOver));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].winner(), Some(PlayerId::X));
    }

    #[test]
    fn test_start_next_round() {
        let mut game = GameStateMachine::new(4, 3).unwrap();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.make_move(row, col).unwrap();
        }
        assert_eq!(game.phase(), Phase::GameOver);

        game.start_next_round(PlayerId::O);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.current_player(), PlayerId::O);
        assert_eq!(game.board(), &Board::new(4));
        assert_eq!(game.win_length(), 3);
        assert!(game.history().is_empty());
        assert!(game.make_move_as(2, 2, PlayerId::O).is_ok());
    }
}
