//! Strictly N-in-a-row - rules engine and computer opponents
//!
//! A generalised tic-tac-toe: any square board, any win length up to the
//! board size.
//!
//! # Architecture
//!
//! - **Board**: immutable value; every move produces a new board
//! - **Rules**: stateless win/draw detection over precomputed lines
//! - **Machine**: the single authority for turn order and round phase
//! - **AI**: Easy, Medium and Hard strategies plus an Adaptive wrapper
//! - **Codec**: one-byte-per-cell board encoding for state sync
//!
//! # Example
//!
//! ```
//! use strictly_nrow::{GameStateMachine, Phase, PlayerId};
//! use strictly_nrow::ai::{self, Difficulty};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = GameStateMachine::new(3, 3)?;
//! let mut opponent = ai::create_seeded(Difficulty::Hard, 7);
//!
//! game.make_move(1, 1)?;
//! let reply = opponent.select_move(game.board(), PlayerId::O, game.win_length())?;
//! game.make_move(reply.row, reply.col)?;
//! assert_eq!(game.phase(), Phase::Playing);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod config;
mod machine;
mod phases;
mod state;
mod types;

// Public modules
pub mod ai;
pub mod codec;
pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Board primitives
pub use types::{Board, CellState, PlayerId};

// Crate-level exports - Moves and errors
pub use action::{Move, MoveError, MoveOutcome, Placement};

// Crate-level exports - Round state
pub use phases::{GameResult, Phase};
pub use state::GameState;

// Crate-level exports - State machine
pub use machine::{GameEndedObserver, GameStateMachine};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, MAX_BOARD_SIZE};
