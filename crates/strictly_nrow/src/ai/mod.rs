//! Computer opponents.
//!
//! Every opponent implements [`Strategy`]: given a board, the player to
//! move and the win length, pick a cell. Opponents only read the board
//! and call into [`crate::rules`]; they never touch a
//! [`crate::GameStateMachine`]. The caller feeds the chosen move back
//! through `make_move` like any other move.
//!
//! | Difficulty | Behaviour |
//! |------------|-----------|
//! | Easy       | uniform random legal move |
//! | Medium     | win, else block, else centre, else random |
//! | Hard       | minimax with alpha-beta pruning |
//! | Adaptive   | switches between the three tiers on win/loss streaks |

mod adaptive;
mod easy;
mod hard;
mod heuristic;
mod medium;

pub use adaptive::{AdaptiveAi, STREAK_TO_ADJUST};
pub use easy::EasyAi;
pub use hard::{HardAi, search_depth};
pub use heuristic::evaluate;
pub use medium::MediumAi;

use crate::rules::valid_moves;
use crate::{Board, Move, PlayerId};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{info, instrument, warn};

/// Opponent strength.
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
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Random legal moves.
    Easy,
    /// One-ply tactics.
    Medium,
    /// Full-width search.
    Hard,
    /// Tracks the human's results and moves between the other three.
    Adaptive,
}

/// Errors raised by opponents.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AiError {
    /// Asked to move on a full board.
    #[display("No valid moves available")]
    NoValidMoves,

    /// Unsupported difficulty or board/win-length combination.
    #[display("Invalid AI configuration: {}", _0)]
    InvalidConfiguration(String),
}

impl std::error::Error for AiError {}

/// A move-selection policy.
///
/// Strategies hold their own random state, hence `&mut self`. They are
/// `Send` so a caller can run a search on a worker thread.
pub trait Strategy: Send {
    /// Picks a move for `player` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::NoValidMoves`] if the board is full.
    fn select_move(
        &mut self,
        board: &Board,
        player: PlayerId,
        win_length: usize,
    ) -> Result<Move, AiError>;

    /// The difficulty this strategy was created for.
    fn difficulty(&self) -> Difficulty;

    /// Reports a finished decisive game; `player_won` is true when the
    /// strategy's opponent won. Only adaptive opponents react.
    fn record_game_result(&mut self, _player_won: bool) {}
}

/// Creates an opponent seeded from system entropy.
#[instrument]
pub fn create(difficulty: Difficulty) -> Box<dyn Strategy> {
    info!("Creating opponent");
    match difficulty {
        Difficulty::Easy => Box::new(EasyAi::new()),
        Difficulty::Medium => Box::new(MediumAi::new()),
        Difficulty::Hard => Box::new(HardAi::new()),
        Difficulty::Adaptive => Box::new(AdaptiveAi::new()),
    }
}

/// Creates an opponent with a reproducible random stream.
#[instrument]
pub fn create_seeded(difficulty: Difficulty, seed: u64) -> Box<dyn Strategy> {
    info!("Creating seeded opponent");
    match difficulty {
        Difficulty::Easy => Box::new(EasyAi::with_seed(seed)),
        Difficulty::Medium => Box::new(MediumAi::with_seed(seed)),
        Difficulty::Hard => Box::new(HardAi::new()),
        Difficulty::Adaptive => Box::new(AdaptiveAi::with_seed(seed)),
    }
}

/// Creates an opponent from a difficulty name such as `"hard"`.
///
/// # Errors
///
/// Returns [`AiError::InvalidConfiguration`] for unknown names.
#[instrument]
pub fn create_named(name: &str) -> Result<Box<dyn Strategy>, AiError> {
    let difficulty = Difficulty::from_str(name.trim()).map_err(|_| {
        warn!(name, "Unknown difficulty");
        AiError::InvalidConfiguration(format!("Unknown difficulty '{}'", name))
    })?;
    Ok(create(difficulty))
}

/// Legal moves, or [`AiError::NoValidMoves`] if there are none.
fn require_moves(board: &Board) -> Result<Vec<Move>, AiError> {
    let moves: Vec<Move> = valid_moves(board).collect();
    if moves.is_empty() {
        return Err(AiError::NoValidMoves);
    }
    Ok(moves)
}

/// Rejects win lengths no line on `board` can have.
fn require_win_length(board: &Board, win_length: usize) -> Result<(), AiError> {
    if win_length == 0 || win_length > board.size() {
        return Err(AiError::InvalidConfiguration(format!(
            "Win length {} does not fit a {}x{} board",
            win_length,
            board.size(),
            board.size()
        )));
    }
    Ok(())
}
