//! One-ply tactical opponent.

use super::{AiError, Difficulty, Strategy, require_moves, require_win_length};
use crate::rules::{Line, all_lines, check_result_among};
use crate::{Board, GameResult, Move, PlayerId};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Wins if it can, blocks if it must, likes the centre, otherwise guesses.
#[derive(Debug, Clone)]
pub struct MediumAi {
    rng: StdRng,
}

impl MediumAi {
    /// Creates an opponent seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates an opponent with a reproducible random stream.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for MediumAi {
    fn default() -> Self {
        Self::new()
    }
}

/// First move in row-major order that wins on the spot for `player`.
pub(super) fn find_winning_move(
    board: &Board,
    moves: &[Move],
    player: PlayerId,
    lines: &[Line],
) -> Option<Move> {
    moves.iter().copied().find(|mv| {
        board
            .with_move(mv.row, mv.col, player)
            .map(|next| matches!(
                check_result_among(&next, lines),
                GameResult::Win { winner, .. } if winner == player
            ))
            .unwrap_or(false)
    })
}

impl Strategy for MediumAi {
    #[instrument(skip(self, board), fields(player = %player))]
    fn select_move(
        &mut self,
        board: &Board,
        player: PlayerId,
        win_length: usize,
    ) -> Result<Move, AiError> {
        let moves = require_moves(board)?;
        require_win_length(board, win_length)?;
        let lines = all_lines(board.size(), win_length);

        if let Some(mv) = find_winning_move(board, &moves, player, &lines) {
            debug!(%mv, "Taking the win");
            return Ok(mv);
        }

        if let Some(mv) = find_winning_move(board, &moves, player.opponent(), &lines) {
            debug!(%mv, "Blocking");
            return Ok(mv);
        }

        let center = board.size() / 2;
        if board.is_cell_empty(center, center) {
            debug!("Taking the centre");
            return Ok(Move::new(center, center));
        }

        let choice = moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(AiError::NoValidMoves)?;
        debug!(%choice, "Random move");
        Ok(choice)
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Medium
    }
}
