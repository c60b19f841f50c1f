//! Uniform random opponent.

use super::{AiError, Difficulty, Strategy, require_moves};
use crate::{Board, Move, PlayerId};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks any empty cell with equal probability.
#[derive(Debug, Clone)]
pub struct EasyAi {
    rng: StdRng,
}

impl EasyAi {
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

impl Default for EasyAi {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for EasyAi {
    #[instrument(skip(self, board), fields(player = %player))]
    fn select_move(
        &mut self,
        board: &Board,
        player: PlayerId,
        _win_length: usize,
    ) -> Result<Move, AiError> {
        let moves = require_moves(board)?;
        let choice = moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(AiError::NoValidMoves)?;
        debug!(%choice, "Random move");
        Ok(choice)
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Easy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_returns_legal_move() {
        let board = Board::new(3)
            .with_move(0, 0, PlayerId::X)
            .and_then(|b| b.with_move(1, 1, PlayerId::O))
            .unwrap();
        let mut ai = EasyAi::with_seed(3);
        for _ in 0..20 {
            let mv = ai.select_move(&board, PlayerId::X, 3).unwrap();
            assert!(board.is_cell_empty(mv.row, mv.col));
        }
    }

    #[test]
    fn test_distribution_is_not_degenerate() {
        let board = Board::new(3);
        let mut ai = EasyAi::new();
        let seen: HashSet<Move> = (0..100)
            .map(|_| ai.select_move(&board, PlayerId::X, 3).unwrap())
            .collect();
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_single_empty_cell() {
        let mut board = Board::new(2);
        for (i, player) in [PlayerId::X, PlayerId::O, PlayerId::X].into_iter().enumerate() {
            board = board.with_move(i / 2, i % 2, player).unwrap();
        }
        let mut ai = EasyAi::with_seed(0);
        assert_eq!(ai.select_move(&board, PlayerId::O, 2), Ok(Move::new(1, 1)));
    }
}
