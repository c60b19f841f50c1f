//! Opponent that tracks the human's form and changes tier to match.

use super::{AiError, Difficulty, EasyAi, HardAi, MediumAi, Strategy};
use crate::{Board, Move, PlayerId};
use tracing::{info, instrument};

/// Consecutive decisive results of one kind that trigger a tier change.
pub const STREAK_TO_ADJUST: u32 = 3;

/// Delegates to Easy, Medium or Hard, starting at Medium.
///
/// Three straight human wins promote one tier (capped at Hard); three
/// straight AI wins demote one tier (floored at Easy). Any result breaks
/// the opposite streak, and both streaks restart after a tier change.
#[derive(Debug, Clone)]
pub struct AdaptiveAi {
    easy: EasyAi,
    medium: MediumAi,
    hard: HardAi,
    current: Difficulty,
    player_streak: u32,
    ai_streak: u32,
}

impl AdaptiveAi {
    /// Creates an opponent seeded from system entropy.
    pub fn new() -> Self {
        Self::with_tiers(EasyAi::new(), MediumAi::new())
    }

    /// Creates an opponent with reproducible random tiers.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_tiers(EasyAi::with_seed(seed), MediumAi::with_seed(seed))
    }

    fn with_tiers(easy: EasyAi, medium: MediumAi) -> Self {
        Self {
            easy,
            medium,
            hard: HardAi::new(),
            current: Difficulty::Medium,
            player_streak: 0,
            ai_streak: 0,
        }
    }

    /// The tier currently making moves.
    pub fn current_difficulty(&self) -> Difficulty {
        self.current
    }

    fn promote(&mut self) {
        self.current = match self.current {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Hard => Difficulty::Hard,
            Difficulty::Adaptive => Difficulty::Medium,
        };
    }

    fn demote(&mut self) {
        self.current = match self.current {
            Difficulty::Hard => Difficulty::Medium,
            Difficulty::Medium | Difficulty::Easy => Difficulty::Easy,
            Difficulty::Adaptive => Difficulty::Medium,
        };
    }
}

impl Default for AdaptiveAi {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for AdaptiveAi {
    fn select_move(
        &mut self,
        board: &Board,
        player: PlayerId,
        win_length: usize,
    ) -> Result<Move, AiError> {
        match self.current {
            Difficulty::Easy => self.easy.select_move(board, player, win_length),
            Difficulty::Hard => self.hard.select_move(board, player, win_length),
            Difficulty::Medium | Difficulty::Adaptive => {
                self.medium.select_move(board, player, win_length)
            }
        }
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Adaptive
    }

    #[instrument(skip(self), fields(current = %self.current))]
    fn record_game_result(&mut self, player_won: bool) {
        let before = self.current;

        if player_won {
            self.player_streak += 1;
            self.ai_streak = 0;
            if self.player_streak >= STREAK_TO_ADJUST {
                self.promote();
                self.player_streak = 0;
            }
        } else {
            self.ai_streak += 1;
            self.player_streak = 0;
            if self.ai_streak >= STREAK_TO_ADJUST {
                self.demote();
                self.ai_streak = 0;
            }
        }

        if self.current != before {
            info!(from = %before, to = %self.current, "Difficulty changed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ai: &mut AdaptiveAi, player_won: bool, times: usize) {
        for _ in 0..times {
            ai.record_game_result(player_won);
        }
    }

    #[test]
    fn test_starts_at_medium() {
        let ai = AdaptiveAi::new();
        assert_eq!(ai.current_difficulty(), Difficulty::Medium);
        assert_eq!(ai.difficulty(), Difficulty::Adaptive);
    }

    #[test]
    fn test_player_streak_promotes_and_caps() {
        let mut ai = AdaptiveAi::with_seed(1);
        record(&mut ai, true, 2);
        assert_eq!(ai.current_difficulty(), Difficulty::Medium);
        record(&mut ai, true, 1);
        assert_eq!(ai.current_difficulty(), Difficulty::Hard);
        record(&mut ai, true, 3);
        assert_eq!(ai.current_difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_ai_streak_demotes_and_floors() {
        let mut ai = AdaptiveAi::with_seed(1);
        record(&mut ai, true, 3);
        assert_eq!(ai.current_difficulty(), Difficulty::Hard);
        record(&mut ai, false, 3);
        assert_eq!(ai.current_difficulty(), Difficulty::Medium);
        record(&mut ai, false, 3);
        assert_eq!(ai.current_difficulty(), Difficulty::Easy);
        record(&mut ai, false, 3);
        assert_eq!(ai.current_difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_mixed_results_break_streaks() {
        let mut ai = AdaptiveAi::with_seed(1);
        for _ in 0..5 {
            record(&mut ai, true, 2);
            record(&mut ai, false, 2);
        }
        assert_eq!(ai.current_difficulty(), Difficulty::Medium);
    }

    #[test]
    fn test_streak_restarts_after_change() {
        let mut ai = AdaptiveAi::with_seed(1);
        record(&mut ai, false, 3);
        assert_eq!(ai.current_difficulty(), Difficulty::Easy);
        record(&mut ai, true, 2);
        assert_eq!(ai.current_difficulty(), Difficulty::Easy);
        record(&mut ai, true, 1);
        assert_eq!(ai.current_difficulty(), Difficulty::Medium);
    }

    #[test]
    fn test_hard_tier_takes_the_win() {
        let mut ai = AdaptiveAi::with_seed(1);
        record(&mut ai, true, 3);
        let board = [(1, 0, PlayerId::O), (1, 1, PlayerId::O), (0, 0, PlayerId::X), (2, 2, PlayerId::X)]
            .into_iter()
            .try_fold(Board::new(3), |b, (r, c, p)| b.with_move(r, c, p))
            .unwrap();
        assert_eq!(ai.select_move(&board, PlayerId::O, 3), Ok(Move::new(1, 2)));
    }
}
