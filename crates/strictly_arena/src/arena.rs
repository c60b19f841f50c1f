//! Computer-vs-computer match driver.
//!
//! The arena sits outside the rules engine: it asks each strategy for a
//! move, feeds it through [`GameStateMachine::make_move`], and learns about
//! finished rounds only through the game-ended observer.

use crate::{ArenaConfig, ArenaError};
use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use serde::Serialize;
use std::sync::mpsc::{self, Receiver};
use strictly_nrow::ai::{self, Difficulty, HardAi, Strategy};
use strictly_nrow::{Board, GameResult, GameStateMachine, Phase, PlayerId};
use tracing::{debug, info, instrument, warn};

/// Tally of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Getters, Serialize, new)]
#[display("{} rounds: X won {}, O won {}, {} drawn", rounds, x_wins, o_wins, draws)]
pub struct ArenaReport {
    /// Rounds won by X.
    x_wins: usize,
    /// Rounds won by O.
    o_wins: usize,
    /// Drawn rounds.
    draws: usize,
    /// Rounds played.
    rounds: usize,
}

impl ArenaReport {
    fn record(&mut self, result: &GameResult) {
        self.rounds += 1;
        match result.winner() {
            Some(PlayerId::X) => self.x_wins += 1,
            Some(PlayerId::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }
}

/// Builds the strategy for one seat.
fn seat(difficulty: Difficulty, seed: Option<u64>, parallel: bool) -> Box<dyn Strategy> {
    match (difficulty, seed) {
        (Difficulty::Hard, _) if parallel => Box::new(HardAi::parallel()),
        (difficulty, Some(seed)) => ai::create_seeded(difficulty, seed),
        (difficulty, None) => ai::create(difficulty),
    }
}

/// Plays rounds between two strategies on one table.
pub struct Arena {
    config: ArenaConfig,
    game: GameStateMachine,
    x: Box<dyn Strategy>,
    o: Box<dyn Strategy>,
    results: Receiver<GameResult>,
    final_boards: Vec<Board>,
}

impl Arena {
    /// Sets up the table and both seats.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError`] if the board geometry is invalid.
    #[instrument(skip(config), fields(x = %config.x(), o = %config.o()))]
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        let mut game = GameStateMachine::from_config(config.game())?;

        let (tx, results) = mpsc::channel();
        game.on_game_ended(move |result| {
            if tx.send(result.clone()).is_err() {
                warn!("Arena dropped before round result was delivered");
            }
        });

        let seed = *config.seed();
        let parallel = *config.parallel_search();
        let x = seat(*config.x(), seed, parallel);
        let o = seat(*config.o(), seed.map(|s| s.wrapping_add(1)), parallel);

        info!("Arena ready");
        Ok(Self {
            config,
            game,
            x,
            o,
            results,
            final_boards: Vec::new(),
        })
    }

    /// Plays every configured round and returns the tally.
    ///
    /// With `alternate_first`, each round after the first is opened by the
    /// opponent of the previous round's final mover. Decisive rounds are
    /// reported to both strategies; draws are not.
    #[instrument(skip(self), fields(rounds = self.config.rounds()))]
    pub fn run(&mut self) -> Result<ArenaReport, ArenaError> {
        let mut report = ArenaReport::default();

        for round in 0..*self.config.rounds() {
            if round > 0 {
                let starter = if *self.config.alternate_first() {
                    self.game.current_player().opponent()
                } else {
                    PlayerId::X
                };
                self.game.start_next_round(starter);
            }

            let result = self.play_round()?;
            info!(round, %result, "Round finished");

            if let Some(winner) = result.winner() {
                self.x.record_game_result(winner == PlayerId::O);
                self.o.record_game_result(winner == PlayerId::X);
            }
            report.record(&result);
        }

        info!(%report, "Match finished");
        Ok(report)
    }

    /// Plays the current round to completion.
    fn play_round(&mut self) -> Result<GameResult, ArenaError> {
        let win_length = self.game.win_length();

        while self.game.phase() == Phase::Playing {
            let player = self.game.current_player();
            let strategy = match player {
                PlayerId::X => &mut self.x,
                PlayerId::O => &mut self.o,
            };
            let mv = strategy.select_move(self.game.board(), player, win_length)?;
            debug!(%player, %mv, "Strategy moved");
            self.game.make_move(mv.row, mv.col)?;
        }

        self.final_boards.push(self.game.board().clone());
        self.results
            .try_recv()
            .map_err(|_| ArenaError::new("Round ended without a result notification"))
    }

    /// Final board of every round played so far.
    pub fn final_boards(&self) -> &[Board] {
        &self.final_boards
    }

    /// The match configuration.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_tally() {
        let mut report = ArenaReport::default();
        report.record(&GameResult::Draw);
        report.record(&GameResult::Win {
            winner: PlayerId::O,
            line: Vec::new(),
        });
        assert_eq!(report, ArenaReport::new(0, 1, 1, 2));
        assert_eq!(report.to_string(), "2 rounds: X won 0, O won 1, 1 drawn");
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let config = ArenaConfig::default().with_game(strictly_nrow::GameConfig::new(3, 5));
        assert!(Arena::new(config).is_err());
    }
}
