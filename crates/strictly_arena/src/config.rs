//! Match configuration for the arena.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_nrow::ai::Difficulty;
use strictly_nrow::{ConfigError, GameConfig};
use tracing::{debug, info, instrument};

/// Settings for a computer-vs-computer match.
///
/// ```toml
/// board_size = 5
/// win_length = 4
/// rounds = 20
/// x = "hard"
/// o = "adaptive"
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Board geometry.
    #[serde(flatten)]
    game: GameConfig,

    /// Rounds to play.
    #[serde(default = "default_rounds")]
    rounds: usize,

    /// Strategy playing X.
    #[serde(default = "default_x")]
    x: Difficulty,

    /// Strategy playing O.
    #[serde(default = "default_o")]
    o: Difficulty,

    /// Seed for reproducible random strategies.
    #[serde(default)]
    seed: Option<u64>,

    /// Hand the first move to the other side after each round.
    #[serde(default = "default_alternate_first")]
    alternate_first: bool,

    /// Search Hard's root moves on the rayon pool.
    #[serde(default)]
    parallel_search: bool,
}

fn default_rounds() -> usize {
    10
}

fn default_x() -> Difficulty {
    Difficulty::Hard
}

fn default_o() -> Difficulty {
    Difficulty::Medium
}

fn default_alternate_first() -> bool {
    true
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            rounds: default_rounds(),
            x: default_x(),
            o: default_o(),
            seed: None,
            alternate_first: default_alternate_first(),
            parallel_search: false,
        }
    }
}

impl ArenaConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading arena config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(
            board_size = config.game.board_size(),
            rounds = config.rounds,
            "Arena config loaded"
        );
        Ok(config)
    }

    /// Checks the board geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()
    }

    /// Replaces the board geometry.
    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    /// Replaces the round count.
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Replaces the X strategy.
    pub fn with_x(mut self, x: Difficulty) -> Self {
        self.x = x;
        self
    }

    /// Replaces the O strategy.
    pub fn with_o(mut self, o: Difficulty) -> Self {
        self.o = o;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets whether the first move alternates between rounds.
    pub fn with_alternate_first(mut self, alternate_first: bool) -> Self {
        self.alternate_first = alternate_first;
        self
    }

    /// Sets whether Hard searches root moves in parallel.
    pub fn with_parallel_search(mut self, parallel_search: bool) -> Self {
        self.parallel_search = parallel_search;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let config: ArenaConfig = toml::from_str("").unwrap();
        assert_eq!(config, ArenaConfig::default());
        assert_eq!(*config.game().board_size(), 3);
        assert!(*config.alternate_first());
    }

    #[test]
    fn test_parse_full_toml() {
        let config: ArenaConfig = toml::from_str(
            r#"
            board_size = 5
            win_length = 4
            rounds = 3
            x = "easy"
            o = "adaptive"
            seed = 99
            alternate_first = false
            parallel_search = true
            "#,
        )
        .unwrap();
        assert_eq!(config.game(), &GameConfig::new(5, 4));
        assert_eq!(*config.rounds(), 3);
        assert_eq!(*config.x(), Difficulty::Easy);
        assert_eq!(*config.seed(), Some(99));
        assert!(*config.parallel_search());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ArenaConfig::default()
            .with_rounds(1)
            .with_o(Difficulty::Hard)
            .with_seed(5);
        assert_eq!(*config.rounds(), 1);
        assert_eq!(*config.o(), Difficulty::Hard);
        assert_eq!(*config.seed(), Some(5));
    }
}
