//! Match configuration, loadable from TOML.
//!
//! ```toml
//! num_games = 20
//! max_moves = 150
//! seed = 7
//!
//! [players.first]
//! strategy = "alpha_beta"
//! depth = 4
//! heuristic = "positional"
//!
//! [players.second]
//! strategy = "mcts"
//! iterations = 300
//! rollout_depth = 12
//! ```

use std::path::Path;

use checkers_core::SearchLimits;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::strategy::Strategy;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One side of a match: a strategy and its search budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub strategy: Strategy,
    #[serde(flatten)]
    pub limits: SearchLimits,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            limits: SearchLimits::default(),
        }
    }
}

impl PlayerConfig {
    pub fn new(strategy: Strategy, limits: SearchLimits) -> Self {
        Self { strategy, limits }
    }

    /// Short description for reports, e.g. `alpha_beta(depth 4, positional)`.
    pub fn label(&self) -> String {
        if self.strategy.uses_iterations() {
            format!(
                "{}({} iterations, rollout {})",
                self.strategy, self.limits.iterations, self.limits.rollout_depth
            )
        } else if self.strategy == Strategy::Random {
            self.strategy.to_string()
        } else {
            format!(
                "{}(depth {}, {})",
                self.strategy, self.limits.depth, self.limits.heuristic
            )
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Players {
    pub first: PlayerConfig,
    pub second: PlayerConfig,
}

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Plies per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during match
    pub verbose: bool,
    /// Base seed for the engines' random sources (None = from entropy)
    pub seed: Option<u64>,
    pub players: Players,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_moves: 200,
            alternate_colors: true,
            verbose: true,
            seed: None,
            players: Players::default(),
        }
    }
}

impl MatchConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
