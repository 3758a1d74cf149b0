//! MCTS configuration parameters.

use checkers_core::{SearchLimits, DEFAULT_ROLLOUT_DEPTH};
use serde::{Deserialize, Serialize};

/// Configuration for Monte Carlo Tree Search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Iterations (select, expand, rollout, backpropagate) per search.
    pub iterations: u32,

    /// Random plies per rollout. A rollout that runs out of plies continues
    /// until the searching side is to move again.
    pub rollout_depth: u32,

    /// Exploration constant in UCB1.
    pub exploration: f64,

    /// Reward for a rollout that ends with a decided game.
    pub win_reward: i64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 200,
            rollout_depth: DEFAULT_ROLLOUT_DEPTH,
            exploration: 2.0,
            win_reward: 100,
        }
    }
}

impl MctsConfig {
    /// Iteration and rollout budget taken from the shared engine limits.
    pub fn from_limits(limits: &SearchLimits) -> Self {
        Self {
            iterations: limits.iterations,
            rollout_depth: limits.rollout_depth,
            ..Self::default()
        }
    }

    /// Create a fast config for testing.
    pub fn for_testing() -> Self {
        Self {
            iterations: 40,
            rollout_depth: 4,
            ..Self::default()
        }
    }

    pub fn with_iterations(mut self, n: u32) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_rollout_depth(mut self, plies: u32) -> Self {
        self.rollout_depth = plies;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert_eq!(config.iterations, 200);
        assert_eq!(config.rollout_depth, 10);
        assert!((config.exploration - 2.0).abs() < 1e-12);
        assert_eq!(config.win_reward, 100);
    }

    #[test]
    fn test_from_limits() {
        let limits = SearchLimits::iterations(75).with_rollout_depth(6);
        let config = MctsConfig::from_limits(&limits);
        assert_eq!(config.iterations, 75);
        assert_eq!(config.rollout_depth, 6);
        assert_eq!(config.win_reward, 100);
    }

    #[test]
    fn test_partial_toml() {
        let config: MctsConfig = toml::from_str("iterations = 12\nexploration = 1.5").unwrap();
        assert_eq!(config.iterations, 12);
        assert!((config.exploration - 1.5).abs() < 1e-12);
        assert_eq!(config.rollout_depth, MctsConfig::default().rollout_depth);
    }
}
