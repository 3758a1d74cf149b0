//! Search limits shared by every engine.
//!
//! Depth and iteration counts are the only termination controls; there is no
//! clock. Each engine reads the fields that apply to it and ignores the rest.

use serde::{Deserialize, Serialize};

use crate::eval::Heuristic;

/// Default rollout length, in plies, for Monte Carlo playouts.
pub const DEFAULT_ROLLOUT_DEPTH: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Maximum search depth in plies (minimax, alpha-beta)
    pub depth: u8,
    /// Number of tree iterations (MCTS)
    pub iterations: u32,
    /// Plies per random playout (MCTS)
    pub rollout_depth: u32,
    /// Evaluation used at the depth cutoff
    pub heuristic: Heuristic,
}

impl SearchLimits {
    /// Create limits for a depth-bounded search.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// Create limits for an iteration-bounded tree search.
    pub fn iterations(iterations: u32) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_rollout_depth(mut self, rollout_depth: u32) -> Self {
        self.rollout_depth = rollout_depth;
        self
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            depth: 4,
            iterations: 200,
            rollout_depth: DEFAULT_ROLLOUT_DEPTH,
            heuristic: Heuristic::default(),
        }
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod limits_tests;
