//! Search strategy selection and the single move-choice entry point.

use std::fmt;
use std::str::FromStr;

use alpha_beta_engine::AlphaBetaEngine;
use checkers_core::{BoardState, Color, Engine, Heuristic, SearchLimits};
use mcts_engine::MctsEngine;
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The interchangeable ways of choosing a move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Minimax,
    #[default]
    AlphaBeta,
    Mcts,
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{0}' (expected minimax, alpha_beta, mcts or random)")]
pub struct ParseStrategyError(pub String);

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Minimax,
        Strategy::AlphaBeta,
        Strategy::Mcts,
        Strategy::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alpha_beta",
            Strategy::Mcts => "mcts",
            Strategy::Random => "random",
        }
    }

    /// Tree searches are bounded by depth; MCTS by iterations.
    pub fn uses_iterations(self) -> bool {
        matches!(self, Strategy::Mcts)
    }

    /// Limits for this strategy from a single budget number.
    pub fn limits(self, depth_or_iterations: u32, heuristic: Heuristic) -> SearchLimits {
        let limits = if self.uses_iterations() {
            SearchLimits::iterations(depth_or_iterations)
        } else {
            SearchLimits::depth(u8::try_from(depth_or_iterations).unwrap_or(u8::MAX))
        };
        limits.with_heuristic(heuristic)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimax" | "mm" => Ok(Strategy::Minimax),
            "alpha_beta" | "alpha-beta" | "alphabeta" | "ab" => Ok(Strategy::AlphaBeta),
            "mcts" | "monte_carlo" => Ok(Strategy::Mcts),
            "random" | "rand" => Ok(Strategy::Random),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// Build an engine for `strategy`, seeded when `seed` is given.
pub fn create_engine(strategy: Strategy, seed: Option<u64>) -> Box<dyn Engine> {
    match (strategy, seed) {
        (Strategy::Minimax, Some(s)) => Box::new(MinimaxEngine::with_seed(s)),
        (Strategy::Minimax, None) => Box::new(MinimaxEngine::new()),
        (Strategy::AlphaBeta, Some(s)) => Box::new(AlphaBetaEngine::with_seed(s)),
        (Strategy::AlphaBeta, None) => Box::new(AlphaBetaEngine::new()),
        (Strategy::Mcts, Some(s)) => Box::new(MctsEngine::with_seed(s)),
        (Strategy::Mcts, None) => Box::new(MctsEngine::new()),
        (Strategy::Random, Some(s)) => Box::new(RandomEngine::with_seed(s)),
        (Strategy::Random, None) => Box::new(RandomEngine::new()),
    }
}

/// Pick the next board for `color` with a one-off engine.
///
/// `depth_or_iterations` is the search depth for minimax and alpha-beta and
/// the iteration count for MCTS. Returns None when the game is already
/// decided or `color` has no legal move.
pub fn choose_move(
    board: &BoardState,
    color: Color,
    strategy: Strategy,
    depth_or_iterations: u32,
    heuristic: Heuristic,
    seed: Option<u64>,
) -> Option<BoardState> {
    let mut engine = create_engine(strategy, seed);
    let limits = strategy.limits(depth_or_iterations, heuristic);
    engine.search(board, color, &limits).board
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod strategy_tests;
