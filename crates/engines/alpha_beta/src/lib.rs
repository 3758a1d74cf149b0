//! Alpha-Beta Checkers Engine
//!
//! Minimax with alpha-beta pruning. Agrees with the plain minimax engine on
//! the value of every position while visiting fewer boards.

mod search;

use checkers_core::{BoardState, Color, Engine, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Checkers engine using minimax with alpha-beta pruning.
#[derive(Debug, Clone)]
pub struct AlphaBetaEngine {
    /// Node counter for statistics
    nodes: u64,
    rng: StdRng,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self {
            nodes: 0,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            nodes: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for AlphaBetaEngine {
    fn search(&mut self, board: &BoardState, side: Color, limits: &SearchLimits) -> SearchResult {
        self.nodes = 0;
        let depth = limits.depth.max(1);
        if board.winner().is_some() {
            return SearchResult::no_move(depth);
        }

        let (score, next) = search::pick_best_move(
            board,
            depth,
            limits.heuristic,
            side,
            &mut self.rng,
            &mut self.nodes,
        );
        debug!(%side, depth, score, nodes = self.nodes, heuristic = %limits.heuristic, "alpha-beta search done");

        SearchResult {
            board: next,
            score,
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "AlphaBeta v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use search::{alpha_beta, pick_best_move};
