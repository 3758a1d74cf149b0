//! Minimax Checkers Engine
//!
//! Plain depth-limited minimax over every successor board.
//! This is the reference engine the pruned search is checked against.

mod search;

use checkers_core::{BoardState, Color, Engine, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Checkers engine using exhaustive minimax.
///
/// This engine uses:
/// - Full-width minimax to the requested depth
/// - One of the selectable heuristics at the cutoff
/// - A coin flip between equally scored moves
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
    rng: StdRng,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            nodes: 0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Engine whose tie-breaks are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            nodes: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &BoardState, side: Color, limits: &SearchLimits) -> SearchResult {
        self.nodes = 0;
        let depth = limits.depth.max(1);
        if board.winner().is_some() {
            return SearchResult::no_move(depth);
        }

        let (score, next) = search::minimax(
            board,
            depth,
            true,
            limits.heuristic,
            side,
            side.other(),
            &mut self.rng,
            &mut self.nodes,
        );
        debug!(%side, depth, score, nodes = self.nodes, heuristic = %limits.heuristic, "minimax search done");

        SearchResult {
            board: next,
            score,
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use search::minimax;
