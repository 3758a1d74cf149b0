//! Random Move Checkers Engine
//!
//! Picks a random movable piece, then a random destination for it.
//! Useful for:
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation in long self-play matches

use checkers_core::{random_successor, BoardState, Color, Engine, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;


/// A checkers engine that plays random legal moves.
///
/// This engine provides no evaluation. It is the same move picker MCTS
/// rollouts use, exposed as an opponent.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &BoardState, side: Color, _limits: &SearchLimits) -> SearchResult {
        if board.winner().is_some() {
            return SearchResult::no_move(1);
        }

        SearchResult {
            board: random_successor(board, side, &mut self.rng),
            score: 0,
            depth: 1,
            nodes: 1,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
