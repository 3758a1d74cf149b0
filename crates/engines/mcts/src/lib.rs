//! Monte Carlo Tree Search checkers engine.
//!
//! The tree is an arena of [`SearchNode`]s addressed by [`NodeId`]. Leaves are
//! valued by random playouts rather than a heuristic, so the engine needs no
//! evaluation beyond the piece margin at the end of a playout.
//!
//! ```text
//! select (UCB1) -> expand -> rollout -> backpropagate
//!        ^                                    |
//!        +------------ iterations ------------+
//! ```
//!
//! After the last iteration the best root child is chosen and promoted into
//! a fresh tree, which the engine keeps for its next decision.

pub mod config;
pub mod node;
pub mod search;
pub mod tree;

use checkers_core::{BoardState, Color, Engine, Score, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

pub use config::MctsConfig;
pub use node::{NodeId, SearchNode};
pub use search::{run_mcts, MctsOutcome, MctsSearch, Rollout};
pub use tree::SearchTree;

/// Checkers engine using Monte Carlo tree search.
#[derive(Debug)]
pub struct MctsEngine {
    rng: StdRng,
    /// Promoted child of the previous search
    kept: Option<SearchTree>,
}

impl MctsEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            kept: None,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            kept: None,
        }
    }

    /// Root of the tree kept from the last search, if any.
    pub fn kept_root(&self) -> Option<(&BoardState, Color)> {
        self.kept.as_ref().map(SearchTree::root_key)
    }

    /// The kept tree if it starts from this board and mover, else a new one.
    fn tree_for(&mut self, board: &BoardState, side: Color) -> SearchTree {
        match self.kept.take() {
            Some(tree) if tree.root_key() == (board, side) => tree,
            _ => SearchTree::new(board.clone(), side),
        }
    }
}

impl Default for MctsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MctsEngine {
    fn search(&mut self, board: &BoardState, side: Color, limits: &SearchLimits) -> SearchResult {
        let depth = u8::try_from(limits.rollout_depth).unwrap_or(u8::MAX);
        if board.winner().is_some() {
            self.kept = None;
            return SearchResult::no_move(depth);
        }

        let config = MctsConfig::from_limits(limits);
        let tree = self.tree_for(board, side);
        let outcome = MctsSearch::with_tree(tree, config).run(&mut self.rng);
        self.kept = outcome.next_tree;

        let score = outcome
            .score
            .map_or(0, |s| s.clamp(Score::MIN as i64, Score::MAX as i64) as Score);
        debug!(
            %side,
            iterations = outcome.iterations,
            tree_size = outcome.tree_size,
            score,
            "mcts search done"
        );

        SearchResult {
            board: outcome.board,
            score,
            depth,
            nodes: outcome.tree_size as u64,
        }
    }

    fn name(&self) -> &str {
        "MCTS v1.0"
    }

    fn new_game(&mut self) {
        self.kept = None;
    }
}
