//! MCTS tree node representation.
//!
//! Each node holds a board, the color to move on it, and the statistics
//! accumulated by rollouts passing through it.

use checkers_core::{BoardState, Color};

/// Index into the node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the search tree.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Board reached at this node
    pub board: BoardState,

    /// Color to move on `board`
    pub to_move: Color,

    /// Rollouts backpropagated through this node
    pub visits: u64,

    /// Sum of rollout rewards, from the searching side's point of view
    pub total_score: i64,

    /// Parent node index (None for root)
    pub parent: Option<NodeId>,

    /// Empty until the node is expanded
    pub children: Vec<NodeId>,
}

impl SearchNode {
    pub fn new(board: BoardState, to_move: Color, parent: Option<NodeId>) -> Self {
        Self {
            board,
            to_move,
            visits: 0,
            total_score: 0,
            parent,
            children: Vec::new(),
        }
    }

    /// Floor of `total_score / visits`, or None if never visited.
    #[inline]
    pub fn average_score(&self) -> Option<i64> {
        if self.visits == 0 {
            None
        } else {
            Some(self.total_score.div_euclid(self.visits as i64))
        }
    }

    /// UCB1 = average + c * sqrt(ln(N) / n).
    ///
    /// Returns None for an unvisited node, which callers treat as infinite
    /// priority.
    #[inline]
    pub fn ucb1(&self, parent_visits: u64, exploration: f64) -> Option<f64> {
        let average = self.average_score()?;
        let ln_n = (parent_visits.max(1) as f64).ln();
        Some(average as f64 + exploration * (ln_n / self.visits as f64).sqrt())
    }

    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// True once either side has run out of pieces.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.board.winner().is_some()
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod node_tests;
