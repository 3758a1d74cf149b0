//! MCTS search implementation.
//!
//! Each iteration runs:
//! 1. Selection: descend by UCB1 until a childless node
//! 2. Expansion: a leaf visited before gets its children, and the search
//!    steps into the first-priority one
//! 3. Rollout: random moves from the selected node
//! 4. Backpropagation: the reward is added to every node up to the root

use checkers_core::{random_successor, BoardState, Color};
use rand::Rng;
use tracing::trace;

use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::tree::SearchTree;

/// Final board and outcome of one random playout.
#[derive(Debug, Clone)]
pub struct Rollout {
    pub board: BoardState,
    /// Color to move when the playout stopped
    pub ending: Color,
    /// Set when the playout decided the game
    pub winner: Option<Color>,
    pub plies: u32,
}

impl Rollout {
    /// True when the playout ended in a win for one side.
    pub fn decided(&self) -> bool {
        self.winner.is_some()
    }
}

/// Result of a finished search.
#[derive(Debug, Clone)]
pub struct MctsOutcome {
    /// Board of the chosen root child (None if the root had no children)
    pub board: Option<BoardState>,
    /// Average reward of the chosen child
    pub score: Option<i64>,
    pub iterations: u32,
    /// Nodes in the tree when the search stopped
    pub tree_size: usize,
    /// The chosen child as a fresh root, for the next decision
    pub next_tree: Option<SearchTree>,
}

/// MCTS search state for one decision.
#[derive(Debug)]
pub struct MctsSearch {
    tree: SearchTree,
    config: MctsConfig,
    /// The color whose rewards the tree accumulates
    side: Color,
    iterations: u32,
}

impl MctsSearch {
    /// Create a search from `board` with `side` to move. The root is
    /// expanded immediately.
    pub fn new(board: &BoardState, side: Color, config: MctsConfig) -> Self {
        Self::with_tree(SearchTree::new(board.clone(), side), config)
    }

    /// Continue from an existing tree; its root's mover is the searching side.
    pub fn with_tree(mut tree: SearchTree, config: MctsConfig) -> Self {
        let root = tree.root();
        let side = tree.get(root).to_move;
        tree.expand(root);
        Self {
            tree,
            config,
            side,
            iterations: 0,
        }
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    pub fn side(&self) -> Color {
        self.side
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Run the configured number of iterations and pick a move.
    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> MctsOutcome {
        if self.tree.get(self.tree.root()).is_expanded() {
            for _ in 0..self.config.iterations {
                self.iterate(rng);
            }
        }
        self.finish(rng)
    }

    /// One select, expand, rollout and backpropagate pass.
    pub fn iterate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut current = self.select(rng);

        let leaf = self.tree.get(current);
        if leaf.visits > 0 && !leaf.is_terminal() && self.tree.expand(current) > 0 {
            let visits = self.tree.get(current).visits;
            if let Some(child) =
                self.tree
                    .select_child(current, visits, self.config.exploration, rng)
            {
                current = child;
            }
        }

        let rollout = self.rollout(current, rng);
        let reward = self.reward(&rollout);
        self.tree.backpropagate(current, reward);
        self.iterations += 1;

        trace!(
            iteration = self.iterations,
            node = current.0,
            plies = rollout.plies,
            decided = rollout.decided(),
            reward,
            "mcts iteration complete"
        );
    }

    /// Descend from the root by UCB1 until a childless node.
    fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> NodeId {
        let mut current = self.tree.root();
        loop {
            let visits = self.tree.get(current).visits;
            match self
                .tree
                .select_child(current, visits, self.config.exploration, rng)
            {
                Some(child) => current = child,
                None => return current,
            }
        }
    }

    /// Random playout from `id`, starting with that node's mover.
    ///
    /// Stops on a decided board, or when the mover has no legal move (the
    /// mover loses), or once at least `rollout_depth` plies are played and
    /// the searching side is to move.
    pub fn rollout<R: Rng + ?Sized>(&self, id: NodeId, rng: &mut R) -> Rollout {
        let node = self.tree.get(id);
        let mut board = node.board.clone();
        let mut color = node.to_move;
        let mut plies = 0;

        loop {
            if let Some(winner) = board.winner() {
                return Rollout {
                    board,
                    ending: color,
                    winner: Some(winner),
                    plies,
                };
            }
            if plies >= self.config.rollout_depth && color == self.side {
                return Rollout {
                    board,
                    ending: color,
                    winner: None,
                    plies,
                };
            }
            match random_successor(&board, color, rng) {
                Some(next) => {
                    board = next;
                    color = color.other();
                    plies += 1;
                }
                None => {
                    return Rollout {
                        board,
                        ending: color,
                        winner: Some(color.other()),
                        plies,
                    }
                }
            }
        }
    }

    /// Reward for the searching side: the win reward either way for a
    /// decided playout, otherwise the piece margin for the ending color.
    pub fn reward(&self, rollout: &Rollout) -> i64 {
        match rollout.winner {
            Some(winner) if winner == self.side => self.config.win_reward,
            Some(_) => -self.config.win_reward,
            None => rollout.board.piece_margin(rollout.ending) as i64,
        }
    }

    /// Pick the root child by UCB1 over the iteration count and promote it.
    pub fn finish<R: Rng + ?Sized>(self, rng: &mut R) -> MctsOutcome {
        let root = self.tree.root();
        let picked = self.tree.select_child(
            root,
            u64::from(self.iterations),
            self.config.exploration,
            rng,
        );

        match picked {
            Some(best) => {
                let node = self.tree.get(best);
                MctsOutcome {
                    board: Some(node.board.clone()),
                    score: node.average_score(),
                    iterations: self.iterations,
                    tree_size: self.tree.len(),
                    next_tree: Some(self.tree.promote(best)),
                }
            }
            None => MctsOutcome {
                board: None,
                score: None,
                iterations: self.iterations,
                tree_size: self.tree.len(),
                next_tree: None,
            },
        }
    }
}

/// Run a complete search from `board` for `side`.
pub fn run_mcts<R: Rng + ?Sized>(
    board: &BoardState,
    side: Color,
    config: MctsConfig,
    rng: &mut R,
) -> MctsOutcome {
    MctsSearch::new(board, side, config).run(rng)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
