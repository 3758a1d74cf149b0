//! Search tree with arena allocation.
//!
//! Nodes live in a contiguous Vec and refer to each other by [`NodeId`].
//! Children own nothing; a parent link is a plain index, so walking back to
//! the root during backpropagation is a loop over indices.

use checkers_core::{successors, BoardState, Color};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::node::{NodeId, SearchNode};

/// MCTS tree with arena-based node storage.
#[derive(Debug, Clone)]
pub struct SearchTree {
    /// Arena storing all nodes
    nodes: Vec<SearchNode>,

    /// Root node index (always 0)
    root: NodeId,
}

impl SearchTree {
    /// Create a single-node tree. The root is not expanded.
    pub fn new(board: BoardState, to_move: Color) -> Self {
        Self {
            nodes: vec![SearchNode::new(board, to_move, None)],
            root: NodeId(0),
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.index()]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Board and color to move at the root.
    pub fn root_key(&self) -> (&BoardState, Color) {
        let root = self.get(self.root);
        (&root.board, root.to_move)
    }

    fn allocate(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Attach `board` under `parent`. The child's mover is the other color.
    pub fn add_child(&mut self, parent: NodeId, board: BoardState) -> NodeId {
        let to_move = self.get(parent).to_move.other();
        let child = self.allocate(SearchNode::new(board, to_move, Some(parent)));
        self.get_mut(parent).children.push(child);
        child
    }

    /// Attach one child per successor board. Returns the number of children.
    ///
    /// Already expanded and decided nodes are left as they are. A node whose
    /// mover has no legal move stays childless.
    pub fn expand(&mut self, id: NodeId) -> usize {
        let node = self.get(id);
        if node.is_expanded() || node.is_terminal() {
            return node.children.len();
        }

        for board in successors(&node.board, node.to_move) {
            self.add_child(id, board);
        }
        self.get(id).children.len()
    }

    /// Add one visit and `reward` to `leaf` and every ancestor.
    pub fn backpropagate(&mut self, leaf: NodeId, reward: i64) {
        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.visits += 1;
            node.total_score += reward;
            current = node.parent;
        }
    }

    /// Pick a child of `id` by UCB1 with `parent_visits` as N.
    ///
    /// The first unvisited child wins outright. When every child scores at
    /// or below zero the pick is uniform at random. Returns None for a
    /// childless node.
    pub fn select_child<R: Rng + ?Sized>(
        &self,
        id: NodeId,
        parent_visits: u64,
        exploration: f64,
        rng: &mut R,
    ) -> Option<NodeId> {
        let children = &self.get(id).children;
        if children.is_empty() {
            return None;
        }

        let mut best: Option<(NodeId, f64)> = None;
        for &child in children {
            let Some(ucb) = self.get(child).ucb1(parent_visits, exploration) else {
                return Some(child);
            };
            if best.map_or(true, |(_, b)| ucb > b) {
                best = Some((child, ucb));
            }
        }

        match best {
            Some((_, ucb)) if ucb <= 0.0 => children.choose(rng).copied(),
            other => other.map(|(child, _)| child),
        }
    }

    /// A fresh tree rooted at `id`'s board, with no statistics or children.
    pub fn promote(&self, id: NodeId) -> SearchTree {
        let node = self.get(id);
        SearchTree::new(node.board.clone(), node.to_move)
    }

    /// Longest root-to-leaf path, in edges.
    pub fn max_depth(&self) -> u32 {
        self.depth_below(self.root)
    }

    fn depth_below(&self, id: NodeId) -> u32 {
        self.get(id)
            .children
            .iter()
            .map(|&child| 1 + self.depth_below(child))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
