pub mod board;
pub mod error;
pub mod eval;
pub mod limits;
pub mod movegen;
pub mod perft;
pub mod search;
pub mod simulation;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use eval::*;
pub use limits::*;
pub use perft::perft;
pub use search::*;
pub use simulation::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by all checkers engines (minimax, alpha-beta, MCTS, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The board after the chosen move (None if the game is decided or no move exists)
    pub board: Option<BoardState>,
    /// Evaluation score from the searching side's perspective
    pub score: Score,
    /// Search depth used (plies for tree searches, rollout plies for MCTS)
    pub depth: u8,
    /// Number of boards generated (for stats)
    pub nodes: u64,
}

impl SearchResult {
    /// Result for a position where the side to move cannot play.
    pub fn no_move(depth: u8) -> Self {
        Self {
            board: None,
            score: 0,
            depth,
            nodes: 0,
        }
    }
}

/// Trait that all checkers engines must implement.
///
/// This allows a driver to swap between exhaustive minimax, alpha-beta,
/// Monte Carlo tree search and the random baseline without other changes.
pub trait Engine: Send {
    /// Choose a move for `side` on `board` within the given limits.
    ///
    /// # Arguments
    /// * `board` - The current board
    /// * `side` - The color to move
    /// * `limits` - Search limits (depth, iterations, heuristic)
    ///
    /// # Returns
    /// SearchResult containing the resulting board, score and statistics
    fn search(&mut self, board: &BoardState, side: Color, limits: &SearchLimits) -> SearchResult;

    /// Returns the engine's name for reports
    fn name(&self) -> &str;

    /// Reset internal state for a new game (drop any kept search tree)
    fn new_game(&mut self) {}
}
