//! Depth-limited minimax with a randomized tie-break

use checkers_core::{successors, BoardState, Best, Color, Heuristic, Score};
use rand::Rng;

/// Searches `board` and returns the best score with the successor reaching it.
///
/// # Arguments
/// * `board` - The board to search
/// * `depth` - Remaining plies
/// * `maximizing` - True when `max_color` is to move
/// * `heuristic` - Evaluation applied at the cutoff, always for `max_color`
/// * `max_color` / `min_color` - The two sides
/// * `rng` - Source for the tie-break coin flips
/// * `nodes` - Counter for boards searched (for statistics)
///
/// # Returns
/// At the cutoff or on a decided board, the heuristic value and `board`
/// itself. Otherwise the extremum over every successor and the successor
/// achieving it. A side with no legal move gets `NEG_INF`/`POS_INF` and no
/// board.
#[allow(clippy::too_many_arguments)]
pub fn minimax<R: Rng + ?Sized>(
    board: &BoardState,
    depth: u8,
    maximizing: bool,
    heuristic: Heuristic,
    max_color: Color,
    min_color: Color,
    rng: &mut R,
    nodes: &mut u64,
) -> (Score, Option<BoardState>) {
    if depth == 0 || board.winner().is_some() {
        return (heuristic.evaluate(board, max_color), Some(board.clone()));
    }

    let to_move = if maximizing { max_color } else { min_color };
    let mut best = Best::new(maximizing);

    for child in successors(board, to_move) {
        *nodes += 1;
        let (score, _) = minimax(
            &child,
            depth - 1,
            !maximizing,
            heuristic,
            max_color,
            min_color,
            rng,
            nodes,
        );
        best.offer(score, child, rng);
    }

    best.into_parts()
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
