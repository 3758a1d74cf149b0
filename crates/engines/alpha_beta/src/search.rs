//! Minimax with alpha-beta pruning

use checkers_core::{successors, BoardState, Best, Color, Heuristic, Score, POS_INF};
use rand::Rng;

/// Searches the root and returns the best score with the successor reaching it.
///
/// Each root child is searched with alpha one below the best score so far.
/// A child that ties the best is then an exact value rather than a cutoff
/// bound, which keeps the tie-break among moves that are really equal.
pub fn pick_best_move<R: Rng + ?Sized>(
    board: &BoardState,
    depth: u8,
    heuristic: Heuristic,
    side: Color,
    rng: &mut R,
    nodes: &mut u64,
) -> (Score, Option<BoardState>) {
    if depth == 0 || board.winner().is_some() {
        return (heuristic.evaluate(board, side), Some(board.clone()));
    }

    let mut best = Best::new(true);
    for child in successors(board, side) {
        *nodes += 1;
        let (score, _) = alpha_beta(
            &child,
            depth - 1,
            best.score().saturating_sub(1),
            POS_INF,
            false,
            heuristic,
            side,
            side.other(),
            rng,
            nodes,
        );
        best.offer(score, child, rng);
    }

    best.into_parts()
}

/// Recursive minimax with alpha-beta bounds.
///
/// Same contract as plain minimax: heuristic for `max_color` at the cutoff or
/// on a decided board, `NEG_INF`/`POS_INF` and no board for a side that
/// cannot move. The loop stops once `beta <= alpha`.
#[allow(clippy::too_many_arguments)]
pub fn alpha_beta<R: Rng + ?Sized>(
    board: &BoardState,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
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
        let (score, _) = alpha_beta(
            &child,
            depth - 1,
            alpha,
            beta,
            !maximizing,
            heuristic,
            max_color,
            min_color,
            rng,
            nodes,
        );
        best.offer(score, child, rng);

        if maximizing {
            alpha = alpha.max(best.score());
        } else {
            beta = beta.min(best.score());
        }
        if beta <= alpha {
            break; // Cutoff
        }
    }

    best.into_parts()
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
