//! Successor-state generation shared by every search strategy.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{board::BoardState, types::*};

/// Plays one move on a fresh copy of `board` and returns the copy.
///
/// `piece` is looked up again inside the copy by its coordinates, so the
/// original board is never touched.
pub fn simulate(board: &BoardState, piece: &Piece, to: Square, captured: &[Piece]) -> BoardState {
    let mut next = board.clone();
    let own = next
        .piece_at(piece.square())
        .expect("simulated piece missing from its square");
    next.apply_move(&own, to);
    if !captured.is_empty() {
        next.remove_pieces(captured);
    }
    next
}

/// Every board reachable by one move of `color`.
pub fn successors(board: &BoardState, color: Color) -> Vec<BoardState> {
    let mut out = Vec::with_capacity(16);
    successors_into(board, color, &mut out);
    out
}

/// Generate successors into the provided buffer, reusing it across calls.
pub fn successors_into(board: &BoardState, color: Color, out: &mut Vec<BoardState>) {
    out.clear();
    for piece in board.pieces(color) {
        for (to, captured) in board.legal_moves(&piece) {
            out.push(simulate(board, &piece, to, &captured));
        }
    }
}

/// One random move for `color`: a random movable piece, then a random destination.
///
/// Returns `None` when `color` has no legal move.
pub fn random_successor<R: Rng + ?Sized>(
    board: &BoardState,
    color: Color,
    rng: &mut R,
) -> Option<BoardState> {
    let pieces = board.movable_pieces(color);
    let piece = pieces.choose(rng)?;
    let moves: Vec<_> = board.legal_moves(piece).into_iter().collect();
    let (to, captured) = moves.choose(rng)?;
    Some(simulate(board, piece, *to, captured))
}

#[cfg(test)]
#[path = "simulation_tests.rs"]
mod simulation_tests;
