use crate::{
    board::BoardState,
    simulation::successors_into,
    types::Color,
};

/// Pure perft node count.
/// Counts all boards reachable from `board` in exactly `depth` plies,
/// with `to_move` playing first and the colors alternating.
pub fn perft(board: &BoardState, to_move: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &BoardState, to_move: Color, depth: u8, layers: &mut [Vec<BoardState>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        successors_into(board, to_move, buf);

        let mut nodes = 0u64;
        for next in buf.iter() {
            nodes += inner(next, to_move.other(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(16); depth as usize];
    inner(board, to_move, depth, &mut layers[..])
}
