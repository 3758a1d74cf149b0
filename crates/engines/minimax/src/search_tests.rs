use super::*;
use checkers_core::{Piece, Square, NEG_INF};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn squares(board: &BoardState, color: Color) -> HashSet<Square> {
    board.pieces(color).iter().map(Piece::square).collect()
}

fn double_jump_board() -> BoardState {
    BoardState::from_diagram(
        ".W......
         ..b.....
         ........
         ....b...
         ........
         ........
         ........
         ........",
    )
    .unwrap()
}

#[test]
fn test_depth_one_material_moves_one_man_forward() {
    let board = BoardState::startpos();
    let mut rng = StdRng::seed_from_u64(3);
    let mut nodes = 0;
    let (score, next) = minimax(
        &board,
        1,
        true,
        Heuristic::Material,
        Color::White,
        Color::Black,
        &mut rng,
        &mut nodes,
    );
    let next = next.unwrap();

    assert_eq!(score, 0);
    assert_eq!(nodes, 7);
    assert_eq!(next.pieces_remaining(Color::White), 12);
    assert_eq!(next.pieces_remaining(Color::Black), 12);

    let before = squares(&board, Color::White);
    let after = squares(&next, Color::White);
    let left: Vec<_> = before.difference(&after).collect();
    let arrived: Vec<_> = after.difference(&before).collect();
    assert_eq!(left.len(), 1);
    assert_eq!(arrived.len(), 1);
    assert_eq!(arrived[0].row, left[0].row + 1);
    assert_eq!(squares(&next, Color::Black), squares(&board, Color::Black));
}

#[test]
fn test_king_takes_the_double_jump() {
    let board = double_jump_board();
    for depth in [1, 2, 3, 4] {
        let mut rng = StdRng::seed_from_u64(depth as u64);
        let mut nodes = 0;
        let (score, next) = minimax(
            &board,
            depth,
            true,
            Heuristic::MaterialAndKings,
            Color::White,
            Color::Black,
            &mut rng,
            &mut nodes,
        );
        let next = next.unwrap();
        assert_eq!(next.pieces_remaining(Color::Black), 0, "depth {depth}");
        assert_eq!(next.piece_at(Square { row: 4, col: 5 }), Some(Piece::king(4, 5, Color::White)));
        assert_eq!(score, 199);
    }
}

#[test]
fn test_decided_board_is_a_leaf() {
    let mut board = double_jump_board();
    let black = board.pieces(Color::Black);
    board.remove_pieces(&black);
    let mut rng = StdRng::seed_from_u64(0);
    let mut nodes = 0;
    let (score, next) = minimax(
        &board,
        3,
        true,
        Heuristic::Material,
        Color::White,
        Color::Black,
        &mut rng,
        &mut nodes,
    );
    assert_eq!(score, 100);
    assert_eq!(next, Some(board));
    assert_eq!(nodes, 0);
}

#[test]
fn test_stuck_side_gets_no_board() {
    let board = BoardState::from_diagram(
        ".w......
         b.......
         ........
         ........
         ........
         ........
         ........
         ........",
    )
    .unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let mut nodes = 0;
    let (score, next) = minimax(
        &board,
        2,
        true,
        Heuristic::Material,
        Color::Black,
        Color::White,
        &mut rng,
        &mut nodes,
    );
    assert_eq!(score, NEG_INF);
    assert!(next.is_none());
}

#[test]
fn test_same_seed_same_move() {
    let board = BoardState::startpos();
    let pick = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut nodes = 0;
        minimax(
            &board,
            3,
            true,
            Heuristic::Positional,
            Color::Black,
            Color::White,
            &mut rng,
            &mut nodes,
        )
    };
    assert_eq!(pick(11), pick(11));
}
