use super::*;
use checkers_core::{Piece, Square, NEG_INF};
use rand::rngs::StdRng;
use rand::SeedableRng;

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
fn test_pick_best_move_start_position() {
    let board = BoardState::startpos();
    let mut rng = StdRng::seed_from_u64(0);
    let mut nodes = 0;
    let (score, next) = pick_best_move(&board, 3, Heuristic::Material, Color::White, &mut rng, &mut nodes);
    assert!(next.is_some());
    assert_eq!(score, 0);
    assert!(nodes > 7);
}

#[test]
fn test_finds_the_double_jump() {
    let board = double_jump_board();
    for depth in 1..=4 {
        let mut rng = StdRng::seed_from_u64(depth as u64);
        let mut nodes = 0;
        let (score, next) = pick_best_move(
            &board,
            depth,
            Heuristic::Material,
            Color::White,
            &mut rng,
            &mut nodes,
        );
        let next = next.unwrap();
        assert_eq!(score, 100);
        assert_eq!(next.winner(), Some(Color::White));
        assert_eq!(next.piece_at(Square { row: 4, col: 5 }), Some(Piece::king(4, 5, Color::White)));
    }
}

#[test]
fn test_cutoff_skips_siblings() {
    // Every White reply is searched only until Black finds its refutation.
    let board = BoardState::startpos();
    let mut rng = StdRng::seed_from_u64(0);
    let mut pruned = 0;
    alpha_beta(
        &board,
        3,
        NEG_INF,
        POS_INF,
        true,
        Heuristic::Material,
        Color::White,
        Color::Black,
        &mut rng,
        &mut pruned,
    );
    let full = 7 + 49 + checkers_core::perft(&board, Color::White, 3);
    assert!(pruned < full, "pruned {pruned}, full {full}");
}

#[test]
fn test_stuck_root_has_no_move() {
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
    let (score, next) = pick_best_move(&board, 2, Heuristic::Material, Color::Black, &mut rng, &mut nodes);
    assert_eq!(score, NEG_INF);
    assert!(next.is_none());
    assert_eq!(nodes, 0);
}
