//! Rule properties checked on boards reached by seeded random playouts.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use checkers_core::{is_playable, random_successor, simulate, BoardState, Color};

const GAMES: u64 = 48;
const MAX_PLIES: usize = 120;

fn check_board(board: &BoardState) {
    for c in [Color::White, Color::Black] {
        let pieces = board.pieces(c);
        assert_eq!(pieces.len(), board.pieces_remaining(c) as usize);
        assert_eq!(
            pieces.iter().filter(|pc| pc.king).count(),
            board.kings(c) as usize
        );
    }

    for piece in board.all_pieces() {
        assert!(is_playable(piece.row, piece.col), "{piece:?} off the dark squares");
        if !piece.king {
            assert_ne!(piece.row, piece.color.promotion_row(), "uncrowned {piece:?}");
        }

        for (to, captured) in board.legal_moves(&piece) {
            let drow = to.row as i8 - piece.row as i8;
            let dcol = to.col as i8 - piece.col as i8;

            assert!(board.piece_at(to).is_none(), "{piece:?} lands on occupied {to}");
            assert_ne!(drow, 0, "{piece:?} stays on its row");
            assert!(is_playable(to.row, to.col));
            if !piece.king {
                assert!(drow.signum() == piece.color.forward(), "{piece:?} moved backwards to {to}");
            }
            if captured.is_empty() {
                assert_eq!((drow.abs(), dcol.abs()), (1, 1), "{piece:?} plain step to {to}");
            } else {
                assert!(captured.iter().all(|pc| pc.color == piece.color.other()));
            }

            let next = simulate(board, &piece, to, &captured);
            let opp = piece.color.other();
            assert_eq!(
                next.pieces_remaining(opp) as usize,
                board.pieces_remaining(opp) as usize - captured.len()
            );
            assert_eq!(next.pieces_remaining(piece.color), board.pieces_remaining(piece.color));
        }
    }
}

#[test]
fn random_playouts_respect_the_rules() {
    (0..GAMES).into_par_iter().for_each(|seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = BoardState::startpos();
        let mut to_move = Color::Black;

        for _ in 0..MAX_PLIES {
            check_board(&board);
            if board.winner().is_some() {
                break;
            }
            let Some(next) = random_successor(&board, to_move, &mut rng) else {
                break;
            };
            board = next;
            to_move = to_move.other();
        }
    });
}

#[test]
fn piece_counts_never_increase() {
    (0..GAMES).into_par_iter().for_each(|seed| {
        let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);
        let mut board = BoardState::startpos();
        let mut to_move = Color::White;

        for _ in 0..MAX_PLIES {
            let Some(next) = random_successor(&board, to_move, &mut rng) else {
                break;
            };
            for c in [Color::White, Color::Black] {
                assert!(next.pieces_remaining(c) <= board.pieces_remaining(c));
            }
            board = next;
            to_move = to_move.other();
        }
    });
}
