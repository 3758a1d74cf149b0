//! Pieces shared by the depth-limited searches.

use rand::Rng;

use crate::{board::BoardState, eval::Score};

/// Bound below every reachable score; a maximizer with no move gets this.
pub const NEG_INF: Score = Score::MIN;
/// Bound above every reachable score; a minimizer with no move gets this.
pub const POS_INF: Score = Score::MAX;

/// Running best child of one search node.
///
/// A child that ties the current best replaces it on a fair coin flip, so
/// equally scored moves are picked at random instead of always the first.
#[derive(Debug, Clone)]
pub struct Best {
    maximizing: bool,
    score: Score,
    board: Option<BoardState>,
}

impl Best {
    pub fn new(maximizing: bool) -> Self {
        Self {
            maximizing,
            score: if maximizing { NEG_INF } else { POS_INF },
            board: None,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Records `board` if `score` beats the current best, or ties it and wins the coin flip.
    pub fn offer<R: Rng + ?Sized>(&mut self, score: Score, board: BoardState, rng: &mut R) {
        let improves = if self.maximizing {
            score > self.score
        } else {
            score < self.score
        };
        let take = match self.board {
            None => true,
            Some(_) if improves => true,
            Some(_) => score == self.score && rng.gen_bool(0.5),
        };
        if take {
            self.score = score;
            self.board = Some(board);
        }
    }

    pub fn into_parts(self) -> (Score, Option<BoardState>) {
        (self.score, self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board_with_margin(margin: u8) -> BoardState {
        let mut b = BoardState::empty();
        for col in 0..margin {
            b.place(crate::Piece::new(0, col, crate::Color::White));
        }
        b
    }

    #[test]
    fn first_offer_is_always_taken() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut best = Best::new(true);
        best.offer(NEG_INF, board_with_margin(1), &mut rng);
        let (score, board) = best.into_parts();
        assert_eq!(score, NEG_INF);
        assert!(board.is_some());
    }

    #[test]
    fn minimizer_keeps_lowest() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut best = Best::new(false);
        best.offer(5, board_with_margin(1), &mut rng);
        best.offer(-3, board_with_margin(2), &mut rng);
        best.offer(7, board_with_margin(3), &mut rng);
        let (score, board) = best.into_parts();
        assert_eq!(score, -3);
        assert_eq!(board, Some(board_with_margin(2)));
    }

    #[test]
    fn ties_pick_both_candidates_across_seeds() {
        let mut saw_first = false;
        let mut saw_second = false;
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut best = Best::new(true);
            best.offer(10, board_with_margin(1), &mut rng);
            best.offer(10, board_with_margin(2), &mut rng);
            match best.into_parts().1 {
                Some(b) if b == board_with_margin(1) => saw_first = true,
                Some(_) => saw_second = true,
                None => unreachable!(),
            }
        }
        assert!(saw_first && saw_second);
    }
}
