use crate::{board::BoardState, types::*};

/// Rows a single scan covers: the adjacent diagonal cell and the landing cell behind it.
const SCAN_ROWS: i8 = 2;

impl BoardState {
    /// Every legal destination for `piece`, with the pieces captured on the way.
    ///
    /// Men scan forward only, kings scan both ways. A jump over an adjacent
    /// enemy into an empty cell is followed by further jumps from the landing
    /// cell in the same row direction. Each landing cell of a chain is a
    /// destination carrying every capture made so far. Plain steps are only
    /// offered when no capture has been made.
    pub fn legal_moves(&self, piece: &Piece) -> MoveMap {
        let mut moves = MoveMap::new();
        let row = piece.row as i8;
        let col = piece.col as i8;

        if piece.color == Color::Black || piece.king {
            let stop = scan_stop(row, -1);
            self.scan(row - 1, stop, -1, piece.color, col - 1, -1, &[], &mut moves);
            self.scan(row - 1, stop, -1, piece.color, col + 1, 1, &[], &mut moves);
        }
        if piece.color == Color::White || piece.king {
            let stop = scan_stop(row, 1);
            self.scan(row + 1, stop, 1, piece.color, col - 1, -1, &[], &mut moves);
            self.scan(row + 1, stop, 1, piece.color, col + 1, 1, &[], &mut moves);
        }

        moves
    }

    /// Walks one diagonal from `(start, col)` toward `stop` (exclusive).
    #[allow(clippy::too_many_arguments)]
    fn scan(
        &self,
        start: i8,
        stop: i8,
        step: i8,
        color: Color,
        mut col: i8,
        col_step: i8,
        skipped: &[Piece],
        moves: &mut MoveMap,
    ) {
        let mut last: Option<Piece> = None;
        let rows = std::iter::successors(Some(start), |r| Some(r + step))
            .take_while(|&r| if step > 0 { r < stop } else { r > stop });

        for r in rows {
            let Some(sq) = square(r, col) else {
                break;
            };

            match self.piece_at(sq) {
                None => {
                    if !skipped.is_empty() && last.is_none() {
                        break;
                    }
                    let mut captured: Vec<Piece> = last.into_iter().collect();
                    captured.extend_from_slice(skipped);
                    moves.insert(sq, captured.clone());

                    if last.is_some() {
                        let stop = scan_stop(r, step);
                        self.scan(r + step, stop, step, color, col - 1, -1, &captured, moves);
                        self.scan(r + step, stop, step, color, col + 1, 1, &captured, moves);
                    }
                    break;
                }
                Some(pc) if pc.color == color => break,
                Some(pc) => last = Some(pc),
            }

            col += col_step;
        }
    }
}

/// Exclusive row bound of a scan starting next to `row`, clamped to the board.
fn scan_stop(row: i8, step: i8) -> i8 {
    if step < 0 {
        (row - SCAN_ROWS - 1).max(-1)
    } else {
        (row + SCAN_ROWS + 1).min(ROWS as i8)
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
