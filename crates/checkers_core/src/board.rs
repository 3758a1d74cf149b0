use std::fmt;

use crate::error::BoardError;
use crate::types::*;

/// Full snapshot of the game: the grid plus per-color piece and king counters.
///
/// A `BoardState` is a plain value. Cloning copies the grid and every piece,
/// so sibling search branches never observe each other's mutations.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoardState {
    grid: [[Option<Piece>; COLS]; ROWS],
    remaining: [u8; 2],
    kings: [u8; 2],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::startpos()
    }
}

impl BoardState {
    pub fn empty() -> Self {
        BoardState {
            grid: [[None; COLS]; ROWS],
            remaining: [0; 2],
            kings: [0; 2],
        }
    }

    /// Standard setup: White on rows 0-2, Black on rows 5-7, dark squares only.
    pub fn startpos() -> Self {
        let mut b = Self::empty();
        for row in 0..ROWS as u8 {
            for col in 0..COLS as u8 {
                if !is_playable(row, col) {
                    continue;
                }
                if row < 3 {
                    b.place(Piece::new(row, col, Color::White));
                } else if row > 4 {
                    b.place(Piece::new(row, col, Color::Black));
                }
            }
        }
        debug_assert_eq!(b.remaining, [STARTING_PIECES; 2]);
        b
    }

    /// Parses eight rows of eight cells, row 0 first.
    ///
    /// `.` is empty, `w`/`b` are men and `W`/`B` are kings. Blank lines and
    /// surrounding whitespace are ignored.
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != ROWS {
            return Err(BoardError::InvalidDiagram(format!(
                "expected {ROWS} rows, found {}",
                rows.len()
            )));
        }

        let mut b = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().collect();
            if cells.len() != COLS {
                return Err(BoardError::InvalidDiagram(format!(
                    "row {row} has {} cells, expected {COLS}",
                    cells.len()
                )));
            }
            for (col, ch) in cells.into_iter().enumerate() {
                let (row, col) = (row as u8, col as u8);
                let piece = match ch {
                    '.' => continue,
                    'w' => Piece::new(row, col, Color::White),
                    'W' => Piece::king(row, col, Color::White),
                    'b' => Piece::new(row, col, Color::Black),
                    'B' => Piece::king(row, col, Color::Black),
                    other => {
                        return Err(BoardError::InvalidDiagram(format!(
                            "unexpected character '{other}' at ({row}, {col})"
                        )))
                    }
                };
                b.place(piece);
            }
        }
        Ok(b)
    }

    /// Puts a piece on its own coordinates, replacing whatever was there.
    pub fn place(&mut self, piece: Piece) {
        self.clear(piece.square());
        self.remaining[piece.color.idx()] += 1;
        if piece.king {
            self.kings[piece.color.idx()] += 1;
        }
        self.grid[piece.row as usize][piece.col as usize] = Some(piece);
    }

    fn clear(&mut self, sq: Square) -> Option<Piece> {
        let taken = self.grid[sq.row as usize][sq.col as usize].take();
        if let Some(pc) = taken {
            self.remaining[pc.color.idx()] -= 1;
            if pc.king {
                self.kings[pc.color.idx()] -= 1;
            }
        }
        taken
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row as usize][sq.col as usize]
    }

    pub fn pieces_remaining(&self, c: Color) -> u8 {
        self.remaining[c.idx()]
    }

    pub fn kings(&self, c: Color) -> u8 {
        self.kings[c.idx()]
    }

    /// Piece-count difference from `c`'s point of view.
    pub fn piece_margin(&self, c: Color) -> i32 {
        self.remaining[c.idx()] as i32 - self.remaining[c.other().idx()] as i32
    }

    pub fn king_margin(&self, c: Color) -> i32 {
        self.kings[c.idx()] as i32 - self.kings[c.other().idx()] as i32
    }

    /// All pieces, row by row.
    pub fn all_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.grid.iter().flatten().filter_map(|cell| *cell)
    }

    pub fn pieces(&self, c: Color) -> Vec<Piece> {
        self.all_pieces().filter(|pc| pc.color == c).collect()
    }

    /// Pieces of `c` that have at least one legal destination.
    pub fn movable_pieces(&self, c: Color) -> Vec<Piece> {
        self.all_pieces()
            .filter(|pc| pc.color == c && !self.legal_moves(pc).is_empty())
            .collect()
    }

    /// Moves `piece` to `to`, crowning it on its promotion row.
    ///
    /// Returns the piece as it stands after the move. Captures are removed
    /// separately with [`BoardState::remove_pieces`].
    pub fn apply_move(&mut self, piece: &Piece, to: Square) -> Piece {
        let mut moved = self.grid[piece.row as usize][piece.col as usize]
            .take()
            .expect("no piece on the origin square");
        debug_assert!(
            self.piece_at(to).is_none(),
            "destination {to} is occupied"
        );

        moved.row = to.row;
        moved.col = to.col;
        if to.row == moved.color.promotion_row() && !moved.king {
            moved.king = true;
            self.kings[moved.color.idx()] += 1;
        }
        self.grid[to.row as usize][to.col as usize] = Some(moved);
        moved
    }

    /// Removes captured pieces and updates the counters.
    pub fn remove_pieces(&mut self, pieces: &[Piece]) {
        for pc in pieces {
            self.clear(pc.square());
        }
    }

    /// A side wins once its opponent has no pieces left.
    ///
    /// A side with pieces but no legal move is not reported here.
    pub fn winner(&self) -> Option<Color> {
        if self.remaining[Color::Black.idx()] == 0 {
            Some(Color::White)
        } else if self.remaining[Color::White.idx()] == 0 {
            Some(Color::Black)
        } else {
            None
        }
    }
}

/// Moves the piece on `from` to `to` after checking the move is legal.
///
/// Returns the captured pieces; the caller removes them with
/// [`BoardState::remove_pieces`] once it has handled them.
pub fn apply_player_move(
    board: &mut BoardState,
    from: Square,
    to: Square,
) -> Result<Vec<Piece>, BoardError> {
    let piece = board.piece_at(from).ok_or(BoardError::EmptySquare(from))?;
    let mut moves = board.legal_moves(&piece);
    let captured = moves
        .remove(&to)
        .ok_or(BoardError::IllegalMove { from, to })?;
    board.apply_move(&piece, to);
    Ok(captured)
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            let line: String = row
                .iter()
                .map(|cell| cell.map_or('.', Piece::to_char))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
