use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

pub const ROWS: usize = 8;
pub const COLS: usize = 8;

/// Pieces each side starts with.
pub const STARTING_PIECES: u8 = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Row step of a man moving forward.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
    pub fn home_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => (ROWS - 1) as u8,
        }
    }
    /// The farthest row, where a man is crowned.
    pub fn promotion_row(self) -> u8 {
        self.other().home_row()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Checked constructor for coordinates coming from outside the engine.
    pub fn new(row: i8, col: i8) -> Result<Self, BoardError> {
        square(row, col).ok_or(BoardError::InvalidCoordinate { row, col })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single checker. Each board snapshot owns its own copies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub row: u8,
    pub col: u8,
    pub color: Color,
    pub king: bool,
}

impl Piece {
    pub fn new(row: u8, col: u8, color: Color) -> Self {
        Self {
            row,
            col,
            color,
            king: false,
        }
    }

    pub fn king(row: u8, col: u8, color: Color) -> Self {
        Self {
            row,
            col,
            color,
            king: true,
        }
    }

    pub fn square(&self) -> Square {
        Square {
            row: self.row,
            col: self.col,
        }
    }

    /// Rows advanced from the home row.
    pub fn advance(&self) -> u8 {
        match self.color {
            Color::White => self.row,
            Color::Black => (ROWS - 1) as u8 - self.row,
        }
    }

    pub fn to_char(self) -> char {
        match (self.color, self.king) {
            (Color::White, false) => 'w',
            (Color::White, true) => 'W',
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
        }
    }
}

/// Legal destinations of one piece, each with the pieces captured on the way
/// (most recent capture first).
pub type MoveMap = BTreeMap<Square, Vec<Piece>>;

// Helpers
pub fn square(row: i8, col: i8) -> Option<Square> {
    if (0..ROWS as i8).contains(&row) && (0..COLS as i8).contains(&col) {
        Some(Square {
            row: row as u8,
            col: col as u8,
        })
    } else {
        None
    }
}

/// Dark squares used by the standard setup.
pub fn is_playable(row: u8, col: u8) -> bool {
    col % 2 == (row + 1) % 2
}
