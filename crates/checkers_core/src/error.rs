//! Error types for rule and input violations.

use thiserror::Error;

use crate::types::Square;

/// Errors raised when external input does not fit the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("coordinate ({row}, {col}) is outside the 8x8 board")]
    InvalidCoordinate { row: i8, col: i8 },

    #[error("no piece on square {0}")]
    EmptySquare(Square),

    #[error("{to} is not a legal destination for the piece on {from}")]
    IllegalMove { from: Square, to: Square },

    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heuristic '{0}' (expected 1, 2, 3, material, material_and_kings or positional)")]
pub struct ParseHeuristicError(pub String);
