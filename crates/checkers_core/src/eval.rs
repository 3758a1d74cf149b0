//! Heuristic evaluation of a board from one color's point of view.
//!
//! All scores are in hundredths of a piece so the three heuristics share one
//! integer scale. Positive favours the queried color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{board::BoardState, error::ParseHeuristicError, types::*};

pub type Score = i32;

/// Value of one piece of material.
pub const PIECE_VALUE: Score = 100;
/// Extra value of a king on top of its material.
pub const KING_BONUS: Score = 99;

const POSITIONAL_SCALE: Score = 100;
const KING_POSITION: Score = 21;
const TRAPPED_KING_PENALTY: Score = -100;

/// Selectable evaluation strategy used at search cutoffs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Piece count only.
    Material,
    /// Piece count plus a bonus per king.
    #[default]
    MaterialAndKings,
    /// Per-piece advancement, king presence and king mobility.
    Positional,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [
        Heuristic::Material,
        Heuristic::MaterialAndKings,
        Heuristic::Positional,
    ];

    pub fn evaluate(self, board: &BoardState, color: Color) -> Score {
        match self {
            Heuristic::Material => board.eval_material(color),
            Heuristic::MaterialAndKings => board.eval_material_and_kings(color),
            Heuristic::Positional => board.eval_positional(color),
        }
    }

    /// Numeric codes 1, 2 and 3, in order of sophistication.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Heuristic::Material),
            2 => Some(Heuristic::MaterialAndKings),
            3 => Some(Heuristic::Positional),
            _ => None,
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Heuristic::Material => 1,
            Heuristic::MaterialAndKings => 2,
            Heuristic::Positional => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Material => "material",
            Heuristic::MaterialAndKings => "material_and_kings",
            Heuristic::Positional => "positional",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u8>() {
            return Heuristic::from_id(id).ok_or_else(|| ParseHeuristicError(s.to_string()));
        }
        Heuristic::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseHeuristicError(s.to_string()))
    }
}

impl BoardState {
    pub fn eval_material(&self, color: Color) -> Score {
        PIECE_VALUE * self.piece_margin(color)
    }

    pub fn eval_material_and_kings(&self, color: Color) -> Score {
        PIECE_VALUE * self.piece_margin(color) + KING_BONUS * self.king_margin(color)
    }

    /// Rewards advancing men more steeply past the middle of the board, and
    /// punishes a king that currently has nowhere to go.
    pub fn eval_positional(&self, color: Color) -> Score {
        let mut score = 0;
        for pc in self.all_pieces() {
            let advance = pc.advance() as Score;
            score += match (pc.color == color, pc.king) {
                (true, false) if advance == 0 => 0,
                (true, false) if advance > 3 => 2 + advance,
                (true, false) => 1 + advance,
                (true, true) if self.legal_moves(&pc).is_empty() => TRAPPED_KING_PENALTY,
                (true, true) => KING_POSITION,
                (false, false) if advance > 3 => -(3 + advance),
                (false, false) => -(2 + advance),
                (false, true) => -KING_POSITION,
            };
        }
        score * POSITIONAL_SCALE
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
