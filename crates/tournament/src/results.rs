//! Match results and reporting

use checkers_core::Color;
use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game from the other player's side.
    pub fn flip(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// How a game stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameEnd {
    /// One side ran out of pieces
    NoPiecesLeft,
    /// The side to move had no legal move
    NoLegalMove,
    /// The ply limit was reached
    MoveLimit,
}

/// Result of a match (multiple games), from the first player's side
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from the first player's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// One finished game, from the first player's side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    /// 1-based game number
    pub number: u32,
    /// Color the first player had
    pub first_color: Color,
    pub result: GameResult,
    pub end: GameEnd,
    pub plies: u32,
    pub final_pieces: PieceCounts,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PieceCounts {
    pub white: u8,
    pub black: u8,
}

/// Complete match report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// First player's description
    pub first: String,
    /// Second player's description
    pub second: String,
    pub config: MatchConfig,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    /// Average game length in plies.
    pub fn average_plies(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        self.games.iter().map(|g| g.plies as f64).sum::<f64>() / self.games.len() as f64
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Match: {} vs {} ===\n\n", self.first, self.second));
        report.push_str(&format!(
            "Config: {} games, {} plies max, colors {}\n\n",
            self.config.num_games,
            self.config.max_moves,
            if self.config.alternate_colors {
                "alternate"
            } else {
                "fixed"
            }
        ));

        report.push_str(&format!(
            "{:<6} {:<7} {:<7} {:<16} {:>6} {:>7}\n",
            "Game", "Color", "Result", "End", "Plies", "W-B"
        ));
        report.push_str(&"-".repeat(54));
        report.push('\n');

        for g in &self.games {
            let outcome = match g.result {
                GameResult::Win => "1-0",
                GameResult::Loss => "0-1",
                GameResult::Draw => "1/2",
            };
            let end = match g.end {
                GameEnd::NoPiecesLeft => "no pieces left",
                GameEnd::NoLegalMove => "no legal move",
                GameEnd::MoveLimit => "move limit",
            };
            report.push_str(&format!(
                "{:<6} {:<7} {:<7} {:<16} {:>6} {:>7}\n",
                g.number,
                g.first_color.to_string(),
                outcome,
                end,
                g.plies,
                format!("{}-{}", g.final_pieces.white, g.final_pieces.black)
            ));
        }

        report.push('\n');
        report.push_str(&format!(
            "{}: {} wins, {} losses, {} draws\n",
            self.first, self.result.wins, self.result.losses, self.result.draws
        ));
        report.push_str(&format!("Score: {:.1}%\n", self.result.score() * 100.0));
        report.push_str(&format!("Average length: {:.1} plies\n", self.average_plies()));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
