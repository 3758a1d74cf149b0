//! Match Runner for ML-checkers
//!
//! This crate provides infrastructure for:
//! - Choosing a move with any of the search strategies through one call
//! - Running matches between two configured engines
//! - Reporting match results as text or JSON
//!
//! # Usage
//!
//! ```bash
//! # Alpha-beta against MCTS, 20 games
//! cargo run -p tournament -- match alpha_beta mcts --games 20 --depth 4 --iterations 300
//!
//! # Everything from a config file
//! cargo run -p tournament -- run match.toml
//! ```

mod config;
mod match_runner;
mod results;
mod strategy;

pub use config::*;
pub use match_runner::*;
pub use results::*;
pub use strategy::*;
