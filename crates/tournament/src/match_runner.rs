//! Match runner for playing games between engines

use checkers_core::{BoardState, Color, Engine, SearchLimits};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::MatchConfig;
use crate::results::{GameEnd, GameRecord, GameResult, MatchReport, MatchResult, PieceCounts};
use crate::strategy::create_engine;

/// Color that makes the first move of every game.
pub const FIRST_TO_MOVE: Color = Color::Black;

/// A finished game, from the first mover's side.
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub result: GameResult,
    pub end: GameEnd,
    pub plies: u32,
    pub board: BoardState,
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Engines for both players, seeded from the match seed when one is set.
    pub fn create_players(&self) -> (Box<dyn Engine>, Box<dyn Engine>) {
        let players = &self.config.players;
        match self.config.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                (
                    create_engine(players.first.strategy, Some(rng.gen())),
                    create_engine(players.second.strategy, Some(rng.gen())),
                )
            }
            None => (
                create_engine(players.first.strategy, None),
                create_engine(players.second.strategy, None),
            ),
        }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from the first engine's perspective
    pub fn run_match(&self, first: &mut dyn Engine, second: &mut dyn Engine) -> MatchResult {
        self.run_report(first, second).result
    }

    /// Run a match and keep a record of every game.
    pub fn run_report(&self, first: &mut dyn Engine, second: &mut dyn Engine) -> MatchReport {
        let first_limits = self.config.players.first.limits;
        let second_limits = self.config.players.second.limits;
        let mut result = MatchResult::new();
        let mut games = Vec::with_capacity(self.config.num_games as usize);

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let first_moves_first = !self.config.alternate_colors || game_num % 2 == 0;

            let (first_color, game) = if first_moves_first {
                let game = self.play_game(first, &first_limits, second, &second_limits);
                (FIRST_TO_MOVE, game)
            } else {
                // Flip result since the first engine moves second
                let mut game = self.play_game(second, &second_limits, first, &first_limits);
                game.result = game.result.flip();
                (FIRST_TO_MOVE.other(), game)
            };

            result.record(game.result);
            info!(
                game = game_num + 1,
                first = first.name(),
                second = second.name(),
                %first_color,
                result = ?game.result,
                end = ?game.end,
                plies = game.plies,
                "game finished"
            );

            if self.config.verbose {
                let outcome = match game.result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    first_color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }

            games.push(GameRecord {
                number: game_num + 1,
                first_color,
                result: game.result,
                end: game.end,
                plies: game.plies,
                final_pieces: PieceCounts {
                    white: game.board.pieces_remaining(Color::White),
                    black: game.board.pieces_remaining(Color::Black),
                },
            });
        }

        MatchReport {
            first: self.config.players.first.label(),
            second: self.config.players.second.label(),
            config: self.config.clone(),
            result,
            games,
        }
    }

    /// Play a single game from the starting position, returns result from
    /// the first mover's perspective
    pub fn play_game(
        &self,
        mover: &mut dyn Engine,
        mover_limits: &SearchLimits,
        replier: &mut dyn Engine,
        replier_limits: &SearchLimits,
    ) -> GameOutcome {
        let mut board = BoardState::startpos();
        let mut to_move = FIRST_TO_MOVE;
        mover.new_game();
        replier.new_game();

        let from_first = |winner: Color| {
            if winner == FIRST_TO_MOVE {
                GameResult::Win
            } else {
                GameResult::Loss
            }
        };

        for ply in 0..self.config.max_moves {
            if let Some(winner) = board.winner() {
                return GameOutcome {
                    result: from_first(winner),
                    end: GameEnd::NoPiecesLeft,
                    plies: ply,
                    board,
                };
            }

            let result = if to_move == FIRST_TO_MOVE {
                mover.search(&board, to_move, mover_limits)
            } else {
                replier.search(&board, to_move, replier_limits)
            };
            debug!(ply, %to_move, score = result.score, nodes = result.nodes, "move chosen");

            match result.board {
                Some(next) => board = next,
                None => {
                    // The side to move cannot play and loses
                    return GameOutcome {
                        result: from_first(to_move.other()),
                        end: GameEnd::NoLegalMove,
                        plies: ply,
                        board,
                    };
                }
            }
            to_move = to_move.other();
        }

        // The last move may have finished the game
        match board.winner() {
            Some(winner) => GameOutcome {
                result: from_first(winner),
                end: GameEnd::NoPiecesLeft,
                plies: self.config.max_moves,
                board,
            },
            None => GameOutcome {
                result: GameResult::Draw,
                end: GameEnd::MoveLimit,
                plies: self.config.max_moves,
                board,
            },
        }
    }
}

/// Quick utility to run a single match with default settings
pub fn quick_match(first: &mut dyn Engine, second: &mut dyn Engine, num_games: u32) -> MatchResult {
    let config = MatchConfig {
        num_games,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(first, second)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
