//! Tournament CLI
//!
//! Run matches between checkers engines and print the results.

use checkers_core::Heuristic;
use std::env;
use std::process::ExitCode;
use tournament::{MatchConfig, MatchRunner, PlayerConfig, Strategy};
use tracing::error;

fn print_usage() {
    println!("ML-checkers Match Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <strategy1> <strategy2> [options]");
    println!("  tournament run <config.toml> [--json]");
    println!();
    println!("Strategies:");
    println!("  minimax       - Exhaustive minimax");
    println!("  alpha_beta    - Minimax with alpha-beta pruning");
    println!("  mcts          - Monte Carlo tree search with random rollouts");
    println!("  random        - Random legal moves");
    println!();
    println!("Options:");
    println!("  --games N          Games to play (default 10)");
    println!("  --max-moves N      Plies before a game is drawn (default 200)");
    println!("  --depth D          Search depth for minimax and alpha_beta (default 4)");
    println!("  --iterations N     MCTS iterations (default 200)");
    println!("  --rollout-depth N  MCTS rollout plies (default 10)");
    println!("  --heuristic H      1|material, 2|material_and_kings, 3|positional");
    println!("  --seed S           Seed every engine for a reproducible match");
    println!("  --json             Print the report as JSON");
    println!();
    println!("Logging is controlled with RUST_LOG (default: info).");
    println!();
    println!("Examples:");
    println!("  tournament match alpha_beta random --games 20 --depth 4");
    println!("  tournament match minimax mcts --depth 3 --iterations 500 --seed 7");
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Value following a flag, parsed.
fn flag_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    let raw = args
        .get(i + 1)
        .ok_or_else(|| format!("{flag} needs a value"))?;
    raw.parse()
        .map_err(|e| format!("invalid value '{raw}' for {flag}: {e}"))
}

fn parse_match(args: &[String]) -> Result<(MatchConfig, bool), String> {
    if args.len() < 2 {
        return Err("match requires two strategies".to_string());
    }

    let first: Strategy = args[0].parse().map_err(|e| format!("{e}"))?;
    let second: Strategy = args[1].parse().map_err(|e| format!("{e}"))?;

    let mut config = MatchConfig::default();
    let mut limits = config.players.first.limits;
    let mut json = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                config.num_games = flag_value(args, i, "--games")?;
                i += 1;
            }
            "--max-moves" => {
                config.max_moves = flag_value(args, i, "--max-moves")?;
                i += 1;
            }
            "--depth" | "-d" => {
                limits.depth = flag_value(args, i, "--depth")?;
                i += 1;
            }
            "--iterations" | "-n" => {
                limits.iterations = flag_value(args, i, "--iterations")?;
                i += 1;
            }
            "--rollout-depth" => {
                limits.rollout_depth = flag_value(args, i, "--rollout-depth")?;
                i += 1;
            }
            "--heuristic" => {
                limits.heuristic = flag_value::<Heuristic>(args, i, "--heuristic")?;
                i += 1;
            }
            "--seed" => {
                config.seed = Some(flag_value(args, i, "--seed")?);
                i += 1;
            }
            "--json" => json = true,
            other => return Err(format!("unknown option: {other}")),
        }
        i += 1;
    }

    config.players.first = PlayerConfig::new(first, limits);
    config.players.second = PlayerConfig::new(second, limits);
    Ok((config, json))
}

fn parse_run(args: &[String]) -> Result<(MatchConfig, bool), String> {
    let path = args.first().ok_or("run requires a config file")?;
    let config = MatchConfig::load(path).map_err(|e| format!("{path}: {e}"))?;
    let json = args[1..].iter().any(|a| a == "--json");
    Ok((config, json))
}

fn run(mut config: MatchConfig, json: bool) -> Result<(), String> {
    // Progress lines would corrupt the JSON document
    if json {
        config.verbose = false;
    }

    let runner = MatchRunner::new(config);
    let (mut first, mut second) = runner.create_players();

    if !json {
        let players = &runner.config().players;
        println!("=== Match: {} vs {} ===", players.first.label(), players.second.label());
        println!(
            "Games: {}, Max plies: {}",
            runner.config().num_games,
            runner.config().max_moves
        );
        println!();
    }

    let report = runner.run_report(first.as_mut(), second.as_mut());

    if json {
        let text = report.to_json().map_err(|e| format!("failed to serialize report: {e}"))?;
        println!("{text}");
    } else {
        println!();
        report.print_report();
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing("info");

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let parsed = match args[1].as_str() {
        "match" => parse_match(&args[2..]),
        "run" => parse_run(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        other => Err(format!("unknown command: {other}")),
    };

    match parsed.and_then(|(config, json)| run(config, json)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            eprintln!();
            print_usage();
            ExitCode::FAILURE
        }
    }
}
