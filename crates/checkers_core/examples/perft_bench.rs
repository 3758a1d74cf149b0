//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p checkers_core -- [depth] [diagram-file]
//!
//! Examples:
//!   # Default: depth 7 from the starting position, both sides
//!   cargo flamegraph --example perft_bench -p checkers_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p checkers_core -- 8
//!
//!   # Custom depth and position (eight lines of `.`, `w`, `W`, `b`, `B`)
//!   cargo flamegraph --example perft_bench -p checkers_core -- 6 midgame.txt

use checkers_core::{perft, BoardState, Color};
use std::env;
use std::fs;
use std::time::{Duration, Instant};

/// Standard test positions for comprehensive profiling
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Kings in the middle",
        "........
         .w.w....
         ..W.....
         ...b.b..
         ....B...
         .....w..
         ..b...b.
         ........",
    ),
    (
        "Capture chains",
        ".w.w.w..
         ..b.....
         ........
         ..b.b...
         ........
         ..b.b...
         .......b
         b.......",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(7);

    // If a diagram file is provided, use single position mode
    if let Some(path) = args.get(2) {
        let diagram = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Cannot read {path}: {e}");
                std::process::exit(1);
            }
        };
        match BoardState::from_diagram(&diagram) {
            Ok(board) => run_single_position(&board, depth),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    } else {
        run_all_positions(depth);
    }
}

fn run_single_position(board: &BoardState, depth: u8) {
    println!("{board}");
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(board, Color::Black, depth.saturating_sub(2));
    }

    for color in [Color::Black, Color::White] {
        let start = Instant::now();
        let nodes = perft(board, color, depth);
        let elapsed = start.elapsed();
        println!("{color} to move: {nodes} nodes in {elapsed:.3?} ({:.0} nps)", nps(nodes, elapsed));
    }
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    let mut positions = vec![("Starting position", BoardState::startpos())];
    for &(name, diagram) in TEST_POSITIONS {
        match BoardState::from_diagram(diagram) {
            Ok(board) => positions.push((name, board)),
            Err(e) => eprintln!("Skipping {name}: {e}"),
        }
    }

    for (name, board) in &positions {
        for color in [Color::Black, Color::White] {
            print!("{:.<36}", format!("{name} ({color})"));

            let start = Instant::now();
            let nodes = perft(board, color, depth);
            let elapsed = start.elapsed();

            total_nodes += nodes;
            total_time += elapsed;

            println!(
                " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
                nps(nodes, elapsed)
            );
        }
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}
