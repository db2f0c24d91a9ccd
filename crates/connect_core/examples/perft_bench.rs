//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p connect_core -- [depth] [rows cols win]
//!
//! Examples:
//!   # Default: depth 8 across the benchmark geometries
//!   cargo flamegraph --example perft_bench -p connect_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p connect_core -- 9
//!
//!   # Custom depth on a single geometry (rows, columns, win length)
//!   cargo flamegraph --example perft_bench -p connect_core -- 10 5 5 4

use connect_core::{perft, Game};
use std::env;
use std::time::Instant;

/// Benchmark geometries covering the standard board and a few odd shapes.
const GEOMETRIES: &[(&str, usize, usize, usize)] = &[
    ("Standard 6x7 win 4", 6, 7, 4),
    ("Mini 3x4 win 3", 3, 4, 3),
    ("Square 5x5 win 4", 5, 5, 4),
    ("Wide 4x9 win 4", 4, 9, 4),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(8);

    // If a geometry is provided, use single board mode
    if let Some(rows) = args.get(2).and_then(|s| s.parse().ok()) {
        let cols = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(7);
        let win_length = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(4);
        run_single_geometry(Game::new(rows, cols, win_length), depth);
    } else {
        run_all_geometries(depth);
    }
}

fn run_single_geometry(game: Game, depth: usize) {
    let start_state = game.initial();

    println!(
        "Board: {} rows x {} columns, win length {}",
        game.rows, game.cols, game.win_length
    );
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&start_state, depth - 2);
    }

    let start = Instant::now();
    let nodes = perft(&start_state, depth);
    let elapsed = start.elapsed();

    let nps = if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {nps:.0}");
}

fn run_all_geometries(depth: usize) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for &(name, rows, cols, win_length) in GEOMETRIES {
        let game = Game::new(rows, cols, win_length);
        let start_state = game.initial();

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&start_state, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
