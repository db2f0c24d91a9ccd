//! Tournament CLI
//!
//! Run matches between engines and track Elo ratings.

use alphabeta_engine::AlphaBetaEngine;
use astar_engine::AStarEngine;
use connect_core::{Engine, Game};
use random_engine::RandomEngine;
use std::env;
use std::path::Path;
use tournament::{
    EloTracker, GauntletConfig, MatchConfig, MatchRunner, TournamentResults,
};

const ELO_FILE: &str = "tournament_elo.json";
const RESULTS_FILE: &str = "gauntlet_results.json";

fn print_usage() {
    println!("connect-arena Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--rows R] [--cols C] [--win W] [--show-boards]");
    println!("  tournament gauntlet [config.toml] [--games N]");
    println!("  tournament leaderboard");
    println!();
    println!("Engines:");
    println!("  random        - Uniform random column");
    println!("  alphabeta     - Exhaustive search with alpha-beta pruning");
    println!("  minimax       - The same search with pruning disabled");
    println!("  astar         - Best-first path search, re-planned every move");
    println!();
    println!("  alphabeta and minimax search to the end of the game; pair them");
    println!("  with small boards such as --rows 3 --cols 4 --win 3.");
    println!();
    println!("Examples:");
    println!("  tournament match alphabeta astar --games 20 --rows 3 --cols 4 --win 3");
    println!("  tournament gauntlet gauntlet.toml --games 50");
}

fn create_engine(spec: &str) -> Box<dyn Engine> {
    match spec.to_lowercase().as_str() {
        "random" | "rand" => Box::new(RandomEngine::new()),
        "alphabeta" | "ab" => Box::new(AlphaBetaEngine::new()),
        "minimax" | "mm" => Box::new(AlphaBetaEngine::without_pruning()),
        "astar" | "a*" => Box::new(AStarEngine::new()),
        _ => {
            eprintln!("Unknown engine: {}", spec);
            eprintln!("Using random fallback");
            Box::new(RandomEngine::new())
        }
    }
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine specifications");
        print_usage();
        return;
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    // Parse optional arguments
    let mut num_games: u32 = 10;
    let mut rows: usize = 6;
    let mut cols: usize = 7;
    let mut win_length: usize = 4;
    let mut show_boards = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    num_games = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--rows" => {
                if i + 1 < args.len() {
                    rows = args[i + 1].parse().unwrap_or(6);
                    i += 1;
                }
            }
            "--cols" => {
                if i + 1 < args.len() {
                    cols = args[i + 1].parse().unwrap_or(7);
                    i += 1;
                }
            }
            "--win" => {
                if i + 1 < args.len() {
                    win_length = args[i + 1].parse().unwrap_or(4);
                    i += 1;
                }
            }
            "--show-boards" | "-b" => {
                show_boards = true;
            }
            _ => {}
        }
        i += 1;
    }

    println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
    println!(
        "Games: {}, Board: {}x{}, win length {}",
        num_games, rows, cols, win_length
    );
    println!();

    let mut engine1 = create_engine(engine1_spec);
    let mut engine2 = create_engine(engine2_spec);

    let config = MatchConfig {
        game: Game::new(rows, cols, win_length),
        num_games,
        show_boards,
        verbose: true,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!(
        "Score: {:.1}%, average game {:.1} plies",
        result.score() * 100.0,
        result.average_length()
    );

    // Update Elo tracker
    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    tracker.update_ratings(engine1_spec, engine2_spec, &result);
    tracker.print_leaderboard();

    if let Err(e) = tracker.save(ELO_FILE) {
        eprintln!("Warning: Failed to save Elo tracker: {}", e);
    }
}

fn run_gauntlet(args: &[String]) {
    let config_path = args.first().filter(|a| !a.starts_with('-'));
    let mut config = match config_path {
        Some(path) => match GauntletConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                eprintln!("Using the default gauntlet");
                GauntletConfig::default()
            }
        },
        None => GauntletConfig::default(),
    };

    // Parse optional arguments
    let mut i = if config_path.is_some() { 1 } else { 0 };
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    config.games_per_match =
                        args[i + 1].parse().unwrap_or(config.games_per_match);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    if config.engines.len() < 2 {
        eprintln!("Error: gauntlet needs at least two engines");
        return;
    }

    println!("=== Gauntlet: {} engines, all pairings ===", config.engines.len());
    println!("Engines: {:?}", config.engines);
    println!(
        "Games per match: {}, Board: {}x{}, win length {}",
        config.games_per_match, config.rows, config.cols, config.win_length
    );

    let mut tracker = EloTracker::load(ELO_FILE).unwrap_or_default();
    let mut results = TournamentResults::new(
        "All-play-all gauntlet",
        config.engines.clone(),
        config.clone(),
    );

    for i in 0..config.engines.len() {
        for j in (i + 1)..config.engines.len() {
            let spec1 = &config.engines[i];
            let spec2 = &config.engines[j];
            println!("\n--- {} vs {} ---", spec1, spec2);

            let mut engine1 = create_engine(spec1);
            let mut engine2 = create_engine(spec2);

            let match_config = MatchConfig {
                game: config.game(),
                num_games: config.games_per_match,
                max_moves: config.max_moves,
                ..Default::default()
            };
            let runner = MatchRunner::new(match_config);
            let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

            println!(
                "Result: {}-{}-{} (Score: {:.1}%)",
                result.wins,
                result.losses,
                result.draws,
                result.score() * 100.0
            );

            tracker.update_ratings(spec1, spec2, &result);
            results.add_match(spec1, spec2, result);
        }
    }

    println!();
    tracker.print_leaderboard();
    results.print_report();

    if let Err(e) = results.save(Path::new(RESULTS_FILE)) {
        eprintln!("Warning: Failed to save results: {}", e);
    }
    if let Err(e) = tracker.save(ELO_FILE) {
        eprintln!("Warning: Failed to save Elo tracker: {}", e);
    }
}

fn show_leaderboard() {
    match EloTracker::load(ELO_FILE) {
        Ok(tracker) => tracker.print_leaderboard(),
        Err(_) => {
            println!("No tournament data found. Run some matches first!");
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "gauntlet" => run_gauntlet(&args[2..]),
        "leaderboard" | "elo" => show_leaderboard(),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
