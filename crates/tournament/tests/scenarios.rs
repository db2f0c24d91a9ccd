//! End-to-end engine matchups
//!
//! Deterministic engines make most of these outcomes exactly reproducible;
//! the one statistical check uses a generous band. Games run in parallel
//! where the pairing allows it.

use rayon::prelude::*;

use alphabeta_engine::AlphaBetaEngine;
use astar_engine::AStarEngine;
use connect_core::Game;
use random_engine::RandomEngine;
use tournament::{GameResult, MatchConfig, MatchRunner};

fn runner(game: Game, num_games: u32, alternate_first: bool) -> MatchRunner {
    MatchRunner::new(MatchConfig {
        game,
        num_games,
        alternate_first,
        verbose: false,
        ..Default::default()
    })
}

#[test]
fn alphabeta_first_beats_random_every_time() {
    let runner = runner(Game::new(3, 4, 3), 100, false);

    (0..100).into_par_iter().for_each(|_| {
        let mut alphabeta = AlphaBetaEngine::new();
        let mut random = RandomEngine::new();

        let (result, plies) = runner.play_game(&mut alphabeta, &mut random);
        assert_eq!(result, GameResult::Win, "lost or drew after {} plies", plies);
    });
}

#[test]
fn alphabeta_mirror_match_always_draws() {
    let runner = runner(Game::new(3, 3, 3), 10, true);
    let mut engine1 = AlphaBetaEngine::new();
    let mut engine2 = AlphaBetaEngine::new();

    let result = runner.run_match(&mut engine1, &mut engine2);

    assert_eq!(result.draws, 10);
    assert_eq!(result.wins, 0);
    assert_eq!(result.losses, 0);
}

#[test]
fn astar_first_beats_alphabeta_in_five_plies() {
    let runner = runner(Game::new(3, 4, 3), 10, false);
    let mut astar = AStarEngine::new();
    let mut alphabeta = AlphaBetaEngine::new();

    let result = runner.run_match(&mut astar, &mut alphabeta);

    assert_eq!(result.wins, 10);
    assert_eq!(result.game_lengths, vec![5; 10]);
}

#[test]
fn random_mirror_match_favors_the_first_seat_slightly() {
    let runner = runner(Game::connect_four(), 1000, false);

    let first_wins: u32 = (0..1000)
        .into_par_iter()
        .map(|_| {
            let mut one = RandomEngine::new();
            let mut two = RandomEngine::new();
            match runner.play_game(&mut one, &mut two) {
                (GameResult::Win, _) => 1,
                _ => 0,
            }
        })
        .sum();

    let rate = first_wins as f64 / 1000.0;
    assert!(
        (0.50..=0.60).contains(&rate),
        "first-seat win rate {} outside the expected band",
        rate
    );
}
