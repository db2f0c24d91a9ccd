use super::*;
use connect_core::Game;

#[test]
fn astar_engine_opens_in_the_first_column() {
    let mut engine = AStarEngine::new();
    let state = Game::new(3, 4, 3).initial();

    let result = engine.choose_move(&state);

    assert_eq!(result.best_move, Some(1));
    assert_eq!(result.score, 5.0);
    assert!(!result.exhausted);
    assert!(result.nodes > 0);
}

#[test]
fn astar_engine_finishes_a_won_line() {
    let mut engine = AStarEngine::new();
    let state = Game::new(3, 4, 3).replay(&[1, 4, 2, 4]).unwrap();

    let result = engine.choose_move(&state);

    assert_eq!(result.best_move, Some(3));
    assert_eq!(result.score, 1.0);
}

#[test]
fn astar_engine_counts_exhausted_searches() {
    let mut engine = AStarEngine::new();
    // Second can never line up two pieces in the lone column.
    let state = Game::new(2, 1, 2).replay(&[1]).unwrap();

    let first = engine.choose_move(&state);
    assert_eq!(first.best_move, Some(1));
    assert!(first.exhausted);
    assert_eq!(engine.exhausted_searches(), 1);

    // The counter is cumulative, not per search.
    let _ = engine.choose_move(&state);
    assert_eq!(engine.exhausted_searches(), 2);
}

#[test]
fn astar_engine_yields_nothing_after_the_game_ends() {
    let mut engine = AStarEngine::new();
    let state = Game::new(3, 4, 3).replay(&[1, 4, 2, 4, 3]).unwrap();

    let result = engine.choose_move(&state);

    assert!(result.best_move.is_none());
    assert!(result.exhausted);
}
