use super::*;
use connect_core::Game;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let state = Game::connect_four().initial();

    let result = engine.choose_move(&state);

    assert!(result.best_move.is_some());
    assert!(state.legal_moves().contains(&result.best_move.unwrap()));
}

#[test]
fn random_engine_handles_a_decided_game() {
    let mut engine = RandomEngine::new();
    let state = Game::new(3, 4, 3).replay(&[1, 4, 2, 4, 3]).unwrap();

    let result = engine.choose_move(&state);

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_handles_a_full_board() {
    let mut engine = RandomEngine::new();
    let state = Game::new(1, 2, 2).replay(&[1, 2]).unwrap();

    let result = engine.choose_move(&state);

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_eventually_tries_every_column() {
    let mut engine = RandomEngine::new();
    let state = Game::connect_four().initial();

    let mut seen = [false; 7];
    for _ in 0..500 {
        let col = engine.choose_move(&state).best_move.unwrap();
        seen[col - 1] = true;
    }

    assert!(seen.iter().all(|&s| s), "columns picked: {:?}", seen);
}
