use super::*;
use crate::board::Game;
use crate::types::Outcome;

#[test]
fn test_decided_states_score_terminal() {
    let game = Game::new(3, 4, 3);
    let won = game.replay(&[1, 4, 2, 4, 3]).unwrap();
    assert_eq!(won.outcome, Outcome::FirstWins);

    assert_eq!(heuristic(&won, Side::First), -TERMINAL_SCORE);
    assert_eq!(heuristic(&won, Side::Second), TERMINAL_SCORE);
}

#[test]
fn test_initial_state_costs_minus_one() {
    let game = Game::new(3, 4, 3);
    let state = game.initial();

    // No runs on either side: -exp(0).
    assert_eq!(heuristic(&state, Side::First), -1.0);
}

#[test]
fn test_longer_runs_score_exponentially_better() {
    let game = Game::new(3, 4, 3);
    let one = game.replay(&[1, 3]).unwrap();
    let two = game.replay(&[1, 3, 2, 3]).unwrap();

    assert_eq!(heuristic(&one, Side::First), -1f64.exp());
    assert_eq!(heuristic(&two, Side::First), -2f64.exp());
    assert!(heuristic(&two, Side::First) < heuristic(&one, Side::First));
}

#[test]
fn test_opponent_immediate_win_is_penalized() {
    let game = Game::new(3, 4, 3);
    // Second to move with (3,4)+(2,4) stacked: dropping column 4 wins.
    let state = game.replay(&[1, 4, 1, 4, 2]).unwrap();
    assert_eq!(state.to_move, Side::Second);
    assert_eq!(state.outcome, Outcome::Undecided);

    assert_eq!(heuristic(&state, Side::First), TERMINAL_SCORE);
}

#[test]
fn test_blocked_opponent_run_is_not_penalized() {
    let game = Game::new(3, 4, 3);
    // Second holds (3,3)+(3,4), but the only completion square is taken
    // and no other reply wins: the one-ply check stays quiet.
    let state = game.replay(&[2, 3, 1, 4, 1]).unwrap();
    assert_eq!(state.to_move, Side::Second);

    assert_eq!(heuristic(&state, Side::First), -2f64.exp());
}

#[test]
fn test_check_only_applies_when_opponent_moves_next() {
    let game = Game::new(3, 4, 3);
    // Second threatens (1,1), but it is First's turn: the threat is
    // invisible to the heuristic by design.
    let state = game.replay(&[4, 1, 4, 1]).unwrap();
    assert_eq!(state.to_move, Side::First);

    assert_eq!(heuristic(&state, Side::First), -2f64.exp());
}
