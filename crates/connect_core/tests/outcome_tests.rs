//! Tests for outcome detection across whole games
//!
//! Covers every winning axis plus the draw cases:
//! - Horizontal, vertical and both diagonal runs
//! - Draws on filled boards
//! - Terminal values as seen by each side

use connect_core::{Game, Outcome, Side};

// =============================================================================
// Winning Runs
// =============================================================================

#[test]
fn test_horizontal_run_wins() {
    let game = Game::new(3, 4, 3);
    // First fills (3,1)..(3,3) along the bottom while Second stacks on top.
    let state = game.replay(&[1, 1, 2, 2, 3]).unwrap();

    assert_eq!(state.outcome, Outcome::FirstWins);
    assert!(state.is_terminal());
}

#[test]
fn test_vertical_run_wins() {
    let game = Game::new(3, 4, 3);
    // First stacks column 1 to the top.
    let state = game.replay(&[1, 2, 1, 2, 1]).unwrap();

    assert_eq!(state.outcome, Outcome::FirstWins);
}

#[test]
fn test_down_right_diagonal_wins() {
    let game = Game::new(3, 4, 3);
    // First assembles (1,1), (2,2), (3,3); Second supplies the scaffolding.
    let state = game.replay(&[3, 2, 2, 1, 4, 1, 1]).unwrap();

    assert_eq!(state.outcome, Outcome::FirstWins);
}

#[test]
fn test_down_left_diagonal_wins() {
    let game = Game::new(3, 4, 3);
    // Mirror image: (3,1), (2,2), (1,3).
    let state = game.replay(&[1, 2, 2, 3, 4, 3, 3]).unwrap();

    assert_eq!(state.outcome, Outcome::FirstWins);
}

#[test]
fn test_second_can_win_too() {
    let game = Game::new(3, 4, 3);
    // First wastes moves in column 4 while Second walks the bottom row.
    let state = game.replay(&[4, 1, 4, 2, 2, 3]).unwrap();

    assert_eq!(state.outcome, Outcome::SecondWins);
    assert_eq!(state.value_for(Side::Second), 1);
    assert_eq!(state.value_for(Side::First), -1);
}

#[test]
fn test_standard_board_four_in_a_row() {
    let game = Game::connect_four();
    let state = game.replay(&[1, 1, 2, 2, 3, 3, 4]).unwrap();

    assert_eq!(state.outcome, Outcome::FirstWins);
}

// =============================================================================
// Draws
// =============================================================================

#[test]
fn test_full_board_without_a_run_is_a_draw() {
    let game = Game::new(1, 2, 2);
    let state = game.replay(&[1, 2]).unwrap();

    assert_eq!(state.outcome, Outcome::Undecided);
    assert!(state.is_terminal(), "a full board ends the game");
    assert!(state.legal_moves().is_empty());
}

#[test]
fn test_three_by_three_draw_filling() {
    let game = Game::new(3, 3, 3);
    // Column-cycling order that fills all nine cells without a run of three.
    let state = game.replay(&[1, 3, 2, 1, 3, 2, 1, 3, 2]).unwrap();

    assert_eq!(state.outcome, Outcome::Undecided);
    assert!(state.is_terminal());
    assert_eq!(state.value_for(Side::First), 0);
    assert_eq!(state.value_for(Side::Second), 0);
}

#[test]
fn test_win_on_the_last_cell_is_not_a_draw() {
    let game = Game::new(1, 3, 2);
    // The final empty cell completes First's pair.
    let state = game.replay(&[1, 3, 2]).unwrap();

    assert_eq!(state.outcome, Outcome::FirstWins);
    assert_eq!(state.value_for(Side::First), 1);
}

// =============================================================================
// Terminal Values
// =============================================================================

#[test]
fn test_values_are_symmetric() {
    let game = Game::new(3, 4, 3);
    let won = game.replay(&[1, 4, 2, 4, 3]).unwrap();

    assert_eq!(won.value_for(Side::First), -won.value_for(Side::Second));
}

#[test]
fn test_undecided_game_keeps_running() {
    let game = Game::new(3, 4, 3);
    let state = game.replay(&[1, 2, 3]).unwrap();

    assert_eq!(state.outcome, Outcome::Undecided);
    assert!(!state.is_terminal());
    assert_eq!(state.value_for(Side::First), 0);
}
