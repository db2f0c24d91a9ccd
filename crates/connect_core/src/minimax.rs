//! Full-depth minimax with optional alpha-beta pruning.
//!
//! The boards this engine targets are small enough to search to the natural
//! leaves of the game, so there is no depth limit and no leaf evaluation
//! function. Toggling pruning changes only how many nodes are visited, never
//! which move is selected.

use crate::board::State;
use crate::types::Side;

/// Result of one top-level adversarial search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxOutcome {
    /// First move achieving the best value, `None` on a terminal state.
    pub best_move: Option<usize>,
    /// Game-theoretic value from the root player's perspective: +1 win,
    /// -1 loss, 0 draw.
    pub value: i32,
    /// Entries into the recursion, including the root.
    pub nodes: u64,
}

/// Searches `state` to the end of the game for `player` and returns the
/// best move, its value, and the node count. `prune` enables alpha-beta
/// cutoffs; the selected move is identical either way.
pub fn pick_best_move(state: &State, player: Side, prune: bool) -> MinimaxOutcome {
    let mut nodes = 0u64;
    let (value, best_move) = maximize(
        state,
        player,
        prune,
        i32::MIN / 2,
        i32::MAX / 2,
        &mut nodes,
    );
    MinimaxOutcome {
        best_move,
        value,
        nodes,
    }
}

/// Best value `player` can force from `state` when `player` moves here.
/// Ties are broken by the first column achieving the value.
fn maximize(
    state: &State,
    player: Side,
    prune: bool,
    mut alpha: i32,
    beta: i32,
    nodes: &mut u64,
) -> (i32, Option<usize>) {
    *nodes += 1;

    if state.is_terminal() {
        return (state.value_for(player), None);
    }

    let mut best = i32::MIN / 2;
    let mut best_move = None;

    for (col, next) in state.successors() {
        let (value, _) = minimize(&next, player, prune, alpha, beta, nodes);
        if value > best {
            best = value;
            best_move = Some(col);
        }
        if prune {
            if best >= beta {
                break; // Beta cutoff
            }
            if best > alpha {
                alpha = best;
            }
        }
    }

    (best, best_move)
}

/// Best value the opponent can hold `player` down to when the opponent
/// moves at `state`. Mirror image of [`maximize`].
fn minimize(
    state: &State,
    player: Side,
    prune: bool,
    alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> (i32, Option<usize>) {
    *nodes += 1;

    if state.is_terminal() {
        return (state.value_for(player), None);
    }

    let mut best = i32::MAX / 2;
    let mut best_move = None;

    for (col, next) in state.successors() {
        let (value, _) = maximize(&next, player, prune, alpha, beta, nodes);
        if value < best {
            best = value;
            best_move = Some(col);
        }
        if prune {
            if best <= alpha {
                break; // Alpha cutoff
            }
            if best < beta {
                beta = best;
            }
        }
    }

    (best, best_move)
}

#[cfg(test)]
#[path = "minimax_tests.rs"]
mod minimax_tests;
