//! Heuristic cost of a state for the best-first search.
//!
//! Lower is better for the scored player. The function is deliberately
//! asymmetric: it rewards the player's own longest run and only reacts to
//! opponent threats that can land on the very next move. Deeper threats,
//! including double attacks, are invisible to it; the search layer is
//! expected to cope with that.

use crate::board::State;
use crate::lines;
use crate::types::Side;

/// Cost magnitude for decided positions: a win for the scored player is
/// `-TERMINAL_SCORE`, a loss (or handing the opponent an immediate win)
/// is `+TERMINAL_SCORE`.
pub const TERMINAL_SCORE: f64 = 10_000.0;

/// Scores `state` as a cost from `player`'s perspective.
pub fn heuristic(state: &State, player: Side) -> f64 {
    if state.outcome.is_decided() {
        return if state.value_for(player) > 0 {
            -TERMINAL_SCORE
        } else {
            TERMINAL_SCORE
        };
    }

    let best = lines::best_runs(&state.board);

    // One-ply lookahead: if the opponent moves next and any reply of theirs
    // ends the game, this position already hands them the win.
    if state.to_move == player.other()
        && state
            .successors()
            .any(|(_, next)| next.outcome.is_decided())
    {
        return TERMINAL_SCORE;
    }

    -(best[player.idx()] as f64).exp()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
