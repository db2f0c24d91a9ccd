//! Minimax Engine
//!
//! Exhaustive game-tree search from the side to move.
//! This is the perfect-play yardstick the other engines are measured against.

use connect_core::{pick_best_move, Engine, SearchResult, State};


/// An engine that searches the full game tree.
///
/// This engine uses:
/// - Minimax over every reachable state, no depth cutoff
/// - Alpha-beta pruning, which can be disabled for comparisons
/// - First-move tie-breaking, so equal lines resolve deterministically
#[derive(Debug, Clone)]
pub struct AlphaBetaEngine {
    /// Pruning toggle; selection is identical either way, only node
    /// counts differ.
    prune: bool,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self { prune: true }
    }

    /// Plain minimax, mostly useful for checking the pruned search.
    pub fn without_pruning() -> Self {
        Self { prune: false }
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for AlphaBetaEngine {
    fn choose_move(&mut self, state: &State) -> SearchResult {
        let outcome = pick_best_move(state, state.to_move, self.prune);

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.value as f64,
            nodes: outcome.nodes,
            exhausted: false,
        }
    }

    fn name(&self) -> &str {
        if self.prune {
            "AlphaBeta v1.0"
        } else {
            "Minimax v1.0"
        }
    }
}
