//! Path-Search Engine
//!
//! Plays the first move of the cheapest winning path the best-first search
//! can find, then re-searches after every opponent reply. Against
//! cooperative or weak opposition this walks straight into a win; against
//! strong opposition the constant re-planning keeps it from chasing lines
//! the opponent already refuted.

use connect_core::{astar, Engine, SearchResult, State};

#[cfg(test)]
mod lib_tests;

/// An engine that plans a whole winning line, not just the next move.
///
/// This engine uses:
/// - Best-first search over moves of both sides with unit move cost
/// - The run-length heuristic from the core crate for frontier ordering
/// - A first-legal-move fallback when no winning path exists at all
#[derive(Debug, Clone, Default)]
pub struct AStarEngine {
    /// Searches that ended with an empty frontier, kept across games as a
    /// diagnostic.
    exhausted_searches: u64,
}

impl AStarEngine {
    pub fn new() -> Self {
        Self {
            exhausted_searches: 0,
        }
    }

    /// How often the fallback move was used instead of a planned one.
    pub fn exhausted_searches(&self) -> u64 {
        self.exhausted_searches
    }
}

impl Engine for AStarEngine {
    fn choose_move(&mut self, state: &State) -> SearchResult {
        let outcome = astar::search(state, state.to_move);
        if outcome.exhausted {
            self.exhausted_searches += 1;
        }

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.cost.map(|c| c as f64).unwrap_or(0.0),
            nodes: outcome.expanded,
            exhausted: outcome.exhausted,
        }
    }

    fn name(&self) -> &str {
        "AStar v1.0"
    }
}
