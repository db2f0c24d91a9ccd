//! Random Move Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Testing infrastructure before wiring up real search
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use connect_core::{Engine, SearchResult, State};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// An engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random column
/// from all available ones. It's the simplest possible engine and serves
/// as a baseline for testing.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, state: &State) -> SearchResult {
        let moves = state.legal_moves();
        let best_move = moves.choose(&mut thread_rng()).copied();

        SearchResult {
            best_move,
            score: 0.0,
            nodes: 1,
            exhausted: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
