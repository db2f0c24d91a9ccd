pub mod astar;
pub mod board;
pub mod eval;
pub mod lines;
pub mod minimax;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use astar::AStarOutcome;
pub use board::*;
pub use eval::*;
pub use lines::*;
pub use minimax::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait — implemented by all move-choosing engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen column (None if no legal moves)
    pub best_move: Option<usize>,
    /// Engine-defined evaluation of the chosen move: the game-theoretic
    /// value for adversarial engines, projected plies to a win for the
    /// best-first engine, 0 for engines that do not evaluate
    pub score: f64,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
    /// Whether the search ran out of frontier and fell back to a default
    pub exhausted: bool,
}

/// Trait that all engines must implement.
///
/// This allows drivers to swap between adversarial, best-first, and
/// baseline engines without caring which is which.
pub trait Engine: Send {
    /// Choose a move for the side to play in `state`.
    ///
    /// Drivers only call this on non-terminal states; the returned move must
    /// be legal in `state`.
    fn choose_move(&mut self, state: &State) -> SearchResult;

    /// Returns the engine's name for reporting
    fn name(&self) -> &str;

    /// Reset internal state for a new game (clear counters, history, etc.)
    fn new_game(&mut self) {}
}
