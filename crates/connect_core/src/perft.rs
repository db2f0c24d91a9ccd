use crate::board::State;

/// Pure perft path count.
///
/// Counts the move paths of exactly `depth` plies from `state`. A terminal
/// state reached early counts as a single leaf rather than being extended,
/// so for depths past the longest possible game the count settles on the
/// number of distinct complete games.
pub fn perft(state: &State, depth: usize) -> u64 {
    if depth == 0 || state.is_terminal() {
        return 1;
    }
    state
        .successors()
        .map(|(_, next)| perft(&next, depth - 1))
        .sum()
}
