//! Contiguous line-run measurement, shared by win detection and the
//! heuristic evaluator.

use std::collections::BTreeMap;

use crate::types::{Cell, Side};

/// The four axes a winning line can lie on, as (row, col) steps:
/// horizontal, vertical, down-right diagonal, down-left diagonal.
pub const AXES: [(i64, i64); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Lengths of the contiguous same-owner runs through `anchor`, one per axis,
/// counting the anchor itself. The anchor does not have to be present in
/// `board`, which lets callers score a placement before committing it.
pub fn run_lengths(board: &BTreeMap<Cell, Side>, anchor: Cell, owner: Side) -> [usize; 4] {
    let mut runs = [0usize; 4];
    for (axis, &(dr, dc)) in AXES.iter().enumerate() {
        runs[axis] = 1 + walk(board, anchor, owner, dr, dc) + walk(board, anchor, owner, -dr, -dc);
    }
    runs
}

/// Longest run through `anchor` on any axis.
pub fn longest_run(board: &BTreeMap<Cell, Side>, anchor: Cell, owner: Side) -> usize {
    run_lengths(board, anchor, owner)
        .into_iter()
        .max()
        .unwrap_or(1)
}

/// Longest run on the board for each side, indexed by [`Side::idx`].
///
/// Scans every occupied cell; a cell in the middle of a run reports the whole
/// run, so the maximum over anchors equals the maximum over runs.
pub fn best_runs(board: &BTreeMap<Cell, Side>) -> [usize; 2] {
    let mut best = [0usize; 2];
    for (&cell, &owner) in board {
        let run = longest_run(board, cell, owner);
        if run > best[owner.idx()] {
            best[owner.idx()] = run;
        }
    }
    best
}

/// Steps away from `from` in direction `(dr, dc)`, counting consecutive
/// cells owned by `owner`. Stops at the first empty, hostile, or
/// out-of-board cell; cells beyond the board edge are simply absent from
/// the map, so only the 1-based lower bound needs an explicit guard.
fn walk(board: &BTreeMap<Cell, Side>, from: Cell, owner: Side, dr: i64, dc: i64) -> usize {
    let mut count = 0;
    let mut row = from.row as i64 + dr;
    let mut col = from.col as i64 + dc;
    while row >= 1
        && col >= 1
        && board.get(&Cell::new(row as usize, col as usize)) == Some(&owner)
    {
        count += 1;
        row += dr;
        col += dc;
    }
    count
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod lines_tests;
