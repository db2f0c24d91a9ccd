//! Game configuration and the immutable state model.
//!
//! A [`State`] is a value: applying a move never mutates it, every transition
//! builds a fresh state from the old one plus a single placed piece. Equality
//! and hashing are structural (ordered cell map), so states reached through
//! different move orders compare equal whenever the resulting boards match.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::lines;
use crate::types::{Cell, Outcome, Side};

/// A move that violates the rules. Always a caller bug, never normal play.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("no such column: {0}")]
    NoSuchColumn(usize),
    #[error("column {0} is full")]
    ColumnFull(usize),
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
    #[error("the game is already over")]
    GameOver,
}

/// Board geometry and win condition, fixed for the lifetime of a game.
///
/// `win_length <= max(rows, cols)` is recommended (a longer target makes
/// every game a draw) but not enforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    pub rows: usize,
    pub cols: usize,
    pub win_length: usize,
}

impl Game {
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0 && win_length > 0);
        Self {
            rows,
            cols,
            win_length,
        }
    }

    /// Standard 6x7 board, four in a row to win.
    pub fn connect_four() -> Self {
        Self::new(6, 7, 4)
    }

    /// Empty board, first player to move.
    pub fn initial(&self) -> State {
        State {
            game: *self,
            to_move: Side::First,
            outcome: Outcome::Undecided,
            board: BTreeMap::new(),
        }
    }

    /// Applies a sequence of columns from the initial state. Test convenience.
    pub fn replay(&self, columns: &[usize]) -> Result<State, IllegalMove> {
        let mut state = self.initial();
        for &col in columns {
            state = state.apply(col)?;
        }
        Ok(state)
    }
}

/// One snapshot of a game in progress.
///
/// `outcome` is the result produced by the most recent move, never a
/// recomputation over the whole board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct State {
    pub game: Game,
    pub to_move: Side,
    pub outcome: Outcome,
    pub board: BTreeMap<Cell, Side>,
}

impl State {
    /// Columns with remaining capacity, ascending. Empty once the game is
    /// decided or the board is full.
    pub fn legal_moves(&self) -> Vec<usize> {
        let cols = if self.outcome.is_decided() {
            0
        } else {
            self.game.cols
        };
        (1..=cols)
            .filter(|&col| self.drop_cell(col).is_some())
            .collect()
    }

    /// Applies a drop into `col`, producing the successor state.
    ///
    /// The piece lands on row `rows - (pieces already in the column)`, the
    /// lowest unoccupied row. Fails when the column does not exist, has no
    /// capacity, or the game is already decided.
    pub fn apply(&self, col: usize) -> Result<State, IllegalMove> {
        if self.outcome.is_decided() {
            return Err(IllegalMove::GameOver);
        }
        if col < 1 || col > self.game.cols {
            return Err(IllegalMove::NoSuchColumn(col));
        }
        let cell = self.drop_cell(col).ok_or(IllegalMove::ColumnFull(col))?;
        if self.board.contains_key(&cell) {
            // Unreachable from legal play; a hit means the board map is corrupt.
            return Err(IllegalMove::CellOccupied {
                row: cell.row,
                col: cell.col,
            });
        }
        Ok(self.child(cell))
    }

    /// Iterates `(column, successor)` pairs in ascending column order.
    ///
    /// Successors are built lazily, so callers that stop early (alpha-beta
    /// cutoffs) never pay for the states they skip.
    pub fn successors(&self) -> impl Iterator<Item = (usize, State)> + '_ {
        let cols = if self.outcome.is_decided() {
            0
        } else {
            self.game.cols
        };
        (1..=cols).filter_map(move |col| self.drop_cell(col).map(|cell| (col, self.child(cell))))
    }

    /// True once the game is decided or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_decided() || self.board.len() == self.game.rows * self.game.cols
    }

    /// +1 if `side` won, -1 if the opponent won, 0 for a draw or an
    /// undecided position.
    pub fn value_for(&self, side: Side) -> i32 {
        match self.outcome.winner() {
            Some(winner) if winner == side => 1,
            Some(_) => -1,
            None => 0,
        }
    }

    /// Number of pieces already dropped into `col`.
    pub fn column_height(&self, col: usize) -> usize {
        self.board.keys().filter(|cell| cell.col == col).count()
    }

    /// Landing cell for a drop into `col`, or `None` when the column is
    /// outside the board or full.
    fn drop_cell(&self, col: usize) -> Option<Cell> {
        if col < 1 || col > self.game.cols {
            return None;
        }
        let filled = self.column_height(col);
        if filled >= self.game.rows {
            return None;
        }
        Some(Cell::new(self.game.rows - filled, col))
    }

    /// Successor with the current mover's piece placed on `cell`.
    fn child(&self, cell: Cell) -> State {
        let mover = self.to_move;
        let mut board = self.board.clone();
        board.insert(cell, mover);
        let outcome = compute_outcome(&board, cell, mover, self.game.win_length);
        State {
            game: self.game,
            to_move: mover.other(),
            outcome,
            board,
        }
    }
}

/// Outcome produced by placing `owner`'s piece on `placed`.
///
/// Only the four lines through the placed cell are examined. A full-board
/// rescan would be both slower and wrong: it could attribute a win to a line
/// that was completed by an earlier, already-scored move.
pub fn compute_outcome(
    board: &BTreeMap<Cell, Side>,
    placed: Cell,
    owner: Side,
    win_length: usize,
) -> Outcome {
    let runs = lines::run_lengths(board, placed, owner);
    if runs.iter().any(|&run| run >= win_length) {
        Outcome::win_for(owner)
    } else {
        Outcome::Undecided
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
