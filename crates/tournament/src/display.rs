//! Text rendering for board states
//!
//! Row 1 prints first, so the grid reads the way the board stands: pieces
//! fall toward the bottom line. A column index footer shows the move names.

use connect_core::{Cell, State};

/// Render the board as an ASCII grid, one row per line.
pub fn render(state: &State) -> String {
    let mut out = String::new();
    for row in 1..=state.game.rows {
        for col in 1..=state.game.cols {
            if col > 1 {
                out.push(' ');
            }
            match state.board.get(&Cell::new(row, col)) {
                Some(side) => out.push(side.glyph()),
                None => out.push('.'),
            }
        }
        out.push('\n');
    }
    for col in 1..=state.game.cols {
        if col > 1 {
            out.push(' ');
        }
        out.push_str(&col.to_string());
    }
    out.push('\n');
    out
}

/// Print the rendered board to stdout.
pub fn print_board(state: &State) {
    println!("{}", render(state));
}
