//! Game rules for driving the heuristic from a game runner
//!
//! These work on the raw board the heuristic consumes: column-major, each
//! column listed top to bottom, so a dropped disc fills the highest index
//! that is still empty.

use crate::board::{Axis, Direction, Disc};

/// Standard board width
pub const COLUMNS: usize = 7;
/// Standard board height
pub const ROWS: usize = 6;
/// Discs in a row needed to win
pub const CONNECT: usize = 4;

/// Fresh raw board
pub fn empty_board(cols: usize, rows: usize) -> Vec<Vec<Disc>> {
    vec![vec![Disc::Empty; rows]; cols]
}

/// Columns that can still take a disc, left to right
pub fn available_columns(board: &[Vec<Disc>]) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|(_, column)| column.first().is_some_and(|d| d.is_empty()))
        .map(|(col, _)| col)
        .collect()
}

/// Raw row a disc dropped into `col` would land on.
///
/// `None` when the column is full or off the board.
pub fn landing_row(board: &[Vec<Disc>], col: usize) -> Option<usize> {
    board.get(col)?.iter().rposition(|d| d.is_empty())
}

/// Drop `disc` into `col`; returns the raw row index it landed on
pub fn drop_disc(board: &mut [Vec<Disc>], col: usize, disc: Disc) -> Option<usize> {
    let row = landing_row(board, col)?;
    board[col][row] = disc;
    Some(row)
}

/// Line of at least [`CONNECT`] discs through (col, raw row), if any.
///
/// Positions are (col, raw row) pairs ordered along the line.
pub fn winning_line(board: &[Vec<Disc>], col: usize, row: usize) -> Option<Vec<(usize, usize)>> {
    let disc = *board.get(col)?.get(row)?;
    if disc.is_empty() {
        return None;
    }

    let owned = |c: i32, r: i32| -> bool {
        c >= 0
            && r >= 0
            && board
                .get(c as usize)
                .and_then(|column| column.get(r as usize))
                .is_some_and(|&d| d == disc)
    };

    for axis in Axis::ALL {
        let [back, forward] = axis.directions();
        let mut line = vec![(col, row)];
        for (dir, at_front) in [(back, true), (forward, false)] {
            let (dc, dr) = raw_step(dir);
            let (mut c, mut r) = (col as i32 + dc, row as i32 + dr);
            while owned(c, r) {
                if at_front {
                    line.insert(0, (c as usize, r as usize));
                } else {
                    line.push((c as usize, r as usize));
                }
                c += dc;
                r += dr;
            }
        }

        if line.len() >= CONNECT {
            return Some(line);
        }
    }

    None
}

/// Column/row step in raw orientation, where rows count downward
fn raw_step(dir: Direction) -> (i32, i32) {
    let (dc, dr) = dir.delta();
    (dc, -dr)
}

/// True when no column can take another disc
pub fn is_full(board: &[Vec<Disc>]) -> bool {
    available_columns(board).is_empty()
}
