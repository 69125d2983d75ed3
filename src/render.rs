//! Text rendering of the board in the odd-row offset layout
//!
//! Odd rows sit half a cell to the right, so every drawn link is a real
//! neighbor pair:
//!
//! ```text
//!  B - . - .
//!   \ / \ / \
//!    . - R - .
//!   / \ / \ /
//!  . - . - .
//! ```

use std::fmt;

use crate::board::{Board, Pos};

/// Width of one cell (` X ` plus the `-` link)
const CELL_WIDTH: usize = 4;

/// Column of a cell's symbol on its text line
#[inline]
fn symbol_column(row: usize, col: usize) -> usize {
    CELL_WIDTH * col + 1 + 2 * (row % 2)
}

/// Connector line between `row` and `row + 1`
fn connector_line(row: usize, size: usize) -> String {
    let mut line = vec![' '; CELL_WIDTH * size + 2];
    for col in 0..size {
        let x = symbol_column(row, col);
        if row % 2 == 0 {
            // lower-right is (row + 1, col), lower-left is (row + 1, col - 1)
            line[x + 1] = '\\';
            if col > 0 {
                line[x - 1] = '/';
            }
        } else {
            // lower-left is (row + 1, col), lower-right is (row + 1, col + 1)
            line[x - 1] = '/';
            if col + 1 < size {
                line[x + 1] = '\\';
            }
        }
    }
    let line: String = line.into_iter().collect();
    line.trim_end().to_string()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        for row in 0..size {
            let cells: Vec<String> = (0..size)
                .map(|col| {
                    let stone = self.get(Pos::new(row as i32, col as i32));
                    format!(" {} ", stone.symbol())
                })
                .collect();
            let indent = if row % 2 == 1 { 2 } else { 0 };
            writeln!(f, "{:indent$}{}", "", cells.join("-").trim_end(), indent = indent)?;

            if row + 1 != size {
                writeln!(f, "{}", connector_line(row, size))?;
            }
        }
        Ok(())
    }
}
