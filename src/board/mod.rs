//! Board representation for Hex

pub mod board;
pub mod geometry;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;
pub use geometry::{CellClass, Corner, Direction, Grid, NEIGHBOR_OFFSETS};

/// Default board size (11x11, the classic Hex board)
pub const DEFAULT_BOARD_SIZE: usize = 11;

/// Stone colors
///
/// Blue moves first and joins the West and East columns.
/// Red joins the North and South rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    #[default]
    Empty,
    Blue,
    Red,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Blue => Stone::Red,
            Stone::Red => Stone::Blue,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Single-character symbol used by the text renderer
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Stone::Blue => 'B',
            Stone::Red => 'R',
            Stone::Empty => '.',
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Stone::Blue => "Blue",
            Stone::Red => "Red",
            Stone::Empty => "Empty",
        }
    }
}

/// Position on the board
///
/// Signed so that off-board input can be represented and rejected
/// instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Offset this position by a (row, col) delta
    #[inline]
    pub fn offset(self, (dr, dc): (i32, i32)) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
