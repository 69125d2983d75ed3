//! Hex grid geometry in the odd-row offset layout
//!
//! Cells are stored row-major. Every odd row is drawn shifted half a cell
//! to the right, so the upper and lower neighbors of a cell depend on the
//! parity of its row:
//!
//! ```text
//!  0   1   2   3
//!    4   5   6   7
//!  8   9  10  11
//!   12  13  14  15
//! ```
//!
//! For a cell `n` the six directions are numbered clockwise from the right:
//!
//! ```text
//!   2   1
//! 3   n   0
//!   4   5
//! ```

use super::Pos;

/// (row, col) deltas for the six directions, indexed by `row % 2`.
///
/// Order: right, upper-right, upper-left, left, lower-left, lower-right.
pub const NEIGHBOR_OFFSETS: [[(i32, i32); 6]; 2] = [
    // even rows: the diagonals lean left
    [(0, 1), (-1, 0), (-1, -1), (0, -1), (1, -1), (1, 0)],
    // odd rows: the diagonals lean right
    [(0, 1), (-1, 1), (-1, 0), (0, -1), (1, 0), (1, 1)],
];

/// The six hex directions, in offset-table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    UpperRight,
    UpperLeft,
    Left,
    LowerLeft,
    LowerRight,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Right,
        Direction::UpperRight,
        Direction::UpperLeft,
        Direction::Left,
        Direction::LowerLeft,
        Direction::LowerRight,
    ];

    /// Column of this direction in [`NEIGHBOR_OFFSETS`]
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Board corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Boundary classification of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellClass {
    Corner(Corner),
    TopEdge,
    BottomEdge,
    LeftEdge,
    RightEdge,
    Interior,
}

/// Coordinate math for an N x N board
///
/// Stateless apart from the board size. Conversions panic on positions or
/// indices that are off the board: those are caller bugs, not user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self { size }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    #[inline]
    fn last(&self) -> i32 {
        self.size as i32 - 1
    }

    /// Check that both coordinates are in `[0, size)`
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        let n = self.size as i32;
        (0..n).contains(&pos.row) && (0..n).contains(&pos.col)
    }

    /// Row-major flat index of a position
    #[inline]
    pub fn to_index(&self, pos: Pos) -> usize {
        assert!(
            self.contains(pos),
            "position {} is off the {}x{} board",
            pos,
            self.size,
            self.size
        );
        pos.row as usize * self.size + pos.col as usize
    }

    /// Position of a flat index
    #[inline]
    pub fn to_pos(&self, index: usize) -> Pos {
        assert!(
            index < self.cell_count(),
            "cell index {} is off the {}x{} board",
            index,
            self.size,
            self.size
        );
        Pos::new((index / self.size) as i32, (index % self.size) as i32)
    }

    #[inline]
    pub fn is_top_row(&self, pos: Pos) -> bool {
        pos.row == 0
    }

    #[inline]
    pub fn is_bottom_row(&self, pos: Pos) -> bool {
        pos.row == self.last()
    }

    #[inline]
    pub fn is_left_column(&self, pos: Pos) -> bool {
        pos.col == 0
    }

    #[inline]
    pub fn is_right_column(&self, pos: Pos) -> bool {
        pos.col == self.last()
    }

    /// Not on any of the four board edges
    #[inline]
    pub fn is_interior(&self, pos: Pos) -> bool {
        !self.is_top_row(pos)
            && !self.is_bottom_row(pos)
            && !self.is_left_column(pos)
            && !self.is_right_column(pos)
    }

    #[inline]
    pub fn is_top_left_corner(&self, pos: Pos) -> bool {
        self.is_top_row(pos) && self.is_left_column(pos)
    }

    #[inline]
    pub fn is_top_right_corner(&self, pos: Pos) -> bool {
        self.is_top_row(pos) && self.is_right_column(pos)
    }

    #[inline]
    pub fn is_bottom_left_corner(&self, pos: Pos) -> bool {
        self.is_bottom_row(pos) && self.is_left_column(pos)
    }

    #[inline]
    pub fn is_bottom_right_corner(&self, pos: Pos) -> bool {
        self.is_bottom_row(pos) && self.is_right_column(pos)
    }

    #[inline]
    pub fn is_corner(&self, pos: Pos) -> bool {
        self.is_top_left_corner(pos)
            || self.is_top_right_corner(pos)
            || self.is_bottom_left_corner(pos)
            || self.is_bottom_right_corner(pos)
    }

    /// Classify a position by the board edges it touches.
    ///
    /// Corners win over edges; on a 1x1 board the only cell is `TopLeft`.
    pub fn classify(&self, pos: Pos) -> CellClass {
        assert!(self.contains(pos), "position {} is off the board", pos);
        if self.is_top_left_corner(pos) {
            CellClass::Corner(Corner::TopLeft)
        } else if self.is_top_right_corner(pos) {
            CellClass::Corner(Corner::TopRight)
        } else if self.is_bottom_left_corner(pos) {
            CellClass::Corner(Corner::BottomLeft)
        } else if self.is_bottom_right_corner(pos) {
            CellClass::Corner(Corner::BottomRight)
        } else if self.is_top_row(pos) {
            CellClass::TopEdge
        } else if self.is_bottom_row(pos) {
            CellClass::BottomEdge
        } else if self.is_left_column(pos) {
            CellClass::LeftEdge
        } else if self.is_right_column(pos) {
            CellClass::RightEdge
        } else {
            CellClass::Interior
        }
    }

    /// The six offsets for a row, selected by its parity
    #[inline]
    pub fn neighbor_offsets(row: i32) -> &'static [(i32, i32); 6] {
        &NEIGHBOR_OFFSETS[row.rem_euclid(2) as usize]
    }

    /// Adjacent position in one direction, if it is on the board
    #[inline]
    pub fn neighbor(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        let next = pos.offset(Self::neighbor_offsets(pos.row)[dir.index()]);
        self.contains(next).then_some(next)
    }

    /// In-bounds neighbor indices of a cell, in direction order.
    ///
    /// Corner cells get 2 or 3, top/bottom edge cells 4, left/right edge
    /// cells 3 or 5 depending on row parity, interior cells 6.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let pos = self.to_pos(index);
        Self::neighbor_offsets(pos.row)
            .iter()
            .map(move |&delta| pos.offset(delta))
            .filter(move |&p| self.contains(p))
            .map(move |p| self.to_index(p))
    }
}
