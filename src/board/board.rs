//! Board structure: cell colors plus the four boundary sets

use super::geometry::Grid;
use super::{Pos, Stone};
use crate::error::MoveError;

/// Game board
///
/// `make_move` is the only way to change a cell, and it only ever turns an
/// empty cell into a colored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    cells: Vec<Stone>,
    /// Row 0
    north: Vec<usize>,
    /// Row N-1
    south: Vec<usize>,
    /// Column 0
    west: Vec<usize>,
    /// Column N-1
    east: Vec<usize>,
}

impl Board {
    /// Create an empty board. Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        let grid = Grid::new(size);
        let last = size - 1;
        Self {
            grid,
            cells: vec![Stone::Empty; grid.cell_count()],
            north: (0..size).collect(),
            south: (0..size).map(|col| last * size + col).collect(),
            west: (0..size).map(|row| row * size).collect(),
            east: (0..size).map(|row| row * size + last).collect(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get stone at position (panics if off the board)
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[self.grid.to_index(pos)]
    }

    /// Get stone at a flat index (panics if off the board)
    #[inline]
    pub fn stone_at(&self, index: usize) -> Stone {
        self.cells[index]
    }

    #[inline]
    pub fn is_within_boundary(&self, pos: Pos) -> bool {
        self.grid.contains(pos)
    }

    /// On the board and still empty
    #[inline]
    pub fn is_available(&self, pos: Pos) -> bool {
        self.is_within_boundary(pos) && self.get(pos) == Stone::Empty
    }

    /// Color an empty cell.
    ///
    /// Leaves the board untouched on error. Placing `Stone::Empty` is a
    /// caller bug and panics.
    pub fn make_move(&mut self, pos: Pos, stone: Stone) -> Result<(), MoveError> {
        assert!(stone != Stone::Empty, "cannot place an empty stone");
        if !self.is_within_boundary(pos) {
            return Err(MoveError::OutOfBounds(pos));
        }
        let idx = self.grid.to_index(pos);
        if self.cells[idx] != Stone::Empty {
            return Err(MoveError::CellOccupied(pos));
        }
        self.cells[idx] = stone;
        Ok(())
    }

    /// Neighbors of a cell that currently hold `stone`, in direction order
    pub fn neighbors_of_color(&self, index: usize, stone: Stone) -> Vec<usize> {
        self.grid
            .neighbors(index)
            .filter(|&n| self.cells[n] == stone)
            .collect()
    }

    #[inline]
    pub fn north(&self) -> &[usize] {
        &self.north
    }

    #[inline]
    pub fn south(&self) -> &[usize] {
        &self.south
    }

    #[inline]
    pub fn west(&self) -> &[usize] {
        &self.west
    }

    #[inline]
    pub fn east(&self) -> &[usize] {
        &self.east
    }

    /// Iterate over empty cell positions in index order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == Stone::Empty)
            .map(|(idx, _)| self.grid.to_pos(idx))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&s| s != Stone::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(super::DEFAULT_BOARD_SIZE)
    }
}
