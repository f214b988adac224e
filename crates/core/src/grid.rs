//! Grid module - the playfield of settled blocks
//!
//! The grid is a 10x20 buffer of color indices (0 = empty, 1-7 = block).
//! Uses a flat row-major array: no allocation, dimensions never change.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! Bounds are total: any coordinate outside the grid counts as blocked, in
//! both axes, so a piece can never slip past the floor or a wall.

use arrayvec::ArrayVec;

use crate::piece::Matrix;
use crate::types::{Cell, EMPTY, GRID_HEIGHT, GRID_WIDTH, MAX_COLOR};

const W: usize = GRID_WIDTH as usize;
const H: usize = GRID_HEIGHT as usize;

/// Total number of cells on the grid
const GRID_SIZE: usize = W * H;

/// Row indices removed by one sweep, bottom to top.
pub type ClearedRows = ArrayVec<usize, H>;

/// The playfield - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Row-major cells (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; GRID_SIZE],
        }
    }

    /// Build a grid from explicit rows.
    ///
    /// Values above the largest color index are stored as empty.
    pub fn from_rows(rows: &[[Cell; W]; H]) -> Self {
        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                grid.cells[y * W + x] = if cell <= MAX_COLOR { cell } else { EMPTY };
            }
        }
        grid
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * W + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds or `cell` is not a valid color index
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if cell > MAX_COLOR {
            return false;
        }
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and holding a block
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Occupied, or outside the grid
    pub fn is_blocked(&self, x: i8, y: i8) -> bool {
        !matches!(self.get(x, y), Some(EMPTY))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Check if a row has no empty cell
    pub fn is_row_complete(&self, y: usize) -> bool {
        if y >= H {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    /// Borrow one row. Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * W..(y + 1) * W]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(W)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Remove row `y`: every row above moves down one and an empty row
    /// appears at the top.
    /// Returns false if `y` is out of range.
    pub fn clear_row(&mut self, y: usize) -> bool {
        if y >= H {
            return false;
        }
        // copy_within handles the overlapping ranges.
        self.cells.copy_within(0..y * W, W);
        self.insert_empty_row_at_top();
        true
    }

    /// Zero the top row. Only meaningful right after the rows below were
    /// shifted down by `clear_row`.
    fn insert_empty_row_at_top(&mut self) {
        self.cells[..W].fill(EMPTY);
    }

    /// Remove every complete row, scanning bottom to top.
    ///
    /// After a removal the same index holds what used to be the row above, so
    /// it is examined again before moving up. Returns the removed rows as
    /// indices into the grid as it was before the sweep.
    pub fn sweep(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut y = H;
        while y > 0 {
            let row = y - 1;
            if self.is_row_complete(row) {
                self.clear_row(row);
                cleared.push(row - cleared.len());
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Does `matrix` placed with its top-left corner at (x, y) overlap a
    /// block or leave the grid?
    pub fn collides(&self, matrix: &Matrix, x: i8, y: i8) -> bool {
        matrix
            .occupied()
            .any(|(dx, dy, _)| self.is_blocked(x + dx, y + dy))
    }

    /// Write every nonzero cell of `matrix` at (x, y) into the grid.
    ///
    /// Cells that fall outside the grid are skipped; returns false if any did.
    pub fn merge(&mut self, matrix: &Matrix, x: i8, y: i8) -> bool {
        let mut all_in = true;
        for (dx, dy, color) in matrix.occupied() {
            all_in &= self.set(x + dx, y + dy, color);
        }
        all_in
    }

    /// Set every cell to `value`.
    /// Returns false (and changes nothing) if `value` is not a valid color index
    pub fn fill(&mut self, value: Cell) -> bool {
        if value > MAX_COLOR {
            return false;
        }
        self.cells.fill(value);
        true
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Count of nonzero cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Copy into a fixed 2D array (snapshot/render format)
    pub fn write_rows(&self, out: &mut [[Cell; W]; H]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
