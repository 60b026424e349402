//! Board module - the occupancy grid
//!
//! The board is a 10x20 grid where each cell is empty or holds a committed
//! [`Block`]. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). Row 0 is the top row, where pieces spawn.

use crate::types::{Block, Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if !Self::is_inside(x, y) {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Whether (x, y) lies on the grid
    #[inline]
    pub fn is_inside(x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Whether the cell at (x, y) holds a block.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the board. Check [`Board::is_inside`] first.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        match Self::index(x, y) {
            Some(idx) => self.cells[idx].is_some(),
            None => panic!("board query out of bounds: ({x}, {y})"),
        }
    }

    /// Collision query: inside the board and empty
    #[inline]
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Place a block at (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, block: Block) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = Some(block);
                true
            }
            None => false,
        }
    }

    /// Empty the cell at (x, y)
    /// Returns false if out of bounds
    pub fn clear(&mut self, x: i8, y: i8) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = None;
                true
            }
            None => false,
        }
    }

    /// Empty every cell
    pub fn reset(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < BOARD_HEIGHT as usize && self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Check if a row holds at least one block
    pub fn row_has_blocks(&self, y: usize) -> bool {
        self.row(y).iter().any(|cell| cell.is_some())
    }

    /// One row of cells, left to right. Empty slice if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        if y >= BOARD_HEIGHT as usize {
            return &[];
        }
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy row `src` over row `dst` (line clearing only)
    pub(crate) fn copy_row(&mut self, src: usize, dst: usize) {
        if src == dst {
            return;
        }
        let src_start = src * WIDTH;
        self.cells
            .copy_within(src_start..src_start + WIDTH, dst * WIDTH);
    }

    /// Empty one row (line clearing only)
    pub(crate) fn erase_row(&mut self, y: usize) {
        let start = y * WIDTH;
        for cell in &mut self.cells[start..start + WIDTH] {
            *cell = None;
        }
    }

    /// Render occupancy as text rows, `#` for blocks and `.` for empty cells.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(BOARD_SIZE + BOARD_HEIGHT as usize);
        for y in 0..BOARD_HEIGHT as usize {
            for cell in self.row(y) {
                out.push(if cell.is_some() { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
