//! Board module - manages the game grid
//!
//! The board is a `width` x `height` grid (10x20 by default) where each cell is
//! either empty or filled with the kind of the piece that locked there.
//! Cells live in a flat row-major vector allocated once per game.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//!
//! Reads are forgiving (anything outside the grid reads as "not occupied"), writes
//! are not: the engine validates every coordinate through the collision check
//! first, so an out-of-bounds write is a bug and panics.

use crate::config::MAX_BOARD_SIDE;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty 10x20 board
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create a new empty board of the given size
    ///
    /// Both sides must be in `1..=MAX_BOARD_SIDE`; coordinates are `i8`.
    pub fn with_size(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero");
        assert!(
            width <= MAX_BOARD_SIDE && height <= MAX_BOARD_SIDE,
            "board side exceeds {}: {}x{}",
            MAX_BOARD_SIDE,
            width,
            height
        );
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    #[inline]
    fn index_or_panic(&self, x: i8, y: i8) -> usize {
        match self.index(x, y) {
            Some(idx) => idx,
            None => panic!(
                "board access out of bounds: ({}, {}) on a {}x{} board",
                x, y, self.width, self.height
            ),
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if position is occupied (within bounds and filled)
    ///
    /// Positions outside the grid are not occupied; walls and floor are the
    /// collision engine's business.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Filled(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8
    }

    /// Fill cell (x, y) with a piece kind
    ///
    /// # Panics
    ///
    /// If (x, y) is outside the grid.
    pub fn set_cell(&mut self, x: i8, y: i8, kind: PieceKind) {
        let idx = self.index_or_panic(x, y);
        self.cells[idx] = Cell::Filled(kind);
    }

    /// Empty cell (x, y)
    ///
    /// # Panics
    ///
    /// If (x, y) is outside the grid.
    pub fn clear_cell(&mut self, x: i8, y: i8) {
        let idx = self.index_or_panic(x, y);
        self.cells[idx] = Cell::Empty;
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_filled())
    }

    /// Check if a row has no filled cell
    pub fn is_row_empty(&self, y: usize) -> bool {
        y < self.height as usize && self.row(y).iter().all(|cell| cell.is_empty())
    }

    /// Remove row `y`, shift every row above it down by one and insert an empty
    /// row at the top
    ///
    /// # Panics
    ///
    /// If `y` is not a board row.
    pub fn remove_row(&mut self, y: usize) {
        assert!(
            y < self.height as usize,
            "remove_row out of bounds: row {} on a board of height {}",
            y,
            self.height
        );

        let width = self.width as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        for cell in &mut self.cells[..width] {
            *cell = Cell::Empty;
        }
    }

    /// Cells of row `y`, left to right
    ///
    /// # Panics
    ///
    /// If `y` is not a board row.
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.width as usize;
        let start = y * width;
        &self.cells[start..start + width]
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width as usize)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_filled()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::Empty;
        }
    }

    /// Write the board as a grid of kind codes (0 = empty)
    pub fn to_code_grid(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.code()).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
