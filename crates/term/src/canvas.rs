//! GridCanvas: a cell-grid [`Surface`] the simulation paints into.
//!
//! Pure (no I/O). The simulation stages cells with `set_cell_color` and
//! presents them with `redraw`; the runner composes presented canvases into
//! a framebuffer each frame.

use crate::core::Surface;
use crate::types::{Cell, BOARD_COLUMNS, PREVIEW_SIZE, VISIBLE_ROWS};

/// Staged cell colors plus a dirty flag raised by `redraw`.
#[derive(Debug, Clone)]
pub struct GridCanvas {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    presented: bool,
}

impl GridCanvas {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
            presented: false,
        }
    }

    /// Canvas sized for the visible play field.
    pub fn board() -> Self {
        Self::new(VISIBLE_ROWS, BOARD_COLUMNS)
    }

    /// Canvas sized for the next-piece preview.
    pub fn preview() -> Self {
        Self::new(PREVIEW_SIZE, PREVIEW_SIZE)
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.cells[row * self.columns + col]
    }

    /// Whether `redraw` ran since the last [`GridCanvas::take_presented`].
    pub fn take_presented(&mut self) -> bool {
        std::mem::take(&mut self.presented)
    }
}

impl Surface for GridCanvas {
    fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn set_cell_color(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.columns {
            self.cells[row * self.columns + col] = cell;
        }
    }

    fn redraw(&mut self) {
        self.presented = true;
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }
}
