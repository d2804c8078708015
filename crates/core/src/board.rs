//! Board grid - settled cells, filled-row detection, and line compaction
//!
//! The grid is 26 rows by 12 columns stored as a flat array for cache
//! locality; the topmost 4 rows are the hidden spawn buffer. A cell goes
//! empty -> filled only when a piece locks, and filled -> empty only during
//! line-clear compaction.

use arrayvec::ArrayVec;

use quadris_types::{Cell, Color, BOARD_COLUMNS, BOARD_ROWS};

const GRID_SIZE: usize = BOARD_ROWS * BOARD_COLUMNS;

/// The settled-cell grid, row-major order (`row * BOARD_COLUMNS + col`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_ROWS as i8 || col < 0 || col >= BOARD_COLUMNS as i8 {
            return None;
        }
        Some((row as usize) * BOARD_COLUMNS + (col as usize))
    }

    pub fn rows(&self) -> usize {
        BOARD_ROWS
    }

    pub fn columns(&self) -> usize {
        BOARD_COLUMNS
    }

    /// Cell at `(row, col)`, or `None` if the position is out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|i| self.cells[i])
    }

    /// Whether `(row, col)` holds a settled block. Out of bounds reads false.
    pub fn filled(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Write a cell. Returns false if the position is out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Settle one block. Out-of-bounds writes are dropped, which is how
    /// lock clipping behaves at the board edges.
    pub fn settle(&mut self, row: i8, col: i8, color: Color) {
        self.set(row, col, Some(color));
    }

    /// Whether every column of `row` is occupied.
    pub fn is_row_filled(&self, row: usize) -> bool {
        if row >= BOARD_ROWS {
            return false;
        }
        let start = row * BOARD_COLUMNS;
        self.cells[start..start + BOARD_COLUMNS]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every filled row, returning the removed row indices in scan
    /// order (bottom to top).
    ///
    /// Scans upward from the bottom. Removing a row shifts everything above
    /// it down by one, so the scan index is held in place and re-examined:
    /// the row that just shifted in may itself be filled.
    pub fn clear_filled_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        let mut row = BOARD_ROWS;
        while row > 0 {
            let r = row - 1;
            if self.is_row_filled(r) {
                self.remove_row(r);
                cleared.push(r);
            } else {
                row -= 1;
            }
        }
        cleared
    }

    /// Shift all rows above `row` down by one; the topmost row becomes empty.
    fn remove_row(&mut self, row: usize) {
        debug_assert!(row < BOARD_ROWS);
        for r in (1..=row).rev() {
            let src = (r - 1) * BOARD_COLUMNS;
            let dst = r * BOARD_COLUMNS;
            self.cells.copy_within(src..src + BOARD_COLUMNS, dst);
        }
        for cell in &mut self.cells[..BOARD_COLUMNS] {
            *cell = None;
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(grid: &mut Grid, row: usize) {
        for col in 0..BOARD_COLUMNS {
            grid.set(row as i8, col as i8, Some(Color::Cyan));
        }
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new();
        assert!(grid.cells().iter().all(|c| c.is_none()));
        assert_eq!(grid.rows(), BOARD_ROWS);
        assert_eq!(grid.columns(), BOARD_COLUMNS);
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let grid = Grid::new();
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
        assert_eq!(grid.get(BOARD_ROWS as i8, 0), None);
        assert_eq!(grid.get(0, BOARD_COLUMNS as i8), None);
        assert_eq!(grid.get(0, 0), Some(None));
    }

    #[test]
    fn set_and_filled() {
        let mut grid = Grid::new();
        assert!(!grid.filled(10, 5));
        assert!(grid.set(10, 5, Some(Color::Red)));
        assert!(grid.filled(10, 5));
        assert!(!grid.set(-1, 0, Some(Color::Red)));
        assert!(!grid.filled(-1, 0));
    }

    #[test]
    fn row_filled_detection() {
        let mut grid = Grid::new();
        assert!(!grid.is_row_filled(25));

        fill_row(&mut grid, 25);
        assert!(grid.is_row_filled(25));

        grid.set(25, 0, None);
        assert!(!grid.is_row_filled(25));
    }

    #[test]
    fn clearing_one_row_shifts_everything_down() {
        let mut grid = Grid::new();
        fill_row(&mut grid, 25);
        grid.set(24, 3, Some(Color::Orange));

        let cleared = grid.clear_filled_rows();
        assert_eq!(cleared.as_slice(), &[25]);

        // The block above the cleared row lands one lower.
        assert_eq!(grid.get(25, 3), Some(Some(Color::Orange)));
        assert_eq!(grid.get(24, 3), Some(None));
        // Top row is blank.
        assert!((0..BOARD_COLUMNS).all(|c| grid.get(0, c as i8) == Some(None)));
    }

    #[test]
    fn clearing_four_rows_at_once() {
        let mut grid = Grid::new();
        for row in 22..26 {
            fill_row(&mut grid, row);
        }
        let cleared = grid.clear_filled_rows();
        assert_eq!(cleared.len(), 4);
        assert!(grid.cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn scan_reexamines_rows_shifted_into_place() {
        // Filled rows at 23 and 25, separated by a partial row at 24. After
        // removing row 25 the scan must stay at index 25 (now the old 24),
        // then find the old 23 when it reaches index 24.
        let mut grid = Grid::new();
        fill_row(&mut grid, 23);
        grid.set(24, 0, Some(Color::Blue));
        fill_row(&mut grid, 25);

        let cleared = grid.clear_filled_rows();
        assert_eq!(cleared.as_slice(), &[25, 24]);

        // Only the partial row survives, settled at the bottom.
        assert_eq!(grid.get(25, 0), Some(Some(Color::Blue)));
        assert!((1..BOARD_COLUMNS).all(|c| grid.get(25, c as i8) == Some(None)));
    }

    #[test]
    fn clear_resets_all_cells() {
        let mut grid = Grid::new();
        fill_row(&mut grid, 20);
        grid.clear();
        assert!(grid.cells().iter().all(|c| c.is_none()));
    }
}
