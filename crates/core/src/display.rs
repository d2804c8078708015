//! Display boundary contracts
//!
//! The simulation paints into these traits every tick and on every accepted
//! input; it never reads pixel state back. The terminal implementation lives
//! in the `quadris-term` crate; headless no-op implementations here serve
//! tests and benches.

use quadris_types::{Cell, BOARD_COLUMNS, PREVIEW_SIZE, VISIBLE_ROWS};

/// A cell-colorable drawing surface with its own dimensions.
///
/// `set_cell_color` stages a cell; `redraw` presents the staged frame.
pub trait Surface {
    fn clear(&mut self);
    fn set_cell_color(&mut self, row: usize, col: usize, cell: Cell);
    fn redraw(&mut self);
    fn rows(&self) -> usize;
    fn columns(&self) -> usize;
}

/// Score/level labels and the terminal game-over signal.
pub trait Hud {
    /// Pushed after every score change and on session start.
    fn show_score(&mut self, score: u32, level: u32);
    /// Pushed once on the transition to game over.
    fn show_game_over(&mut self);
    /// Pushed on session start to drop a previous game-over message.
    fn clear_game_over(&mut self);
}

/// The set of display collaborators the simulation draws into.
pub struct Frontend<'a> {
    /// Visible play field, 22 rows by 12 columns.
    pub board: &'a mut dyn Surface,
    /// 4x4 next-piece preview.
    pub preview: &'a mut dyn Surface,
    pub hud: &'a mut dyn Hud,
}

/// Surface that swallows every paint call; reports fixed dimensions.
#[derive(Debug, Clone, Copy)]
pub struct NullSurface {
    rows: usize,
    columns: usize,
}

impl NullSurface {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Headless stand-in for the play field surface.
    pub fn board() -> Self {
        Self::new(VISIBLE_ROWS, BOARD_COLUMNS)
    }

    /// Headless stand-in for the next-piece preview.
    pub fn preview() -> Self {
        Self::new(PREVIEW_SIZE, PREVIEW_SIZE)
    }
}

impl Surface for NullSurface {
    fn clear(&mut self) {}
    fn set_cell_color(&mut self, _row: usize, _col: usize, _cell: Cell) {}
    fn redraw(&mut self) {}

    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }
}

/// Hud that drops every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHud;

impl Hud for NullHud {
    fn show_score(&mut self, _score: u32, _level: u32) {}
    fn show_game_over(&mut self) {}
    fn clear_game_over(&mut self) {}
}
