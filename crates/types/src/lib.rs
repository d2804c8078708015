//! Shared data types and constants
//!
//! Pure data structures with no I/O dependencies, usable from the simulation
//! core, the terminal frontend, and tests alike.
//!
//! # Board Dimensions
//!
//! - **Columns**: 12 (indexed 0-11)
//! - **Rows**: 26 total, of which the topmost 4 are a hidden spawn buffer
//!   that is never rendered. The visible play field is 22 rows.
//! - **Spawn position**: (4, 0), the top-left corner of the piece's 4x4 box.
//!
//! # Timing and Progression
//!
//! The gravity period is a step function of cumulative score. A fresh game
//! starts at level 1 with a 500ms period; [`SPEED_CURVE`] lists the
//! score thresholds at which the level rises and the period shrinks.

use thiserror::Error;

/// Board width in cells.
pub const BOARD_COLUMNS: usize = 12;
/// Board height in cells, including the hidden spawn buffer.
pub const BOARD_ROWS: usize = 26;
/// Rows at the top of the grid reserved for spawning; never rendered.
pub const BUFFER_ROWS: usize = 4;
/// Rows shown on the play field.
pub const VISIBLE_ROWS: usize = BOARD_ROWS - BUFFER_ROWS;
/// Side length of the next-piece preview surface.
pub const PREVIEW_SIZE: usize = 4;

/// Spawn position for a fresh piece (top-left of its 4x4 box).
pub const SPAWN_X: i8 = 4;
pub const SPAWN_Y: i8 = 0;

/// Gravity period at level 1, in milliseconds.
pub const BASE_TICK_MS: u64 = 500;

/// Points awarded per simultaneous line clear, indexed by lines cleared.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Level/speed thresholds: `(minimum score, level, gravity period ms)`,
/// ordered from highest threshold to lowest. Scores below every threshold
/// stay at level 1 with [`BASE_TICK_MS`].
pub const SPEED_CURVE: [(u32, u32, u64); 6] = [
    (12_000, 7, 100),
    (9_000, 6, 150),
    (6_000, 5, 200),
    (4_500, 4, 250),
    (3_000, 3, 350),
    (1_500, 2, 400),
];

/// Errors raised by the simulation core.
///
/// Gameplay itself never fails: illegal moves are silent no-ops and topping
/// out is a state transition. Only malformed construction input is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid shape index {0}, expected 0..=6")]
    InvalidShape(u8),
}

/// The seven tetromino shapes, in canonical index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    S,
    O,
    J,
    Z,
    L,
    T,
}

impl Shape {
    /// All shapes, ordered by index.
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::S,
        Shape::O,
        Shape::J,
        Shape::Z,
        Shape::L,
        Shape::T,
    ];

    /// Validate and convert a raw shape index.
    ///
    /// This is the only construction path that can fail; callers holding a
    /// `Shape` value never need to re-validate during simulation.
    pub fn from_index(index: u8) -> Result<Self, GameError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(GameError::InvalidShape(index))
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Fixed display color, used for rendering and as the settled-cell
    /// fill value.
    pub fn color(&self) -> Color {
        match self {
            Shape::I => Color::Cyan,
            Shape::S => Color::Green,
            Shape::O => Color::Yellow,
            Shape::J => Color::Blue,
            Shape::Z => Color::Red,
            Shape::L => Color::Orange,
            Shape::T => Color::Magenta,
        }
    }
}

/// Block colors, one per shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Green,
    Yellow,
    Blue,
    Red,
    Orange,
    Magenta,
}

/// One of the four discrete orientations of a shape.
///
/// Rotation only ever steps forward (clockwise); there is no reverse action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Step one quarter turn clockwise.
    pub fn cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }
}

/// Player actions delivered to the simulation while a session is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RotateCw,
    MoveLeft,
    MoveRight,
    SoftDrop,
}

/// A board cell: empty, or settled with a block color.
pub type Cell = Option<Color>;
