//! Piece geometry - shapes as fixed 4x4 bitmasks with rotation by index remap
//!
//! Each shape stores its rotation-0 occupancy once, as a 16-bit mask where
//! bit `n` covers local cell `(x, y)` with `n = x + 4*y`. Rotated lookups do
//! not move bits around; instead the index into the canonical mask is remapped
//! by a closed-form formula per rotation state, equivalent to repeated 90
//! degree rotation of a 4x4 matrix.

use quadris_types::{Color, GameError, Rotation, Shape, SPAWN_X, SPAWN_Y};

/// Build an occupancy mask from four row nibbles, most significant bit = x 0.
///
/// Lets the shape table below read like a picture of each piece.
const fn mask(rows: [u8; 4]) -> u16 {
    let mut m: u16 = 0;
    let mut y = 0;
    while y < 4 {
        let mut x = 0;
        while x < 4 {
            if rows[y] & (0b1000 >> x) != 0 {
                m |= 1 << (x + 4 * y);
            }
            x += 1;
        }
        y += 1;
    }
    m
}

/// Canonical (rotation 0) occupancy per shape, indexed by `Shape::index()`.
const SHAPE_MASKS: [u16; 7] = [
    // I
    mask([0b0100, 0b0100, 0b0100, 0b0100]),
    // S
    mask([0b0100, 0b0110, 0b0010, 0b0000]),
    // O
    mask([0b0000, 0b0110, 0b0110, 0b0000]),
    // J
    mask([0b0110, 0b0100, 0b0100, 0b0000]),
    // Z
    mask([0b0010, 0b0110, 0b0100, 0b0000]),
    // L
    mask([0b0110, 0b0010, 0b0010, 0b0000]),
    // T
    mask([0b0100, 0b1110, 0b0000, 0b0000]),
];

/// Whether `shape` occupies local cell `(x, y)` under the given rotation.
///
/// `x` and `y` must be in 0..4. Pure lookup; no failure modes.
pub fn occupies(shape: Shape, x: usize, y: usize, rotation: Rotation) -> bool {
    debug_assert!(x < 4 && y < 4);
    let n = match rotation {
        Rotation::North => x + 4 * y,
        Rotation::East => 12 - 4 * x + y,
        Rotation::South => 15 - x - 4 * y,
        Rotation::West => 3 + 4 * x - y,
    };
    SHAPE_MASKS[shape.index()] & (1 << n) != 0
}

/// The live falling piece.
///
/// `(x, y)` is the top-left of the piece's 4x4 bounding box in board
/// coordinates. Mutated in place by move/rotate/advance; replaced wholesale
/// when it locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub rotation: Rotation,
}

impl Piece {
    /// Create a piece at the spawn position in its canonical orientation.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            x: SPAWN_X,
            y: SPAWN_Y,
            rotation: Rotation::North,
        }
    }

    /// Create a piece from a raw shape index, validating it once here.
    pub fn from_index(index: u8) -> Result<Self, GameError> {
        Shape::from_index(index).map(Self::new)
    }

    /// Whether the piece occupies local cell `(x, y)` at its current rotation.
    pub fn occupies(&self, x: usize, y: usize) -> bool {
        occupies(self.shape, x, y, self.rotation)
    }

    pub fn color(&self) -> Color {
        self.shape.color()
    }

    /// Drop one row.
    pub fn advance(&mut self) {
        self.y += 1;
    }

    pub fn move_left(&mut self) {
        self.x -= 1;
    }

    pub fn move_right(&mut self) {
        self.x += 1;
    }

    /// Quarter turn clockwise; rotation only ever steps forward.
    pub fn rotate(&mut self) {
        self.rotation = self.rotation.cw();
    }
}
