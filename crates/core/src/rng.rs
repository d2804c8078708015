//! Random shape selection
//!
//! Every spawned piece draws its shape uniformly and independently from the
//! seven variants. The source is injected behind [`ShapeSource`] so tests
//! can fix the spawn sequence; the default implementation is a small LCG
//! (Numerical Recipes constants) that is deterministic per seed.

use quadris_types::Shape;

/// Supplies the shape for each newly spawned piece.
pub trait ShapeSource {
    fn next_shape(&mut self) -> Shape;
}

/// Simple LCG (Linear Congruential Generator) RNG.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Default uniform shape source, seedable for deterministic replays.
#[derive(Debug, Clone)]
pub struct PieceRng {
    rng: SimpleRng,
}

impl PieceRng {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Current RNG state, usable as a seed to replay from here.
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl ShapeSource for PieceRng {
    fn next_shape(&mut self) -> Shape {
        Shape::ALL[self.rng.next_range(Shape::ALL.len() as u32) as usize]
    }
}

/// Scripted shape source for tests; cycles through the given sequence.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    shapes: Vec<Shape>,
    at: usize,
}

impl SequenceSource {
    pub fn new(shapes: &[Shape]) -> Self {
        assert!(!shapes.is_empty(), "sequence must not be empty");
        Self {
            shapes: shapes.to_vec(),
            at: 0,
        }
    }
}

impl ShapeSource for SequenceSource {
    fn next_shape(&mut self) -> Shape {
        let shape = self.shapes[self.at];
        self.at = (self.at + 1) % self.shapes.len();
        shape
    }
}
