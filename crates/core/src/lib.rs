//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Scriptable piece sequences and recordable display seams
//! - **Portable**: Can run in any environment (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`board`]: 26x12 settled grid (4 hidden spawn rows) with line clearing
//! - [`display`]: [`Surface`] and [`Hud`] seams the simulation paints through
//! - [`game`]: the timer-driven session state machine
//! - [`piece`]: tetromino shapes as 4x4 bitmasks with index-remap rotation
//! - [`rng`]: seedable uniform shape source, plus a scripted one for tests
//! - [`scoring`]: line scores and the score-driven speed curve
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each spawn draws any of the 7 shapes with equal
//!   probability; no bag
//! - **Simple rotation**: clockwise only, no wall kicks; a blocked rotation
//!   is silently rejected
//! - **Gravity**: one row per tick; the tick period shrinks as the score
//!   crosses the speed-curve thresholds
//! - **Top-out**: a piece locking inside the hidden spawn rows ends the
//!   session
//!
//! # Example
//!
//! ```
//! use quadris_core::display::{Frontend, NullHud, NullSurface};
//! use quadris_core::Game;
//! use quadris_types::Action;
//!
//! let mut board = NullSurface::board();
//! let mut preview = NullSurface::preview();
//! let mut hud = NullHud;
//! let mut frontend = Frontend {
//!     board: &mut board,
//!     preview: &mut preview,
//!     hud: &mut hud,
//! };
//!
//! let mut game = Game::new(12345);
//! game.start(&mut frontend);
//! game.handle_input(Action::MoveLeft, &mut frontend);
//! game.tick(&mut frontend);
//! assert!(game.is_running());
//! ```
//!
//! # Timing
//!
//! The host owns the gravity timer: call [`Game::tick`] whenever
//! [`Game::tick_interval`] elapses, and re-arm the timer from that value
//! after every tick since a line clear may change the period.

pub mod board;
pub mod display;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;

pub use quadris_types as types;

// Re-export commonly used types for convenience
pub use board::Grid;
pub use display::{Frontend, Hud, NullHud, NullSurface, Surface};
pub use game::{Game, Phase};
pub use piece::Piece;
pub use rng::{PieceRng, SequenceSource, ShapeSource, SimpleRng};
pub use scoring::{score_for_lines, speed_for_score, SpeedStep};
