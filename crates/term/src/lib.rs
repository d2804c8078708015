//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids TUI widget frameworks and instead renders into a
//! simple framebuffer that is flushed to the terminal as a full frame.
//!
//! The simulation paints through the `core` display seams: [`GridCanvas`]
//! receives board and preview cells, [`StatusHud`] receives score, level and
//! the game-over flag. [`GameScreen`] then composes both into a
//! [`FrameBuffer`] that [`TerminalRenderer`] flushes.

pub mod canvas;
pub mod fb;
pub mod hud;
pub mod renderer;
pub mod screen;

pub use quadris_core as core;
pub use quadris_types as types;

pub use canvas::GridCanvas;
pub use fb::{CellStyle, FrameBuffer, Rgb, TermCell};
pub use hud::StatusHud;
pub use renderer::TerminalRenderer;
pub use screen::{GameScreen, Viewport};
