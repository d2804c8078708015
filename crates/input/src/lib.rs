//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into session-level [`map::KeyCommand`]s so the
//! runner never matches on raw key codes.

pub mod map;

pub use quadris_types as types;

pub use map::{handle_key_event, KeyCommand};
