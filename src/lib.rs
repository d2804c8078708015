//! Quadris (workspace facade crate).
//!
//! This package keeps the `quadris::{core,input,term,types}` public API
//! stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use quadris_core as core;
pub use quadris_input as input;
pub use quadris_term as term;
pub use quadris_types as types;
