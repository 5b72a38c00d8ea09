//! Terminal input module (board-facing).
//!
//! Maps `crossterm` mouse and key events into the board's discrete
//! [`crate::types::InputEvent`]s. Hit-testing from terminal cells to board
//! cells happens here, so the board only ever sees cell presses and releases.

pub mod handler;
pub mod map;

pub use match3_types as types;

pub use handler::PointerTracker;
pub use map::{cell_event, is_reset, should_quit, CellHitMap};
