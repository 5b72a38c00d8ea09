//! Match-3 board (workspace facade crate).
//!
//! Re-exports the member crates as `match3_board::{core, input, types}` and
//! hosts the event [`journal`] used by the `match3` demo binary.

pub mod journal;

pub use match3_core as core;
pub use match3_input as input;
pub use match3_types as types;

pub use journal::Journal;
