//! Core board logic - pure, deterministic, and testable
//!
//! This crate contains the match-3 board engine: piece catalog, grid,
//! selection chain and the clear/compact/refill resolution. It has **no I/O**:
//! rendering and input live behind the [`RenderSink`] and
//! [`types::InputEvent`] seams.
//!
//! - **Deterministic**: the same seed and input sequence produce the same board
//! - **Total**: runtime operations never fail; only configuration can be invalid
//! - **Synchronous**: every operation runs to completion before returning
//!
//! # Module Structure
//!
//! - [`board`]: the engine state machine (`Idle` -> `Selecting` -> `Resolving`)
//! - [`catalog`]: piece types and the weighted shuffle-then-scan draw
//! - [`chain`]: the touch-ordered selection chain
//! - [`config`]: configuration surface, JSON and environment loading
//! - [`grid`]: coordinate-keyed piece storage and column compaction
//! - [`layout`]: cell to render-space placement
//! - [`sink`]: render sink and match observer traits
//! - [`style`]: touch and fall animation capabilities
//!
//! # Example
//!
//! ```
//! use match3_core::{Board, BoardConfig, PieceTypeConfig, ReleaseOutcome};
//!
//! let mut config = BoardConfig::new(3, 3, vec![PieceTypeConfig::new("A", 100.0)]);
//! config.seed = Some(7);
//! let mut board = Board::new(config, Vec::new()).unwrap();
//!
//! board.press_cell(0, 0);
//! board.press_cell(0, 1);
//! board.press_cell(0, 2);
//!
//! match board.release_pointer() {
//!     ReleaseOutcome::Resolved(result) => {
//!         assert_eq!(result.name, "A");
//!         assert_eq!(result.count, 3);
//!     }
//!     other => panic!("expected a clear, got {:?}", other),
//! }
//! assert!(board.grid().is_full());
//! ```

pub mod board;
pub mod catalog;
pub mod chain;
pub mod config;
pub mod error;
pub mod grid;
pub mod layout;
pub mod rng;
pub mod sink;
pub mod snapshot;
pub mod style;

pub use match3_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, InputOutcome, MatchResult, Phase, PressOutcome, ReleaseOutcome};
pub use catalog::{Catalog, PieceType};
pub use chain::SelectionChain;
pub use config::{BoardConfig, PieceTypeConfig};
pub use error::ConfigError;
pub use grid::{Cell, Fall, Grid, Piece};
pub use layout::Layout;
pub use rng::{entropy_rng, seeded_rng, BoardRng};
pub use sink::{MatchObserver, NullSink, RenderSink};
pub use snapshot::BoardSnapshot;
pub use style::{AnimationStep, AnimationStrategy, PieceStyle, TouchStyle};
