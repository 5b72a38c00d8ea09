//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behaviour beyond conversions, so they can be
//! shared by the board engine, input mapping, and any render sink.
//!
//! # Coordinates
//!
//! Cells are addressed by `(x, y)` with `x` growing to the right and `y` growing
//! **upwards**: row 0 is the bottom row, which is where pieces come to rest when
//! the board compacts.
//!
//! # Default Tuning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_MINIMUM_TOUCH_LIMIT` | 3 | Shortest chain that clears on release |
//! | `DEFAULT_MIN_WEIGHT_THRESHOLD` | 5.0 | Lowest allowed spawn weight |
//! | `DEFAULT_MAX_WEIGHT_THRESHOLD` | 100.0 | Upper bound of the chance roll |
//! | `DEFAULT_START_POSITION` | 200.0 | Fall offset for spawned pieces |
//! | `DEFAULT_TOUCH_SCALE_FACTOR` | 2.0 | Shrink applied to a selected piece |
//! | `DEFAULT_ANIMATION_SPEED` | 10.0 | Units per frame for stepped falls |
//!
//! # Examples
//!
//! ```
//! use match3_types::{Coord, Direction};
//!
//! let from = Coord::new(1, 1);
//! let to = Coord::new(2, 0);
//! assert!(from.is_adjacent(to));
//! assert_eq!(Direction::between(from, to), Some(Direction::DownRight));
//! assert_eq!(Direction::DownRight.code(), 5);
//! ```

use serde::{Deserialize, Serialize};

/// Shortest chain that is cleared on release.
pub const DEFAULT_MINIMUM_TOUCH_LIMIT: usize = 3;

/// Lowest spawn weight a piece type may declare.
pub const DEFAULT_MIN_WEIGHT_THRESHOLD: f32 = 5.0;

/// Upper bound of the chance roll used by weighted draws.
pub const DEFAULT_MAX_WEIGHT_THRESHOLD: f32 = 100.0;

/// Offset above its resting place from which a spawned piece falls.
pub const DEFAULT_START_POSITION: f32 = 200.0;

/// Scale reduction applied while a piece is selected.
pub const DEFAULT_TOUCH_SCALE_FACTOR: f32 = 2.0;

/// Distance covered per frame by stepped fall animations.
pub const DEFAULT_ANIMATION_SPEED: f32 = 10.0;

/// A cell address on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev (king-move) distance between two cells.
    pub fn chebyshev(self, other: Coord) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }

    /// True when `other` is one of the 8 neighbours of `self`.
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.chebyshev(other) == 1
    }

    pub fn offset(self, dx: i32, dy: i32) -> Coord {
        Coord::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}

/// Index of a piece type inside the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceTypeId(pub u16);

impl PieceTypeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Opaque handle for a spawned piece. Never reused within one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

/// Compass direction a piece was touched from.
///
/// Codes are stable and match the render hint protocol:
///
/// | Code | Direction |
/// |------|-----------|
/// | 0 | Reset (deselected) |
/// | 1 | Initial touch |
/// | 2 | Down |
/// | 3 | Left |
/// | 4 | Lower left |
/// | 5 | Lower right |
/// | 6 | Right |
/// | 7 | Up |
/// | 8 | Upper left |
/// | 9 | Upper right |
///
/// The direction names the drag movement: `Down` means the new piece lies
/// directly below the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Reset,
    Initial,
    Down,
    Left,
    DownLeft,
    DownRight,
    Right,
    Up,
    UpLeft,
    UpRight,
}

impl Direction {
    /// The 8 compass directions in lookup order.
    pub const COMPASS: [Direction; 8] = [
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
    ];

    /// Numeric render hint code.
    pub fn code(self) -> u8 {
        match self {
            Direction::Reset => 0,
            Direction::Initial => 1,
            Direction::Down => 2,
            Direction::Left => 3,
            Direction::DownLeft => 4,
            Direction::DownRight => 5,
            Direction::Right => 6,
            Direction::Up => 7,
            Direction::UpLeft => 8,
            Direction::UpRight => 9,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Direction::Reset),
            1 => Some(Direction::Initial),
            2 => Some(Direction::Down),
            3 => Some(Direction::Left),
            4 => Some(Direction::DownLeft),
            5 => Some(Direction::DownRight),
            6 => Some(Direction::Right),
            7 => Some(Direction::Up),
            8 => Some(Direction::UpLeft),
            9 => Some(Direction::UpRight),
            _ => None,
        }
    }

    /// Movement `(dx, dy)` for compass directions. `None` for `Reset`/`Initial`.
    pub fn delta(self) -> Option<(i32, i32)> {
        match self {
            Direction::Down => Some((0, -1)),
            Direction::Left => Some((-1, 0)),
            Direction::DownLeft => Some((-1, -1)),
            Direction::DownRight => Some((1, -1)),
            Direction::Right => Some((1, 0)),
            Direction::Up => Some((0, 1)),
            Direction::UpLeft => Some((-1, 1)),
            Direction::UpRight => Some((1, 1)),
            Direction::Reset | Direction::Initial => None,
        }
    }

    /// Direction of the drag from `from` to `to`, if they are neighbours.
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        Self::COMPASS
            .iter()
            .copied()
            .find(|d| d.delta() == Some((dx, dy)))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Reset => "reset",
            Direction::Initial => "initial",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::DownLeft => "down_left",
            Direction::DownRight => "down_right",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::UpLeft => "up_left",
            Direction::UpRight => "up_right",
        }
    }
}

/// Discrete input delivered to the board.
///
/// Hit-testing (screen position to cell) happens before this point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown { x: i32, y: i32 },
    PointerUp,
}

/// Intent emitted by the board for a render sink.
///
/// The board never waits on these; a sink queues or interrupts its own
/// animations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RenderEvent {
    /// A piece was created. `fall_from` is the vertical offset it should fall
    /// from; `None` means it appears in place.
    PieceSpawned {
        id: PieceId,
        cell: Coord,
        piece_type: PieceTypeId,
        fall_from: Option<f32>,
    },
    PieceSelected {
        cell: Coord,
        direction: Direction,
    },
    /// Always carries [`Direction::Reset`].
    PieceDeselected {
        cell: Coord,
        direction: Direction,
    },
    PieceCleared {
        id: PieceId,
        cell: Coord,
    },
    /// A piece fell within `column` from row `from_y` to row `to_y`.
    PieceMoved {
        id: PieceId,
        column: i32,
        from_y: i32,
        to_y: i32,
    },
    /// Every piece not of `piece_type` is now external.
    ExternalsMarked {
        piece_type: PieceTypeId,
    },
    ExternalsUnmarked,
}
