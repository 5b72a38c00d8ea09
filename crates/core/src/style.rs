//! Piece capability styles.
//!
//! A render sink decides how a piece reacts to selection and how it falls.
//! Both behaviours are plain values chosen by configuration, either for the
//! whole board or per piece type.

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_ANIMATION_SPEED, DEFAULT_TOUCH_SCALE_FACTOR};

/// How a piece looks while it is part of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TouchStyle {
    /// Shrink by `factor` while selected.
    Shrink { factor: f32 },
    /// No visual change.
    Static,
}

impl Default for TouchStyle {
    fn default() -> Self {
        TouchStyle::Shrink {
            factor: DEFAULT_TOUCH_SCALE_FACTOR,
        }
    }
}

impl TouchStyle {
    /// Scale to draw a piece at, given its resting scale.
    pub fn scale_for(self, base: f32, selected: bool) -> f32 {
        match self {
            TouchStyle::Shrink { factor } if selected => base - factor,
            _ => base,
        }
    }
}

/// How a falling piece approaches its destination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimationStrategy {
    /// Move down by `speed` each frame.
    Step { speed: f32 },
    /// Jump straight to the destination.
    Snap,
}

impl Default for AnimationStrategy {
    fn default() -> Self {
        AnimationStrategy::Step {
            speed: DEFAULT_ANIMATION_SPEED,
        }
    }
}

/// One frame of a fall animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationStep {
    pub position: f32,
    pub finished: bool,
}

impl AnimationStrategy {
    /// Advance a fall from `current` towards `dest` (below it) by one frame.
    ///
    /// The final frame lands exactly on `dest`. A non-positive speed snaps.
    pub fn advance(self, current: f32, dest: f32) -> AnimationStep {
        let next = match self {
            AnimationStrategy::Step { speed } if speed > 0.0 => current - speed,
            _ => dest,
        };
        if next <= dest {
            AnimationStep {
                position: dest,
                finished: true,
            }
        } else {
            AnimationStep {
                position: next,
                finished: false,
            }
        }
    }
}

/// Effective style of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PieceStyle {
    pub touch: TouchStyle,
    pub animation: AnimationStrategy,
}
