//! Configuration errors.
//!
//! Runtime board operations are total and never fail; everything that can go
//! wrong is caught while loading and validating configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board has no piece types defined")]
    EmptyCatalog,

    #[error("catalog holds {0} piece types, more than a board can index")]
    TooManyTypes(usize),

    #[error("minimum weight threshold must be greater than 0 (got {0})")]
    NonPositiveThreshold(f32),

    #[error("weight thresholds must be finite (got {min}..={max})")]
    NonFiniteThreshold { min: f32, max: f32 },

    #[error("maximum weight threshold {max} is below the minimum threshold {min}")]
    InvalidThresholdRange { min: f32, max: f32 },

    #[error("piece type {name:?} has weight {weight}, below the minimum threshold {min}")]
    WeightBelowThreshold { name: String, weight: f32, min: f32 },

    #[error("piece type {name:?} has weight {weight}, above the maximum threshold {max}")]
    WeightAboveThreshold { name: String, weight: f32, max: f32 },

    #[error("piece type {0:?} is defined more than once")]
    DuplicateType(String),

    #[error("board dimensions must be positive (got {width}x{height})")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("minimum touch limit must be at least 1 (got {0})")]
    InvalidTouchLimit(usize),

    #[error("invalid board config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read board config: {0}")]
    Io(#[from] std::io::Error),
}
