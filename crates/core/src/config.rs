//! Board configuration surface.
//!
//! Loaded once (JSON, environment, or code) and validated eagerly by
//! [`crate::Board::new`]. Defaults follow the classic tuning: 3-piece minimum
//! chains, spawn weights in `[5, 100]`, spawned pieces fall from 200 units up.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, PieceType};
use crate::error::ConfigError;
use crate::style::{AnimationStrategy, PieceStyle, TouchStyle};
use crate::types::{
    DEFAULT_MAX_WEIGHT_THRESHOLD, DEFAULT_MINIMUM_TOUCH_LIMIT, DEFAULT_MIN_WEIGHT_THRESHOLD,
    DEFAULT_START_POSITION,
};

/// One piece type entry as written in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceTypeConfig {
    pub name: String,
    pub weight: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub touch: Option<TouchStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationStrategy>,
}

impl PieceTypeConfig {
    pub fn new(name: impl Into<String>, weight: f32) -> Self {
        Self {
            name: name.into(),
            weight,
            touch: None,
            animation: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
    /// Distance between cell centres in render space.
    pub spacing: f32,
    pub minimum_touch_limit: usize,
    /// Initial pieces fall into place instead of appearing.
    pub animate_on_start: bool,
    /// Mark pieces outside the chain's type as external while selecting.
    pub toggle_other_tiles: bool,
    /// Offset above its cell from which a spawned piece falls.
    pub start_position: f32,
    pub piece_types: Vec<PieceTypeConfig>,
    pub min_weight_threshold: f32,
    pub max_weight_threshold: f32,
    /// Board-wide styles; piece types may override them.
    pub touch: TouchStyle,
    pub animation: AnimationStrategy,
    /// Fixed RNG seed. `None` seeds from entropy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 6,
            height: 6,
            spacing: 64.0,
            minimum_touch_limit: DEFAULT_MINIMUM_TOUCH_LIMIT,
            animate_on_start: false,
            toggle_other_tiles: true,
            start_position: DEFAULT_START_POSITION,
            piece_types: ["red", "green", "blue", "yellow"]
                .into_iter()
                .map(|name| PieceTypeConfig::new(name, DEFAULT_MAX_WEIGHT_THRESHOLD))
                .collect(),
            min_weight_threshold: DEFAULT_MIN_WEIGHT_THRESHOLD,
            max_weight_threshold: DEFAULT_MAX_WEIGHT_THRESHOLD,
            touch: TouchStyle::default(),
            animation: AnimationStrategy::default(),
            seed: None,
        }
    }
}

impl BoardConfig {
    /// Config with the given dimensions and types, defaults elsewhere.
    pub fn new(width: i32, height: i32, piece_types: Vec<PieceTypeConfig>) -> Self {
        Self {
            width,
            height,
            piece_types,
            ..Self::default()
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Load from environment variables.
    ///
    /// `MATCH3_CONFIG` names a JSON file to start from (defaults otherwise);
    /// `MATCH3_WIDTH`, `MATCH3_HEIGHT`, `MATCH3_MIN_TOUCH` and `MATCH3_SEED`
    /// override single fields.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = match std::env::var("MATCH3_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::from_path(path.trim())?,
            _ => Self::default(),
        };
        Ok(base.with_env_overrides())
    }

    /// Apply `MATCH3_*` overrides. Unparseable values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        use std::env;

        fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
            env::var(key).ok().and_then(|s| s.trim().parse().ok())
        }

        if let Some(width) = parsed("MATCH3_WIDTH") {
            self.width = width;
        }
        if let Some(height) = parsed("MATCH3_HEIGHT") {
            self.height = height;
        }
        if let Some(limit) = parsed("MATCH3_MIN_TOUCH") {
            self.minimum_touch_limit = limit;
        }
        if let Some(seed) = parsed("MATCH3_SEED") {
            self.seed = Some(seed);
        }
        self
    }

    /// Validate everything without building a board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_board()?;
        self.catalog().map(|_| ())
    }

    pub(crate) fn validate_board(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.minimum_touch_limit < 1 {
            return Err(ConfigError::InvalidTouchLimit(self.minimum_touch_limit));
        }
        Ok(())
    }

    /// Build the validated piece catalog.
    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        let types = self
            .piece_types
            .iter()
            .map(|p| PieceType {
                name: p.name.clone(),
                weight: p.weight,
                touch: p.touch,
                animation: p.animation,
            })
            .collect();
        Catalog::new(types, self.min_weight_threshold, self.max_weight_threshold)
    }

    pub fn default_style(&self) -> PieceStyle {
        PieceStyle {
            touch: self.touch,
            animation: self.animation,
        }
    }
}
