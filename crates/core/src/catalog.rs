//! PieceType catalog - the set of spawnable piece types and the weighted draw
//!
//! Every draw shuffles the catalog's working order (Fisher-Yates), rolls a
//! chance value in `[min_threshold, max_threshold]`, and returns the first type
//! in shuffled order whose weight is at least the roll. If nothing qualifies the
//! first shuffled entry is returned.
//!
//! The working order is kept between draws, so each draw permutes the previous
//! permutation rather than the declaration order.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ConfigError;
use crate::style::{AnimationStrategy, TouchStyle};
use crate::types::PieceTypeId;

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PieceType {
    pub name: String,
    pub weight: f32,
    /// Per-type overrides of the board-wide styles.
    pub touch: Option<TouchStyle>,
    pub animation: Option<AnimationStrategy>,
}

impl PieceType {
    pub fn new(name: impl Into<String>, weight: f32) -> Self {
        Self {
            name: name.into(),
            weight,
            touch: None,
            animation: None,
        }
    }
}

/// Validated set of piece types with its draw state.
#[derive(Debug, Clone)]
pub struct Catalog {
    types: Vec<PieceType>,
    /// Working order for draws, reshuffled in place every draw.
    order: Vec<PieceTypeId>,
    min_threshold: f32,
    max_threshold: f32,
}

impl Catalog {
    /// Build a catalog, rejecting invalid configuration.
    pub fn new(
        types: Vec<PieceType>,
        min_threshold: f32,
        max_threshold: f32,
    ) -> Result<Self, ConfigError> {
        let catalog = Self {
            order: (0..types.len() as u16).map(PieceTypeId).collect(),
            types,
            min_threshold,
            max_threshold,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check catalog invariants.
    ///
    /// Fails on an empty set, a non-positive or infinite threshold, or any
    /// weight outside `[min_threshold, max_threshold]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.types.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if self.types.len() > u16::MAX as usize {
            return Err(ConfigError::TooManyTypes(self.types.len()));
        }
        if !(self.min_threshold > 0.0) {
            return Err(ConfigError::NonPositiveThreshold(self.min_threshold));
        }
        if !self.min_threshold.is_finite() || !self.max_threshold.is_finite() {
            return Err(ConfigError::NonFiniteThreshold {
                min: self.min_threshold,
                max: self.max_threshold,
            });
        }
        if !(self.max_threshold >= self.min_threshold) {
            return Err(ConfigError::InvalidThresholdRange {
                min: self.min_threshold,
                max: self.max_threshold,
            });
        }

        for (i, ty) in self.types.iter().enumerate() {
            // Written as negations so NaN weights are rejected too.
            if !(ty.weight >= self.min_threshold) {
                return Err(ConfigError::WeightBelowThreshold {
                    name: ty.name.clone(),
                    weight: ty.weight,
                    min: self.min_threshold,
                });
            }
            if !(ty.weight <= self.max_threshold) {
                return Err(ConfigError::WeightAboveThreshold {
                    name: ty.name.clone(),
                    weight: ty.weight,
                    max: self.max_threshold,
                });
            }
            if self.types[..i].iter().any(|other| other.name == ty.name) {
                return Err(ConfigError::DuplicateType(ty.name.clone()));
            }
        }

        Ok(())
    }

    /// Weighted draw of a piece type.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> PieceTypeId {
        self.order.shuffle(rng);

        // `gen_range` panics on spans too wide for its f32 scale.
        let span = self.max_threshold - self.min_threshold;
        let chance = self.min_threshold + span * rng.gen::<f32>();
        let types = &self.types;
        self.order
            .iter()
            .copied()
            .find(|id| chance <= types[id.index()].weight)
            // Only reachable if weights do not cover the roll range.
            .unwrap_or(self.order[0])
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn get(&self, id: PieceTypeId) -> Option<&PieceType> {
        self.types.get(id.index())
    }

    /// Name of a type, or `""` for an id from another catalog.
    pub fn name(&self, id: PieceTypeId) -> &str {
        self.get(id).map(|t| t.name.as_str()).unwrap_or("")
    }

    pub fn id_of(&self, name: &str) -> Option<PieceTypeId> {
        self.types
            .iter()
            .position(|t| t.name == name)
            .map(|i| PieceTypeId(i as u16))
    }

    pub fn iter(&self) -> impl Iterator<Item = (PieceTypeId, &PieceType)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, t)| (PieceTypeId(i as u16), t))
    }

    /// Current working order of the draw.
    pub fn order(&self) -> &[PieceTypeId] {
        &self.order
    }

    pub fn min_threshold(&self) -> f32 {
        self.min_threshold
    }

    pub fn max_threshold(&self) -> f32 {
        self.max_threshold
    }
}
