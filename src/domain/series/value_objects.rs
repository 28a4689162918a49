use derive_more::{Constructor, Deref, DerefMut, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Value Object - a single sample magnitude
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize)]
pub struct Magnitude(f32);

impl Magnitude {
    pub fn value(&self) -> f32 {
        self.0
    }

    /// Baseline magnitude used for indices past the end of a series.
    pub const ZERO: Magnitude = Magnitude(0.0);
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - half-open magnitude range `[min, max)` for generated data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnitudeBounds {
    pub min: f32,
    pub max: f32,
}

impl MagnitudeBounds {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Magnitudes are non-negative and the range must not be empty.
    pub fn is_valid(&self) -> bool {
        self.min >= 0.0 && self.max > self.min
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value < self.max
    }
}

impl Default for MagnitudeBounds {
    fn default() -> Self {
        Self { min: 30.0, max: 800.0 }
    }
}
