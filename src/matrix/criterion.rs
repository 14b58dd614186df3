//! Criterion definition: direction, weight, and measurement scale.

use std::fmt;
use std::str::FromStr;

use crate::error::McdmError;

/// Whether larger or smaller raw values are preferred on a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Smaller is better (cost-type criterion).
    Minimize,
    /// Larger is better (benefit-type criterion).
    Maximize,
}

impl Direction {
    /// Returns `true` for cost-type criteria.
    pub fn is_minimize(self) -> bool {
        matches!(self, Direction::Minimize)
    }
}

impl FromStr for Direction {
    type Err = McdmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimize" | "min" | "cost" => Ok(Direction::Minimize),
            "maximize" | "max" | "benefit" => Ok(Direction::Maximize),
            other => Err(McdmError::UnknownDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Minimize => write!(f, "minimize"),
            Direction::Maximize => write!(f, "maximize"),
        }
    }
}

/// Measurement scale of a criterion.
///
/// Every method in this crate is numeric and requires [`Scale::Quantitative`];
/// qualitative criteria are rejected before computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Scale {
    #[default]
    Quantitative,
    Qualitative,
}

/// An evaluation criterion: a column of the decision matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Criterion {
    /// Stable identifier, chosen by the caller.
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// Optimization direction.
    pub direction: Direction,

    /// Relative importance, `>= 0`. Methods scale weights to unit sum
    /// internally, so callers need not pre-normalize.
    pub weight: f64,

    /// Measurement scale.
    pub scale: Scale,

    /// Optional measurement unit, informational only.
    pub unit: Option<String>,
}

impl Criterion {
    /// Creates a quantitative criterion.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        direction: Direction,
        weight: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            direction,
            weight,
            scale: Scale::default(),
            unit: None,
        }
    }

    /// Sets the measurement scale.
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the measurement unit.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}
