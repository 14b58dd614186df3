//! TOPSIS configuration.

use crate::normalization::Normalization;

/// Distance measure between an alternative and an ideal solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DistanceMetric {
    /// Square root of the sum of squared differences.
    #[default]
    Euclidean,
    /// Sum of absolute differences.
    Manhattan,
    /// Maximum absolute difference.
    Chebyshev,
}

/// Configuration for TOPSIS.
///
/// # Examples
///
/// ```
/// use mcdm_engine::topsis::{DistanceMetric, TopsisConfig};
///
/// let config = TopsisConfig::default().with_distance(DistanceMetric::Manhattan);
/// assert_eq!(config.distance, DistanceMetric::Manhattan);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopsisConfig {
    /// Normalization scheme applied before weighting. Direction handling
    /// happens in the ideal-solution extrema, never in the scaling, so
    /// the unsigned form of the scheme is used.
    pub normalization: Normalization,

    /// Distance measure to both ideal solutions.
    pub distance: DistanceMetric,

    /// Skip normalization entirely; only sensible when the caller
    /// supplies a pre-normalized matrix.
    pub skip_normalization: bool,
}

impl TopsisConfig {
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn with_distance(mut self, distance: DistanceMetric) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_skip_normalization(mut self, skip: bool) -> Self {
        self.skip_normalization = skip;
        self
    }
}
