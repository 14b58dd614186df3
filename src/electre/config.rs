//! ELECTRE configuration: variant selection, thresholds, scoring.

use crate::error::McdmError;
use crate::normalization::Normalization;

/// Which ELECTRE variant to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ElectreVariant {
    /// Crisp outranking with kernel selection.
    #[default]
    I,
    /// Fuzzy outranking with credibility degrees.
    Iii,
}

/// How variant I turns the dominance matrix into scores.
///
/// Kernel membership always takes ranking precedence; the score only
/// orders alternatives within the kernel and within the remainder.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DominanceScoring {
    /// Dominated-count subtracted from dominating-count (net dominance).
    NetFlow,
    /// Dominating-count only.
    PureDominance,
    /// Weighted blend of dominance and non-domination.
    Mixed {
        /// Weight of the dominance share, in `[0, 1]`.
        dominance_weight: f64,
    },
}

impl Default for DominanceScoring {
    fn default() -> Self {
        DominanceScoring::NetFlow
    }
}

/// A threshold, either an absolute value or a fraction of the
/// criterion's observed scale (column range of the working matrix).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ThresholdValue {
    Fixed(f64),
    Proportional(f64),
}

impl ThresholdValue {
    fn raw(&self) -> f64 {
        match *self {
            ThresholdValue::Fixed(v) | ThresholdValue::Proportional(v) => v,
        }
    }
}

/// Per-criterion pseudo-criterion thresholds for variant III.
///
/// An absent threshold disables its effect: no indifference band, no
/// preference zone beyond the band, no veto.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thresholds {
    /// Indifference threshold `q`.
    pub indifference: Option<ThresholdValue>,
    /// Preference threshold `p`; must resolve to at least `q`.
    pub preference: Option<ThresholdValue>,
    /// Veto threshold `v`; must resolve to at least `p`.
    pub veto: Option<ThresholdValue>,
}

impl Default for Thresholds {
    /// Defaults suited to min-max-normalized data: q 0.1, p 0.2, v 0.5.
    fn default() -> Self {
        Self {
            indifference: Some(ThresholdValue::Fixed(0.1)),
            preference: Some(ThresholdValue::Fixed(0.2)),
            veto: Some(ThresholdValue::Fixed(0.5)),
        }
    }
}

impl Thresholds {
    /// All thresholds disabled: crisp concordance, no veto.
    pub fn none() -> Self {
        Self {
            indifference: None,
            preference: None,
            veto: None,
        }
    }
}

/// Configuration for ELECTRE I and III.
///
/// # Examples
///
/// ```
/// use mcdm_engine::electre::{ElectreConfig, ElectreVariant};
///
/// let config = ElectreConfig::variant_i()
///     .with_concordance_threshold(0.65)
///     .with_discordance_threshold(0.35);
/// assert_eq!(config.variant, ElectreVariant::I);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElectreConfig {
    pub variant: ElectreVariant,

    /// Normalization applied before pairwise comparison (direction-aware,
    /// higher is better).
    pub normalization: Normalization,

    /// Skip normalization; the matrix must then already be oriented so
    /// larger values are better on every criterion.
    pub skip_normalization: bool,

    /// Variant I: minimum weighted agreement for outranking, in `[0.5, 1]`.
    pub concordance_threshold: f64,

    /// Variant I: maximum tolerated discordance, in `[0, 1]`.
    pub discordance_threshold: f64,

    /// Variant I: score derivation from the dominance matrix.
    pub scoring: DominanceScoring,

    /// Variant III: per-criterion thresholds, one entry per criterion.
    /// `None` applies [`Thresholds::default`] to every criterion.
    pub thresholds: Option<Vec<Thresholds>>,
}

impl Default for ElectreConfig {
    fn default() -> Self {
        Self {
            variant: ElectreVariant::default(),
            normalization: Normalization::MinMax,
            skip_normalization: false,
            concordance_threshold: 0.7,
            discordance_threshold: 0.3,
            scoring: DominanceScoring::default(),
            thresholds: None,
        }
    }
}

impl ElectreConfig {
    pub fn variant_i() -> Self {
        Self::default()
    }

    pub fn variant_iii() -> Self {
        Self {
            variant: ElectreVariant::Iii,
            ..Self::default()
        }
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn with_skip_normalization(mut self, skip: bool) -> Self {
        self.skip_normalization = skip;
        self
    }

    pub fn with_concordance_threshold(mut self, threshold: f64) -> Self {
        self.concordance_threshold = threshold;
        self
    }

    pub fn with_discordance_threshold(mut self, threshold: f64) -> Self {
        self.discordance_threshold = threshold;
        self
    }

    pub fn with_scoring(mut self, scoring: DominanceScoring) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_thresholds(mut self, thresholds: Vec<Thresholds>) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    /// Validates context-free parameters. Threshold resolution against
    /// the criterion scale happens in the runner.
    pub fn validate(&self) -> Result<(), McdmError> {
        if !(0.5..=1.0).contains(&self.concordance_threshold) {
            return Err(invalid(format!(
                "concordance_threshold must be in [0.5, 1.0], got {}",
                self.concordance_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.discordance_threshold) {
            return Err(invalid(format!(
                "discordance_threshold must be in [0.0, 1.0], got {}",
                self.discordance_threshold
            )));
        }
        if let DominanceScoring::Mixed { dominance_weight } = self.scoring {
            if !(0.0..=1.0).contains(&dominance_weight) {
                return Err(invalid(format!(
                    "mixed scoring dominance_weight must be in [0.0, 1.0], got {dominance_weight}"
                )));
            }
        }
        if let Some(thresholds) = &self.thresholds {
            for (j, t) in thresholds.iter().enumerate() {
                for (name, value) in [
                    ("indifference", t.indifference),
                    ("preference", t.preference),
                    ("veto", t.veto),
                ] {
                    if let Some(v) = value {
                        if !(v.raw().is_finite() && v.raw() >= 0.0) {
                            return Err(invalid(format!(
                                "{name} threshold for criterion {j} must be finite and >= 0, got {}",
                                v.raw()
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

fn invalid(reason: String) -> McdmError {
    McdmError::InvalidParameter {
        method: "ELECTRE",
        reason,
    }
}
