//! PROMETHEE configuration.

use super::preference::PreferenceFunction;
use crate::error::McdmError;
use crate::normalization::Normalization;

/// Which PROMETHEE variant to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PrometheeVariant {
    /// Partial ranking from the `(φ+, φ-)` pair, with incomparabilities.
    I,
    /// Complete ranking by scalar net flow.
    #[default]
    Ii,
}

/// Configuration for PROMETHEE.
///
/// # Examples
///
/// ```
/// use mcdm_engine::promethee::{PreferenceFunction, PrometheeConfig};
///
/// let config = PrometheeConfig::default()
///     .with_default_function(PreferenceFunction::Linear { q: 0.05, p: 0.3 });
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrometheeConfig {
    pub variant: PrometheeVariant,

    /// Preference function for criteria without a specific one.
    pub default_function: PreferenceFunction,

    /// Per-criterion preference functions, one entry per criterion.
    /// `None` applies the default function everywhere.
    pub functions: Option<Vec<PreferenceFunction>>,

    /// Normalization applied before differencing (direction-aware,
    /// higher is better).
    pub normalization: Normalization,

    /// Skip normalization; differences are then taken on the raw matrix,
    /// which must already be oriented so larger values are better, and
    /// thresholds must live on the raw scale.
    pub skip_normalization: bool,
}

impl Default for PrometheeConfig {
    fn default() -> Self {
        Self {
            variant: PrometheeVariant::default(),
            default_function: PreferenceFunction::default(),
            functions: None,
            normalization: Normalization::MinMax,
            skip_normalization: false,
        }
    }
}

impl PrometheeConfig {
    pub fn variant_i() -> Self {
        Self {
            variant: PrometheeVariant::I,
            ..Self::default()
        }
    }

    pub fn with_default_function(mut self, function: PreferenceFunction) -> Self {
        self.default_function = function;
        self
    }

    pub fn with_functions(mut self, functions: Vec<PreferenceFunction>) -> Self {
        self.functions = Some(functions);
        self
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn with_skip_normalization(mut self, skip: bool) -> Self {
        self.skip_normalization = skip;
        self
    }

    /// Validates every preference function's thresholds. The
    /// per-criterion count is checked in the runner.
    pub fn validate(&self) -> Result<(), McdmError> {
        self.default_function.validate("default preference function")?;
        if let Some(functions) = &self.functions {
            for (j, function) in functions.iter().enumerate() {
                function.validate(&format!("criterion {j}"))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(PrometheeConfig::default().validate().is_ok());
        assert_eq!(PrometheeConfig::default().variant, PrometheeVariant::Ii);
    }

    #[test]
    fn invalid_per_criterion_function_is_rejected() {
        let config = PrometheeConfig::default()
            .with_functions(vec![PreferenceFunction::Gaussian { s: 0.0 }]);
        assert!(config.validate().is_err());
    }
}
