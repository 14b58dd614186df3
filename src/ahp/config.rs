//! AHP configuration.

use crate::error::McdmError;

/// Configuration for AHP.
///
/// Both comparison inputs are optional. Without a criteria comparison
/// matrix, the weights already on the criteria are used as-is (trivially
/// consistent). Without per-criterion alternative comparisons, priorities
/// come from the decision-matrix columns, each scaled to unit sum.
///
/// # Examples
///
/// ```
/// use mcdm_engine::ahp::AhpConfig;
///
/// let config = AhpConfig::default()
///     .with_criteria_comparisons(vec![
///         vec![1.0, 3.0],
///         vec![1.0 / 3.0, 1.0],
///     ])
///     .with_consistency_threshold(0.1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AhpConfig {
    /// Pairwise comparison matrix over criteria (Saaty 1–9 scale),
    /// order = criterion count.
    pub criteria_comparisons: Option<Vec<Vec<f64>>>,

    /// One pairwise comparison matrix per criterion over alternatives,
    /// order = alternative count.
    pub alternative_comparisons: Option<Vec<Vec<Vec<f64>>>>,

    /// Consistency ratio above which judgments are flagged (default 0.1,
    /// Saaty's threshold). Flagging never aborts the computation.
    pub consistency_threshold: f64,

    /// Min-max normalize decision-matrix columns (direction-aware)
    /// before the column-based priority fallback. Default `true`; with
    /// `false`, minimize criteria must already be value-inverted by the
    /// caller.
    pub normalize_columns: bool,

    /// Power-iteration cap.
    pub max_iterations: usize,

    /// Power-iteration convergence tolerance.
    pub tolerance: f64,
}

impl Default for AhpConfig {
    fn default() -> Self {
        Self {
            criteria_comparisons: None,
            alternative_comparisons: None,
            consistency_threshold: 0.1,
            normalize_columns: true,
            max_iterations: 100,
            tolerance: 1e-12,
        }
    }
}

impl AhpConfig {
    pub fn with_criteria_comparisons(mut self, matrix: Vec<Vec<f64>>) -> Self {
        self.criteria_comparisons = Some(matrix);
        self
    }

    pub fn with_alternative_comparisons(mut self, matrices: Vec<Vec<Vec<f64>>>) -> Self {
        self.alternative_comparisons = Some(matrices);
        self
    }

    pub fn with_consistency_threshold(mut self, threshold: f64) -> Self {
        self.consistency_threshold = threshold;
        self
    }

    pub fn with_normalize_columns(mut self, normalize: bool) -> Self {
        self.normalize_columns = normalize;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Validates context-free parameters. Order checks against the
    /// decision matrix happen in the runner.
    pub fn validate(&self) -> Result<(), McdmError> {
        if !(self.consistency_threshold.is_finite() && self.consistency_threshold > 0.0) {
            return Err(invalid(format!(
                "consistency_threshold must be positive, got {}",
                self.consistency_threshold
            )));
        }
        if self.max_iterations == 0 {
            return Err(invalid("max_iterations must be positive".into()));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(invalid(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if let Some(matrix) = &self.criteria_comparisons {
            check_comparison_matrix(matrix, "criteria comparison matrix")?;
        }
        if let Some(matrices) = &self.alternative_comparisons {
            for (j, matrix) in matrices.iter().enumerate() {
                check_comparison_matrix(matrix, &format!("alternative comparison matrix {j}"))?;
            }
        }
        Ok(())
    }
}

fn check_comparison_matrix(matrix: &[Vec<f64>], what: &str) -> Result<(), McdmError> {
    let n = matrix.len();
    if n == 0 {
        return Err(invalid(format!("{what} is empty")));
    }
    for row in matrix {
        if row.len() != n {
            return Err(invalid(format!(
                "{what} is not square: {n} rows, row of length {}",
                row.len()
            )));
        }
        for &entry in row {
            if !(entry.is_finite() && entry > 0.0) {
                return Err(invalid(format!(
                    "{what} entries must be positive ratios, got {entry}"
                )));
            }
        }
    }
    Ok(())
}

fn invalid(reason: String) -> McdmError {
    McdmError::InvalidParameter {
        method: "AHP",
        reason,
    }
}
