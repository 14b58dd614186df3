//! AHP execution.

use std::time::Instant;

use tracing::warn;

use super::config::AhpConfig;
use super::eigen::{principal_eigenvector, ConsistencyReport};
use crate::error::McdmError;
use crate::matrix::DecisionMatrix;
use crate::method::{Diagnostics, MethodResult};
use crate::normalization::{normalize, unit_weights, Normalization};

/// Intermediate artifacts of an AHP run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AhpDiagnostics {
    /// Criteria weights actually used (eigenvector-derived or supplied),
    /// unit sum.
    pub criteria_weights: Vec<f64>,
    /// Per-criterion alternative priorities, `[alternative][criterion]`,
    /// each column unit sum.
    pub priorities: Vec<Vec<f64>>,
    /// Consistency of the criteria comparison matrix (trivial when
    /// weights were supplied directly).
    pub criteria_consistency: ConsistencyReport,
    /// Consistency per alternative comparison matrix; `None` when the
    /// column-based fallback was used.
    pub alternative_consistency: Option<Vec<ConsistencyReport>>,
}

/// Executes AHP over a decision matrix.
pub struct AhpRunner;

impl AhpRunner {
    /// Runs AHP: criteria weighting, per-criterion priorities, weighted
    /// aggregation. Consistency violations are reported in the
    /// diagnostics and logged, never fatal.
    pub fn run(matrix: &DecisionMatrix, config: &AhpConfig) -> Result<MethodResult, McdmError> {
        matrix.ensure_quantitative()?;
        config.validate()?;
        let start = Instant::now();

        let (n_alternatives, n_criteria) = matrix.shape();

        let (criteria_weights, criteria_consistency) = match &config.criteria_comparisons {
            Some(comparison) => {
                require_order(comparison, n_criteria, "criteria comparison matrix")?;
                let (weights, lambda_max) =
                    principal_eigenvector(comparison, config.max_iterations, config.tolerance);
                let report = ConsistencyReport::from_eigenvalue(
                    lambda_max,
                    n_criteria,
                    config.consistency_threshold,
                );
                if !report.consistent {
                    warn!(
                        ratio = report.ratio,
                        threshold = config.consistency_threshold,
                        "criteria judgments exceed the consistency threshold"
                    );
                }
                (weights, report)
            }
            None => (
                unit_weights(&matrix.weights()),
                ConsistencyReport::trivial(n_criteria),
            ),
        };

        let (priorities, alternative_consistency) = match &config.alternative_comparisons {
            Some(comparisons) => {
                if comparisons.len() != n_criteria {
                    return Err(McdmError::InvalidParameter {
                        method: "AHP",
                        reason: format!(
                            "expected {n_criteria} alternative comparison matrices, got {}",
                            comparisons.len()
                        ),
                    });
                }
                let mut priorities = vec![vec![0.0; n_criteria]; n_alternatives];
                let mut reports = Vec::with_capacity(n_criteria);
                for (j, comparison) in comparisons.iter().enumerate() {
                    require_order(
                        comparison,
                        n_alternatives,
                        &format!("alternative comparison matrix {j}"),
                    )?;
                    let (column, lambda_max) =
                        principal_eigenvector(comparison, config.max_iterations, config.tolerance);
                    let report = ConsistencyReport::from_eigenvalue(
                        lambda_max,
                        n_alternatives,
                        config.consistency_threshold,
                    );
                    if !report.consistent {
                        warn!(
                            criterion = %matrix.criteria()[j].id,
                            ratio = report.ratio,
                            "alternative judgments exceed the consistency threshold"
                        );
                    }
                    for (i, &p) in column.iter().enumerate() {
                        priorities[i][j] = p;
                    }
                    reports.push(report);
                }
                (priorities, Some(reports))
            }
            None => (column_priorities(matrix, config), None),
        };

        let scores: Vec<f64> = priorities
            .iter()
            .map(|row| row.iter().zip(&criteria_weights).map(|(p, w)| p * w).sum())
            .collect();

        let diagnostics = Diagnostics::Ahp(AhpDiagnostics {
            criteria_weights,
            priorities,
            criteria_consistency,
            alternative_consistency,
        });

        Ok(MethodResult::new(
            "AHP",
            matrix,
            scores,
            diagnostics,
            start.elapsed().as_secs_f64() * 1e3,
        ))
    }
}

/// Priority fallback: each (optionally min-max-normalized) criterion
/// column scaled to unit sum; a zero-sum column degrades to a uniform
/// share.
fn column_priorities(matrix: &DecisionMatrix, config: &AhpConfig) -> Vec<Vec<f64>> {
    let n_alternatives = matrix.n_alternatives();
    let values = if config.normalize_columns {
        normalize(matrix.values(), &matrix.directions(), Normalization::MinMax)
    } else {
        matrix.values().to_vec()
    };
    let mut priorities = vec![vec![0.0; matrix.n_criteria()]; n_alternatives];
    for j in 0..matrix.n_criteria() {
        let total: f64 = values.iter().map(|row| row[j]).sum();
        for i in 0..n_alternatives {
            priorities[i][j] = if total > 0.0 {
                values[i][j] / total
            } else {
                1.0 / n_alternatives as f64
            };
        }
    }
    priorities
}

fn require_order(matrix: &[Vec<f64>], order: usize, what: &str) -> Result<(), McdmError> {
    if matrix.len() != order {
        return Err(McdmError::InvalidParameter {
            method: "AHP",
            reason: format!("{what} has order {}, expected {order}", matrix.len()),
        });
    }
    Ok(())
}
