//! TOPSIS execution.

use std::time::Instant;

use super::config::{DistanceMetric, TopsisConfig};
use crate::error::McdmError;
use crate::matrix::{DecisionMatrix, Direction};
use crate::method::{Diagnostics, MethodResult};
use crate::normalization::{normalize_unsigned, unit_weights};

/// Intermediate artifacts of a TOPSIS run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopsisDiagnostics {
    /// Matrix after normalization (raw values if normalization was skipped).
    pub normalized: Vec<Vec<f64>>,
    /// Normalized matrix with column weights applied.
    pub weighted: Vec<Vec<f64>>,
    /// Best achievable weighted value per criterion.
    pub ideal_positive: Vec<f64>,
    /// Worst achievable weighted value per criterion.
    pub ideal_negative: Vec<f64>,
    /// Distance of each alternative to the positive ideal.
    pub distance_positive: Vec<f64>,
    /// Distance of each alternative to the negative ideal.
    pub distance_negative: Vec<f64>,
}

/// Executes TOPSIS over a decision matrix.
pub struct TopsisRunner;

impl TopsisRunner {
    /// Runs TOPSIS and ranks alternatives by closeness coefficient.
    ///
    /// An alternative equidistant from both ideals at distance zero
    /// (every alternative identical) gets `Ci = 0`: no discrimination
    /// is possible.
    pub fn run(matrix: &DecisionMatrix, config: &TopsisConfig) -> Result<MethodResult, McdmError> {
        matrix.ensure_quantitative()?;
        let start = Instant::now();

        let (n_alternatives, n_criteria) = matrix.shape();
        let weights = unit_weights(&matrix.weights());
        let directions = matrix.directions();

        let normalized = if config.skip_normalization {
            matrix.values().to_vec()
        } else {
            normalize_unsigned(matrix.values(), config.normalization)
        };

        let weighted: Vec<Vec<f64>> = normalized
            .iter()
            .map(|row| row.iter().zip(&weights).map(|(v, w)| v * w).collect())
            .collect();

        // Ideal solutions: per-column extrema under the criterion direction.
        let mut ideal_positive = vec![0.0; n_criteria];
        let mut ideal_negative = vec![0.0; n_criteria];
        for j in 0..n_criteria {
            let column: Vec<f64> = weighted.iter().map(|row| row[j]).collect();
            let min = column.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = column.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            match directions[j] {
                Direction::Minimize => {
                    ideal_positive[j] = min;
                    ideal_negative[j] = max;
                }
                Direction::Maximize => {
                    ideal_positive[j] = max;
                    ideal_negative[j] = min;
                }
            }
        }

        let distance_positive: Vec<f64> = weighted
            .iter()
            .map(|row| distance(row, &ideal_positive, config.distance))
            .collect();
        let distance_negative: Vec<f64> = weighted
            .iter()
            .map(|row| distance(row, &ideal_negative, config.distance))
            .collect();

        let scores: Vec<f64> = (0..n_alternatives)
            .map(|i| {
                let total = distance_positive[i] + distance_negative[i];
                if total > 0.0 {
                    distance_negative[i] / total
                } else {
                    0.0
                }
            })
            .collect();

        let diagnostics = Diagnostics::Topsis(TopsisDiagnostics {
            normalized,
            weighted,
            ideal_positive,
            ideal_negative,
            distance_positive,
            distance_negative,
        });

        Ok(MethodResult::new(
            "TOPSIS",
            matrix,
            scores,
            diagnostics,
            start.elapsed().as_secs_f64() * 1e3,
        ))
    }
}

fn distance(row: &[f64], ideal: &[f64], metric: DistanceMetric) -> f64 {
    match metric {
        DistanceMetric::Euclidean => row
            .iter()
            .zip(ideal)
            .map(|(v, i)| (v - i) * (v - i))
            .sum::<f64>()
            .sqrt(),
        DistanceMetric::Manhattan => row.iter().zip(ideal).map(|(v, i)| (v - i).abs()).sum(),
        DistanceMetric::Chebyshev => row
            .iter()
            .zip(ideal)
            .map(|(v, i)| (v - i).abs())
            .fold(0.0, f64::max),
    }
}
