//! ELECTRE execution (variants I and III).

use std::time::Instant;

use super::concordance::{concordance_matrix, discordance_matrix};
use super::config::{DominanceScoring, ElectreConfig, ElectreVariant, Thresholds};
use super::credibility::{credibility_matrix, resolve_thresholds};
use super::kernel::{dominance_matrix, kernel};
use crate::error::McdmError;
use crate::matrix::DecisionMatrix;
use crate::method::{rank_grouped, Diagnostics, MethodResult};
use crate::normalization::{normalize, unit_weights};

/// Intermediate artifacts of an ELECTRE I run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElectreIDiagnostics {
    /// Working matrix after direction-aware normalization.
    pub normalized: Vec<Vec<f64>>,
    /// Pairwise concordance, diagonal 0.
    pub concordance: Vec<Vec<f64>>,
    /// Pairwise discordance, diagonal 0.
    pub discordance: Vec<Vec<f64>>,
    /// Crisp outranking relation.
    pub outranking: Vec<Vec<bool>>,
    /// Strict dominance (outranking without reciprocation).
    pub dominance: Vec<Vec<bool>>,
    /// Kernel member indices, ascending.
    pub kernel: Vec<usize>,
}

/// Intermediate artifacts of an ELECTRE III run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElectreIiiDiagnostics {
    /// Working matrix after direction-aware normalization.
    pub normalized: Vec<Vec<f64>>,
    /// Global concordance, diagonal 0.
    pub concordance: Vec<Vec<f64>>,
    /// Credibility degrees, diagonal 0.
    pub credibility: Vec<Vec<f64>>,
    /// Outgoing credibility per alternative.
    pub positive_flow: Vec<f64>,
    /// Incoming credibility per alternative.
    pub negative_flow: Vec<f64>,
}

/// Executes ELECTRE I or III over a decision matrix.
pub struct ElectreRunner;

impl ElectreRunner {
    pub fn run(matrix: &DecisionMatrix, config: &ElectreConfig) -> Result<MethodResult, McdmError> {
        matrix.ensure_quantitative()?;
        config.validate()?;
        let start = Instant::now();

        let weights = unit_weights(&matrix.weights());
        let working = if config.skip_normalization {
            matrix.values().to_vec()
        } else {
            normalize(matrix.values(), &matrix.directions(), config.normalization)
        };

        match config.variant {
            ElectreVariant::I => Self::run_i(matrix, config, &working, &weights, start),
            ElectreVariant::Iii => Self::run_iii(matrix, config, &working, &weights, start),
        }
    }

    fn run_i(
        matrix: &DecisionMatrix,
        config: &ElectreConfig,
        working: &[Vec<f64>],
        weights: &[f64],
        start: Instant,
    ) -> Result<MethodResult, McdmError> {
        let n = matrix.n_alternatives();
        let concordance = concordance_matrix(working, weights);
        let discordance = discordance_matrix(working, weights);

        let mut outranking = vec![vec![false; n]; n];
        for i in 0..n {
            for j in 0..n {
                if i != j
                    && concordance[i][j] >= config.concordance_threshold
                    && discordance[i][j] <= config.discordance_threshold
                {
                    outranking[i][j] = true;
                }
            }
        }

        let dominance = dominance_matrix(&outranking);
        let kernel = kernel(&dominance);
        let mut in_kernel = vec![false; n];
        for &i in &kernel {
            in_kernel[i] = true;
        }

        let scores = dominance_scores(&dominance, config.scoring);
        let rankings = rank_grouped(&in_kernel, &scores);

        let diagnostics = Diagnostics::ElectreI(ElectreIDiagnostics {
            normalized: working.to_vec(),
            concordance,
            discordance,
            outranking,
            dominance,
            kernel,
        });

        Ok(MethodResult::with_rankings(
            "ELECTRE-I",
            matrix,
            scores,
            rankings,
            diagnostics,
            start.elapsed().as_secs_f64() * 1e3,
        ))
    }

    fn run_iii(
        matrix: &DecisionMatrix,
        config: &ElectreConfig,
        working: &[Vec<f64>],
        weights: &[f64],
        start: Instant,
    ) -> Result<MethodResult, McdmError> {
        let n = matrix.n_alternatives();
        let m = matrix.n_criteria();

        let thresholds = match &config.thresholds {
            Some(thresholds) => {
                if thresholds.len() != m {
                    return Err(McdmError::InvalidParameter {
                        method: "ELECTRE",
                        reason: format!(
                            "expected {m} threshold entries, got {}",
                            thresholds.len()
                        ),
                    });
                }
                thresholds.clone()
            }
            None => vec![Thresholds::default(); m],
        };
        let resolved = resolve_thresholds(&thresholds, working)?;

        let (concordance, credibility) = credibility_matrix(working, weights, &resolved);

        let positive_flow: Vec<f64> = credibility.iter().map(|row| row.iter().sum()).collect();
        let negative_flow: Vec<f64> = (0..n)
            .map(|i| credibility.iter().map(|row| row[i]).sum())
            .collect();
        let scores: Vec<f64> = positive_flow
            .iter()
            .zip(&negative_flow)
            .map(|(p, n)| p - n)
            .collect();

        let diagnostics = Diagnostics::ElectreIii(ElectreIiiDiagnostics {
            normalized: working.to_vec(),
            concordance,
            credibility,
            positive_flow,
            negative_flow,
        });

        Ok(MethodResult::new(
            "ELECTRE-III",
            matrix,
            scores,
            diagnostics,
            start.elapsed().as_secs_f64() * 1e3,
        ))
    }
}

/// Scores from the dominance matrix; counts scaled by `n - 1`.
fn dominance_scores(dominance: &[Vec<bool>], scoring: DominanceScoring) -> Vec<f64> {
    let n = dominance.len();
    if n < 2 {
        return vec![0.0; n];
    }
    let scale = (n - 1) as f64;
    (0..n)
        .map(|i| {
            let dominates = dominance[i].iter().filter(|&&d| d).count() as f64 / scale;
            let dominated =
                dominance.iter().filter(|row| row[i]).count() as f64 / scale;
            match scoring {
                DominanceScoring::NetFlow => dominates - dominated,
                DominanceScoring::PureDominance => dominates,
                DominanceScoring::Mixed { dominance_weight } => {
                    dominance_weight * dominates + (1.0 - dominance_weight) * (1.0 - dominated)
                }
            }
        })
        .collect()
}
