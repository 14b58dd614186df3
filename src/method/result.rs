//! Evaluation result: scores, derived ranking, and per-method diagnostics.

use crate::ahp::AhpDiagnostics;
use crate::electre::{ElectreIDiagnostics, ElectreIiiDiagnostics};
use crate::matrix::DecisionMatrix;
use crate::promethee::PrometheeDiagnostics;
use crate::topsis::TopsisDiagnostics;

/// Intermediate artifacts retained for auditing, one variant per method.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Diagnostics {
    Topsis(TopsisDiagnostics),
    Ahp(AhpDiagnostics),
    ElectreI(ElectreIDiagnostics),
    ElectreIii(ElectreIiiDiagnostics),
    Promethee(PrometheeDiagnostics),
}

/// Outcome of one method invocation.
///
/// Scores keep the input alternative order; `rankings[i]` is the rank of
/// alternative `i`, with 1 the best. Ranks are assigned by a stable
/// descending sort on score, so tied alternatives keep their original
/// relative order and receive distinct consecutive ranks.
///
/// The result is created once per invocation and never mutated by the
/// engine afterwards; persistence is the caller's concern.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodResult {
    /// Method identifier, e.g. `"TOPSIS"` or `"ELECTRE-III"`.
    pub method: String,

    /// Alternative ids, in input order.
    pub alternative_ids: Vec<String>,

    /// Alternative names, in input order.
    pub alternative_names: Vec<String>,

    /// One score per alternative, in input order. Higher is better.
    pub scores: Vec<f64>,

    /// Rank per alternative, 1 = best.
    pub rankings: Vec<usize>,

    /// Method-specific intermediate computations.
    pub diagnostics: Diagnostics,

    /// Wall-clock duration of the computation, in milliseconds.
    pub execution_ms: f64,
}

impl MethodResult {
    /// Builds a result with rankings derived from the scores.
    pub(crate) fn new(
        method: impl Into<String>,
        matrix: &DecisionMatrix,
        scores: Vec<f64>,
        diagnostics: Diagnostics,
        execution_ms: f64,
    ) -> Self {
        let rankings = rank_descending(&scores);
        Self::with_rankings(method, matrix, scores, rankings, diagnostics, execution_ms)
    }

    /// Builds a result with an externally derived ranking (ELECTRE I
    /// ranks kernel members ahead of the raw score order).
    pub(crate) fn with_rankings(
        method: impl Into<String>,
        matrix: &DecisionMatrix,
        scores: Vec<f64>,
        rankings: Vec<usize>,
        diagnostics: Diagnostics,
        execution_ms: f64,
    ) -> Self {
        Self {
            method: method.into(),
            alternative_ids: matrix.alternatives().iter().map(|a| a.id.clone()).collect(),
            alternative_names: matrix.alternatives().iter().map(|a| a.name.clone()).collect(),
            scores,
            rankings,
            diagnostics,
            execution_ms,
        }
    }

    /// Indices of the alternatives from best to worst rank.
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.rankings.len()).collect();
        indices.sort_by_key(|&i| self.rankings[i]);
        indices
    }

    /// `(id, name, score)` of the rank-1 alternative.
    pub fn best_alternative(&self) -> (&str, &str, f64) {
        let best = self
            .rankings
            .iter()
            .position(|&r| r == 1)
            .expect("rankings always contain rank 1");
        (
            &self.alternative_ids[best],
            &self.alternative_names[best],
            self.scores[best],
        )
    }
}

/// Ranks indices by descending score; ties keep input order (stable).
pub(crate) fn rank_descending(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    positions_to_ranks(&order)
}

/// Ranks by a two-level key: primary group flag first (true outranks
/// false), then descending score; ties keep input order.
pub(crate) fn rank_grouped(in_group: &[bool], scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        in_group[b].cmp(&in_group[a]).then_with(|| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });
    positions_to_ranks(&order)
}

fn positions_to_ranks(order: &[usize]) -> Vec<usize> {
    let mut ranks = vec![0usize; order.len()];
    for (position, &index) in order.iter().enumerate() {
        ranks[index] = position + 1;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_descending_orders_by_score() {
        assert_eq!(rank_descending(&[0.2, 0.9, 0.5]), vec![3, 1, 2]);
    }

    #[test]
    fn rank_descending_breaks_ties_by_input_order() {
        assert_eq!(rank_descending(&[0.5, 0.5, 0.9]), vec![2, 3, 1]);
    }

    #[test]
    fn rank_grouped_puts_group_members_first() {
        // Index 2 scores highest but is outside the group.
        let ranks = rank_grouped(&[true, true, false], &[0.1, 0.3, 0.8]);
        assert_eq!(ranks, vec![2, 1, 3]);
    }
}
