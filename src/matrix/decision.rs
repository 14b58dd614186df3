//! The decision matrix and its construction-time invariants.

use super::{Alternative, Criterion, Direction, Scale};
use crate::error::McdmError;

/// Alternatives × criteria performance table.
///
/// Invariants, enforced by [`DecisionMatrix::new`]:
///
/// - at least one alternative and one criterion;
/// - one row per alternative, one column per criterion;
/// - every cell finite (no NaN, no infinities, no missing values);
/// - every criterion weight finite and `>= 0`.
///
/// The matrix is immutable after construction; methods never mutate it
/// and never retain references to it across calls. Serialization is
/// one-way: rebuilding from stored data goes through [`DecisionMatrix::new`]
/// so the invariants are re-checked.
///
/// # Examples
///
/// ```
/// use mcdm_engine::matrix::{Alternative, Criterion, DecisionMatrix, Direction};
///
/// let matrix = DecisionMatrix::new(
///     vec![Alternative::new("a1", "A"), Alternative::new("a2", "B")],
///     vec![
///         Criterion::new("c1", "Price", Direction::Minimize, 0.5),
///         Criterion::new("c2", "Speed", Direction::Maximize, 0.5),
///     ],
///     vec![vec![100.0, 3.2], vec![80.0, 2.5]],
/// )
/// .unwrap();
/// assert_eq!(matrix.shape(), (2, 2));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecisionMatrix {
    alternatives: Vec<Alternative>,
    criteria: Vec<Criterion>,
    values: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Builds a matrix, validating every shape and value invariant.
    pub fn new(
        alternatives: Vec<Alternative>,
        criteria: Vec<Criterion>,
        values: Vec<Vec<f64>>,
    ) -> Result<Self, McdmError> {
        if alternatives.is_empty() || criteria.is_empty() {
            return Err(McdmError::EmptyMatrix);
        }
        if values.len() != alternatives.len() {
            return Err(McdmError::RowCountMismatch {
                rows: values.len(),
                alternatives: alternatives.len(),
            });
        }
        for (i, row) in values.iter().enumerate() {
            if row.len() != criteria.len() {
                return Err(McdmError::RowLengthMismatch {
                    row: i,
                    found: row.len(),
                    expected: criteria.len(),
                });
            }
            for (j, cell) in row.iter().enumerate() {
                if !cell.is_finite() {
                    return Err(McdmError::NonFiniteValue { row: i, col: j });
                }
            }
        }
        for criterion in &criteria {
            if !criterion.weight.is_finite() || criterion.weight < 0.0 {
                return Err(McdmError::InvalidWeight {
                    id: criterion.id.clone(),
                    weight: criterion.weight,
                });
            }
        }
        Ok(Self {
            alternatives,
            criteria,
            values,
        })
    }

    pub fn n_alternatives(&self) -> usize {
        self.alternatives.len()
    }

    pub fn n_criteria(&self) -> usize {
        self.criteria.len()
    }

    /// `(alternatives, criteria)` dimensions.
    pub fn shape(&self) -> (usize, usize) {
        (self.alternatives.len(), self.criteria.len())
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Performance of alternative `row` on criterion `col`.
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    /// Copies out the column for criterion `col`.
    pub fn column(&self, col: usize) -> Vec<f64> {
        self.values.iter().map(|row| row[col]).collect()
    }

    /// Criterion weights, in column order.
    pub fn weights(&self) -> Vec<f64> {
        self.criteria.iter().map(|c| c.weight).collect()
    }

    /// Optimization directions, in column order.
    pub fn directions(&self) -> Vec<Direction> {
        self.criteria.iter().map(|c| c.direction).collect()
    }

    /// Rejects matrices that carry qualitative criteria.
    ///
    /// Called by every numeric method before computation.
    pub fn ensure_quantitative(&self) -> Result<(), McdmError> {
        for criterion in &self.criteria {
            if criterion.scale == Scale::Qualitative {
                return Err(McdmError::QualitativeCriterion {
                    id: criterion.id.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alts(n: usize) -> Vec<Alternative> {
        (0..n)
            .map(|i| Alternative::new(format!("a{i}"), format!("Alt {i}")))
            .collect()
    }

    fn crits(weights: &[f64]) -> Vec<Criterion> {
        weights
            .iter()
            .enumerate()
            .map(|(j, &w)| Criterion::new(format!("c{j}"), format!("Crit {j}"), Direction::Maximize, w))
            .collect()
    }

    #[test]
    fn valid_matrix_builds() {
        let m = DecisionMatrix::new(
            alts(2),
            crits(&[0.5, 0.5]),
            vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        )
        .unwrap();
        assert_eq!(m.shape(), (2, 2));
        assert_eq!(m.column(1), vec![2.0, 4.0]);
        assert!((m.value(1, 0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_matrix_rejected() {
        let err = DecisionMatrix::new(vec![], crits(&[1.0]), vec![]).unwrap_err();
        assert_eq!(err, McdmError::EmptyMatrix);
    }

    #[test]
    fn row_count_mismatch_rejected() {
        let err =
            DecisionMatrix::new(alts(2), crits(&[1.0]), vec![vec![1.0]]).unwrap_err();
        assert_eq!(
            err,
            McdmError::RowCountMismatch {
                rows: 1,
                alternatives: 2
            }
        );
    }

    #[test]
    fn ragged_row_rejected() {
        let err = DecisionMatrix::new(
            alts(2),
            crits(&[0.5, 0.5]),
            vec![vec![1.0, 2.0], vec![3.0]],
        )
        .unwrap_err();
        assert_eq!(
            err,
            McdmError::RowLengthMismatch {
                row: 1,
                found: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn nan_cell_rejected() {
        let err = DecisionMatrix::new(
            alts(2),
            crits(&[0.5, 0.5]),
            vec![vec![1.0, f64::NAN], vec![3.0, 4.0]],
        )
        .unwrap_err();
        assert_eq!(err, McdmError::NonFiniteValue { row: 0, col: 1 });
    }

    #[test]
    fn negative_weight_rejected() {
        let err = DecisionMatrix::new(
            alts(1),
            crits(&[-0.1]),
            vec![vec![1.0]],
        )
        .unwrap_err();
        assert!(matches!(err, McdmError::InvalidWeight { .. }));
    }

    #[test]
    fn qualitative_criterion_rejected_by_numeric_guard() {
        let mut criteria = crits(&[1.0]);
        criteria[0] = criteria[0].clone().with_scale(Scale::Qualitative);
        let m = DecisionMatrix::new(alts(1), criteria, vec![vec![1.0]]).unwrap();
        assert!(matches!(
            m.ensure_quantitative(),
            Err(McdmError::QualitativeCriterion { .. })
        ));
    }
}
