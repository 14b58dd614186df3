//! Matrix normalization shared by the decision methods.
//!
//! Two entry points cover the two conventions consumers need:
//!
//! - [`normalize`] is direction-aware and produces a "higher is better"
//!   matrix: minimize columns are flipped according to the selected
//!   scheme. ELECTRE, PROMETHEE, and the AHP fallback consume this form.
//! - [`normalize_unsigned`] ignores directions and only rescales.
//!   TOPSIS consumes this form and applies direction handling in its
//!   ideal-solution extrema instead.
//!
//! Degenerate columns never raise: a zero-norm column maps to zeros, a
//! constant column maps to zeros under min-max, a zero-sum column maps
//! to a uniform share. All outputs are dimensionless, in `[-1, 1]` for
//! vector scaling and `[0, 1]` for the other schemes.

use crate::matrix::Direction;

/// Column normalization scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Normalization {
    /// Divide each column by its Euclidean norm.
    #[default]
    Vector,
    /// Rescale each column to `[0, 1]` by its min/max range.
    MinMax,
    /// Divide each column by its sum (shares summing to 1).
    Sum,
    /// Divide each column by its maximum.
    Max,
}

/// Direction-aware normalization: after this transform, larger values
/// are better on every column.
///
/// - `Vector`: Euclidean scaling, sign inverted on minimize columns.
/// - `MinMax`: `(x - min)/(max - min)` for maximize, `(max - x)/(max - min)`
///   for minimize; a constant column maps to zeros.
/// - `Sum`: maximize columns become shares `x / Σx`; minimize columns
///   invert non-zero cells to `1/x` before taking shares.
/// - `Max`: maximize columns become `x / max`; minimize columns map
///   non-zero cells to `min_nonzero / x`.
pub fn normalize(
    values: &[Vec<f64>],
    directions: &[Direction],
    kind: Normalization,
) -> Vec<Vec<f64>> {
    let mut out = values.to_vec();
    for j in 0..directions.len() {
        let column: Vec<f64> = values.iter().map(|row| row[j]).collect();
        let scaled = match kind {
            Normalization::Vector => vector_column(&column, directions[j].is_minimize()),
            Normalization::MinMax => minmax_column(&column, directions[j].is_minimize()),
            Normalization::Sum => sum_column(&column, directions[j].is_minimize()),
            Normalization::Max => max_column(&column, directions[j].is_minimize()),
        };
        for (row, v) in out.iter_mut().zip(scaled) {
            row[j] = v;
        }
    }
    out
}

/// Direction-blind normalization: pure rescaling, no sign handling.
pub fn normalize_unsigned(values: &[Vec<f64>], kind: Normalization) -> Vec<Vec<f64>> {
    let n_cols = values.first().map_or(0, Vec::len);
    let mut out = values.to_vec();
    for j in 0..n_cols {
        let column: Vec<f64> = values.iter().map(|row| row[j]).collect();
        let scaled = match kind {
            Normalization::Vector => vector_column(&column, false),
            Normalization::MinMax => minmax_column(&column, false),
            Normalization::Sum => sum_column(&column, false),
            Normalization::Max => max_column(&column, false),
        };
        for (row, v) in out.iter_mut().zip(scaled) {
            row[j] = v;
        }
    }
    out
}

/// Scales weights to unit sum. An all-zero vector falls back to a
/// uniform distribution so downstream aggregation stays well-defined.
pub fn unit_weights(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    if total > 0.0 {
        weights.iter().map(|w| w / total).collect()
    } else {
        vec![1.0 / weights.len() as f64; weights.len()]
    }
}

fn vector_column(column: &[f64], minimize: bool) -> Vec<f64> {
    let norm = column.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm == 0.0 {
        return vec![0.0; column.len()];
    }
    let sign = if minimize { -1.0 } else { 1.0 };
    column.iter().map(|v| sign * v / norm).collect()
}

fn minmax_column(column: &[f64], minimize: bool) -> Vec<f64> {
    let min = column.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = column.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if max <= min {
        // Degenerate column: no discrimination, defined as all zeros.
        return vec![0.0; column.len()];
    }
    let range = max - min;
    if minimize {
        column.iter().map(|v| (max - v) / range).collect()
    } else {
        column.iter().map(|v| (v - min) / range).collect()
    }
}

fn sum_column(column: &[f64], minimize: bool) -> Vec<f64> {
    if minimize {
        let inverted: Vec<f64> = column
            .iter()
            .map(|&v| if v != 0.0 { 1.0 / v } else { 0.0 })
            .collect();
        let total: f64 = inverted.iter().sum();
        if total != 0.0 {
            inverted.iter().map(|v| v / total).collect()
        } else {
            vec![0.0; column.len()]
        }
    } else {
        let total: f64 = column.iter().sum();
        if total != 0.0 {
            column.iter().map(|v| v / total).collect()
        } else {
            vec![1.0 / column.len() as f64; column.len()]
        }
    }
}

fn max_column(column: &[f64], minimize: bool) -> Vec<f64> {
    if minimize {
        let min_nonzero = column
            .iter()
            .filter(|&&v| v != 0.0)
            .cloned()
            .fold(f64::INFINITY, f64::min);
        if min_nonzero.is_infinite() {
            return vec![0.0; column.len()];
        }
        column
            .iter()
            .map(|&v| if v != 0.0 { min_nonzero / v } else { 0.0 })
            .collect()
    } else {
        let max = column.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        if max != 0.0 {
            column.iter().map(|v| v / max).collect()
        } else {
            vec![0.0; column.len()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Direction::{Maximize, Minimize};

    const TOL: f64 = 1e-12;

    fn assert_close(actual: &[Vec<f64>], expected: &[Vec<f64>]) {
        for (ra, re) in actual.iter().zip(expected) {
            for (&a, &e) in ra.iter().zip(re) {
                assert!((a - e).abs() < TOL, "expected {e}, got {a}");
            }
        }
    }

    #[test]
    fn vector_unsigned_scales_by_column_norm() {
        let values = vec![vec![3.0], vec![4.0]];
        let n = normalize_unsigned(&values, Normalization::Vector);
        assert_close(&n, &[vec![0.6], vec![0.8]]);
    }

    #[test]
    fn vector_directed_flips_minimize_columns() {
        let values = vec![vec![3.0, 3.0], vec![4.0, 4.0]];
        let n = normalize(&values, &[Maximize, Minimize], Normalization::Vector);
        assert_close(&n, &[vec![0.6, -0.6], vec![0.8, -0.8]]);
    }

    #[test]
    fn vector_zero_column_maps_to_zeros() {
        let values = vec![vec![0.0], vec![0.0]];
        let n = normalize_unsigned(&values, Normalization::Vector);
        assert_close(&n, &[vec![0.0], vec![0.0]]);
    }

    #[test]
    fn minmax_respects_direction() {
        let values = vec![vec![2.0, 2.0], vec![6.0, 6.0], vec![4.0, 4.0]];
        let n = normalize(&values, &[Maximize, Minimize], Normalization::MinMax);
        assert_close(
            &n,
            &[vec![0.0, 1.0], vec![1.0, 0.0], vec![0.5, 0.5]],
        );
    }

    #[test]
    fn minmax_constant_column_maps_to_zeros() {
        let values = vec![vec![5.0], vec![5.0], vec![5.0]];
        let n = normalize(&values, &[Maximize], Normalization::MinMax);
        assert_close(&n, &[vec![0.0], vec![0.0], vec![0.0]]);
        let n = normalize(&values, &[Minimize], Normalization::MinMax);
        assert_close(&n, &[vec![0.0], vec![0.0], vec![0.0]]);
    }

    #[test]
    fn sum_produces_unit_shares() {
        let values = vec![vec![1.0], vec![3.0]];
        let n = normalize(&values, &[Maximize], Normalization::Sum);
        assert_close(&n, &[vec![0.25], vec![0.75]]);
    }

    #[test]
    fn sum_minimize_inverts_before_sharing() {
        // 1/2 and 1/4 give shares 2/3 and 1/3.
        let values = vec![vec![2.0], vec![4.0]];
        let n = normalize(&values, &[Minimize], Normalization::Sum);
        assert_close(&n, &[vec![2.0 / 3.0], vec![1.0 / 3.0]]);
    }

    #[test]
    fn sum_zero_column_falls_back_to_uniform() {
        let values = vec![vec![0.0], vec![0.0]];
        let n = normalize(&values, &[Maximize], Normalization::Sum);
        assert_close(&n, &[vec![0.5], vec![0.5]]);
    }

    #[test]
    fn max_scales_against_column_maximum() {
        let values = vec![vec![2.0], vec![8.0]];
        let n = normalize(&values, &[Maximize], Normalization::Max);
        assert_close(&n, &[vec![0.25], vec![1.0]]);
    }

    #[test]
    fn max_minimize_maps_smallest_nonzero_to_one() {
        let values = vec![vec![2.0], vec![8.0], vec![0.0]];
        let n = normalize(&values, &[Minimize], Normalization::Max);
        assert_close(&n, &[vec![1.0], vec![0.25], vec![0.0]]);
    }

    #[test]
    fn unit_weights_scales_to_one() {
        let w = unit_weights(&[2.0, 3.0, 5.0]);
        assert_close(&[w], &[vec![0.2, 0.3, 0.5]]);
    }

    #[test]
    fn unit_weights_zero_total_is_uniform() {
        let w = unit_weights(&[0.0, 0.0]);
        assert_close(&[w], &[vec![0.5, 0.5]]);
    }
}
