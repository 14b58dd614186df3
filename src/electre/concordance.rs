//! Crisp concordance and discordance (variant I).
//!
//! Inputs are already oriented so larger values are better; weights are
//! unit-sum.

/// Concordance `c(a, b)`: weighted share of criteria on which `a` is at
/// least as good as `b`. Diagonal is 0.
pub(crate) fn concordance_matrix(values: &[Vec<f64>], weights: &[f64]) -> Vec<Vec<f64>> {
    let n = values.len();
    let total: f64 = weights.iter().sum();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let agreeing: f64 = weights
                .iter()
                .enumerate()
                .filter(|&(k, _)| values[i][k] >= values[j][k])
                .map(|(_, &w)| w)
                .sum();
            matrix[i][j] = if total > 0.0 { agreeing / total } else { 0.0 };
        }
    }
    matrix
}

/// Discordance `d(a, b)`: the worst normalized gap on the criteria where
/// `b` beats `a`, scaled by the value range observed over those
/// criteria. Zero-weight criteria cannot raise discordance. Diagonal
/// is 0; an empty discordant set or a zero range yields 0.
pub(crate) fn discordance_matrix(values: &[Vec<f64>], weights: &[f64]) -> Vec<Vec<f64>> {
    let n = values.len();
    let m = weights.len();
    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let discordant: Vec<usize> = (0..m)
                .filter(|&k| weights[k] > 0.0 && values[i][k] < values[j][k])
                .collect();
            if discordant.is_empty() {
                continue;
            }
            let worst_gap = discordant
                .iter()
                .map(|&k| values[j][k] - values[i][k])
                .fold(0.0, f64::max);
            let mut low = f64::INFINITY;
            let mut high = f64::NEG_INFINITY;
            for row in values {
                for &k in &discordant {
                    low = low.min(row[k]);
                    high = high.max(row[k]);
                }
            }
            let range = high - low;
            matrix[i][j] = if range > 0.0 { worst_gap / range } else { 0.0 };
        }
    }
    matrix
}
