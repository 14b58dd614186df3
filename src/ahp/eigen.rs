//! Principal eigenvector extraction and consistency checking.
//!
//! Power iteration with L1 normalization each step, a fixed iteration
//! cap, and a convergence tolerance. For positive reciprocal matrices
//! the iteration converges to the principal eigenvector; no external
//! linear-algebra dependency is involved, so results are reproducible
//! bit-for-bit across platforms.

/// Saaty's random consistency index, indexed by matrix order (0 and 1
/// unused). Orders above 15 reuse the order-15 value.
const RANDOM_INDEX: [f64; 16] = [
    0.0, 0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48, 1.56, 1.57, 1.59,
];

/// Consistency of one pairwise-comparison matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsistencyReport {
    /// Principal eigenvalue of the comparison matrix.
    pub lambda_max: f64,
    /// Consistency index `|λmax − n| / (n − 1)`. The absolute value
    /// absorbs the slight sub-`n` eigenvalues finite precision can
    /// produce for a perfectly consistent matrix.
    pub index: f64,
    /// Consistency ratio `CI / RI`.
    pub ratio: f64,
    /// Whether the ratio is within the configured threshold.
    pub consistent: bool,
}

impl ConsistencyReport {
    /// Report for weight sources that involve no judgment matrix.
    pub(crate) fn trivial(order: usize) -> Self {
        Self {
            lambda_max: order as f64,
            index: 0.0,
            ratio: 0.0,
            consistent: true,
        }
    }

    pub(crate) fn from_eigenvalue(lambda_max: f64, order: usize, threshold: f64) -> Self {
        let index = if order > 1 {
            (lambda_max - order as f64).abs() / (order as f64 - 1.0)
        } else {
            0.0
        };
        let random = RANDOM_INDEX[order.min(RANDOM_INDEX.len() - 1)];
        let ratio = if random > 0.0 { index / random } else { 0.0 };
        Self {
            lambda_max,
            index,
            ratio,
            consistent: ratio <= threshold,
        }
    }
}

/// Computes the principal eigenvector (unit L1 norm) and eigenvalue of
/// a positive square matrix by power iteration.
///
/// Iteration stops when the largest componentwise change falls below
/// `tolerance` or after `max_iterations` steps, whichever comes first,
/// so termination is always bounded.
pub(crate) fn principal_eigenvector(
    matrix: &[Vec<f64>],
    max_iterations: usize,
    tolerance: f64,
) -> (Vec<f64>, f64) {
    let n = matrix.len();
    let mut weights = vec![1.0 / n as f64; n];

    for _ in 0..max_iterations {
        let next = apply(matrix, &weights);
        let total: f64 = next.iter().sum();
        let next: Vec<f64> = next.iter().map(|v| v / total).collect();
        let delta = weights
            .iter()
            .zip(&next)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        weights = next;
        if delta < tolerance {
            break;
        }
    }

    // With unit-sum weights, λmax is the sum of A·w.
    let lambda_max: f64 = apply(matrix, &weights).iter().sum();
    (weights, lambda_max)
}

fn apply(matrix: &[Vec<f64>], vector: &[f64]) -> Vec<f64> {
    matrix
        .iter()
        .map(|row| row.iter().zip(vector).map(|(a, w)| a * w).sum())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn recovers_weights_from_consistent_ratios() {
        // Matrix built from true ratios of [0.6, 0.3, 0.1].
        let true_weights = [0.6, 0.3, 0.1];
        let matrix: Vec<Vec<f64>> = true_weights
            .iter()
            .map(|a| true_weights.iter().map(|b| a / b).collect())
            .collect();
        let (weights, lambda_max) = principal_eigenvector(&matrix, 100, 1e-12);
        for (w, e) in weights.iter().zip(true_weights) {
            assert!((w - e).abs() < TOL, "expected {e}, got {w}");
        }
        assert!((lambda_max - 3.0).abs() < TOL);
    }

    #[test]
    fn saaty_example_eigenvalue() {
        let matrix = vec![
            vec![1.0, 3.0, 5.0],
            vec![1.0 / 3.0, 1.0, 3.0],
            vec![1.0 / 5.0, 1.0 / 3.0, 1.0],
        ];
        let (weights, lambda_max) = principal_eigenvector(&matrix, 100, 1e-12);
        let expected = [0.636985572, 0.258284994, 0.104729434];
        for (w, e) in weights.iter().zip(expected) {
            assert!((w - e).abs() < TOL, "expected {e}, got {w}");
        }
        assert!((lambda_max - 3.038511091).abs() < TOL);
    }

    #[test]
    fn consistency_report_for_saaty_example() {
        let report = ConsistencyReport::from_eigenvalue(3.038511091, 3, 0.1);
        assert!((report.index - 0.019255545).abs() < TOL);
        assert!((report.ratio - 0.033199216).abs() < TOL);
        assert!(report.consistent);
    }

    #[test]
    fn order_one_and_two_are_always_consistent() {
        let report = ConsistencyReport::from_eigenvalue(1.0, 1, 0.1);
        assert!(report.consistent);
        assert!(report.ratio.abs() < TOL);
        let report = ConsistencyReport::from_eigenvalue(2.0, 2, 0.1);
        assert!(report.consistent);
    }

    #[test]
    fn sub_order_eigenvalue_is_clamped() {
        // Finite precision can land λmax a hair under n; CI must not go
        // negative.
        let report = ConsistencyReport::from_eigenvalue(3.0 - 1e-13, 3, 0.1);
        assert!(report.index >= 0.0);
        assert!(report.consistent);
    }

    #[test]
    fn cyclic_judgments_are_flagged() {
        let matrix = vec![
            vec![1.0, 9.0, 1.0 / 9.0],
            vec![1.0 / 9.0, 1.0, 9.0],
            vec![9.0, 1.0 / 9.0, 1.0],
        ];
        let (weights, lambda_max) = principal_eigenvector(&matrix, 100, 1e-12);
        for w in &weights {
            assert!((w - 1.0 / 3.0).abs() < TOL);
        }
        assert!((lambda_max - 91.0 / 9.0).abs() < TOL);
        let report = ConsistencyReport::from_eigenvalue(lambda_max, 3, 0.1);
        assert!(!report.consistent);
        assert!((report.ratio - 6.130268199).abs() < 1e-6);
    }
}
