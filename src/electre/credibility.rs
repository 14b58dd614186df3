//! Partial concordance, veto discordance, and credibility (variant III).
//!
//! All computations run on a matrix oriented so larger values are
//! better. Thresholds are resolved per criterion up front; absent
//! thresholds disable their effect (no indifference band, preference
//! collapsing onto the band, no veto).

use super::config::{ThresholdValue, Thresholds};
use crate::error::McdmError;

/// Thresholds with scale proportionality already applied.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedThresholds {
    /// Indifference `q` (0 when disabled).
    pub q: f64,
    /// Preference `p`, always `>= q` (`q` itself when disabled).
    pub p: f64,
    /// Veto `v`, always `>= p`; `None` disables the veto.
    pub v: Option<f64>,
}

/// Resolves per-criterion thresholds against the observed column ranges
/// of the working matrix, enforcing `q <= p <= v`.
pub(crate) fn resolve_thresholds(
    thresholds: &[Thresholds],
    values: &[Vec<f64>],
) -> Result<Vec<ResolvedThresholds>, McdmError> {
    let mut resolved = Vec::with_capacity(thresholds.len());
    for (j, t) in thresholds.iter().enumerate() {
        let range = column_range(values, j);
        let q = t.indifference.map(|v| apply_scale(v, range)).unwrap_or(0.0);
        let p = t.preference.map(|v| apply_scale(v, range)).unwrap_or(q);
        let v = t.veto.map(|value| apply_scale(value, range));
        if p < q {
            return Err(invalid(format!(
                "criterion {j}: preference threshold {p} is below indifference threshold {q}"
            )));
        }
        if let Some(v) = v {
            if v < p {
                return Err(invalid(format!(
                    "criterion {j}: veto threshold {v} is below preference threshold {p}"
                )));
            }
        }
        resolved.push(ResolvedThresholds { q, p, v });
    }
    Ok(resolved)
}

/// Partial concordance for a signed difference `d` (positive favors `a`):
/// 1 down to `-q`, 0 beyond `-p`, linear in between.
pub(crate) fn partial_concordance(d: f64, t: &ResolvedThresholds) -> f64 {
    if d >= -t.q {
        1.0
    } else if d <= -t.p {
        0.0
    } else {
        (t.p + d) / (t.p - t.q)
    }
}

/// Per-criterion discordance for an adverse gap `e` (how far `b` exceeds
/// `a`): 0 up to `p`, full veto at `v`, linear in between. Without a
/// veto threshold the criterion can never discord.
pub(crate) fn discordance(e: f64, t: &ResolvedThresholds) -> f64 {
    match t.v {
        None => 0.0,
        Some(v) => {
            if e <= t.p {
                0.0
            } else if e >= v {
                1.0
            } else {
                (e - t.p) / (v - t.p)
            }
        }
    }
}

/// Builds the global concordance and credibility matrices. Both have a
/// zero diagonal; credibility discounts concordance by every criterion
/// whose discordance exceeds it.
pub(crate) fn credibility_matrix(
    values: &[Vec<f64>],
    weights: &[f64],
    thresholds: &[ResolvedThresholds],
) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let n = values.len();
    let m = weights.len();
    let mut concordance = vec![vec![0.0; n]; n];
    let mut credibility = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let global: f64 = (0..m)
                .map(|k| weights[k] * partial_concordance(values[i][k] - values[j][k], &thresholds[k]))
                .sum();
            concordance[i][j] = global;

            let mut sigma = global;
            for k in 0..m {
                if weights[k] == 0.0 {
                    continue;
                }
                let d = discordance(values[j][k] - values[i][k], &thresholds[k]);
                if d > global {
                    // d > global implies global < 1, so the division is safe.
                    sigma *= (1.0 - d) / (1.0 - global);
                }
            }
            credibility[i][j] = sigma;
        }
    }
    (concordance, credibility)
}

fn column_range(values: &[Vec<f64>], j: usize) -> f64 {
    let mut low = f64::INFINITY;
    let mut high = f64::NEG_INFINITY;
    for row in values {
        low = low.min(row[j]);
        high = high.max(row[j]);
    }
    high - low
}

fn apply_scale(value: ThresholdValue, range: f64) -> f64 {
    match value {
        ThresholdValue::Fixed(v) => v,
        ThresholdValue::Proportional(fraction) => fraction * range,
    }
}

fn invalid(reason: String) -> McdmError {
    McdmError::InvalidParameter {
        method: "ELECTRE",
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn fixed(q: f64, p: f64, v: f64) -> ResolvedThresholds {
        ResolvedThresholds { q, p, v: Some(v) }
    }

    #[test]
    fn partial_concordance_is_piecewise_linear() {
        let t = fixed(0.1, 0.3, 0.5);
        assert!((partial_concordance(0.4, &t) - 1.0).abs() < TOL);
        assert!((partial_concordance(-0.1, &t) - 1.0).abs() < TOL);
        assert!(partial_concordance(-0.3, &t).abs() < TOL);
        assert!(partial_concordance(-0.5, &t).abs() < TOL);
        // Midpoint of the band.
        assert!((partial_concordance(-0.2, &t) - 0.5).abs() < TOL);
    }

    #[test]
    fn collapsed_band_is_a_step() {
        // q == p: no interpolation zone, and no division by zero.
        let t = ResolvedThresholds { q: 0.0, p: 0.0, v: None };
        assert!((partial_concordance(0.0, &t) - 1.0).abs() < TOL);
        assert!(partial_concordance(-1e-9, &t).abs() < TOL);
    }

    #[test]
    fn discordance_interpolates_between_p_and_v() {
        let t = fixed(0.1, 0.2, 0.6);
        assert!(discordance(0.2, &t).abs() < TOL);
        assert!((discordance(0.4, &t) - 0.5).abs() < TOL);
        assert!((discordance(0.6, &t) - 1.0).abs() < TOL);
        assert!((discordance(0.9, &t) - 1.0).abs() < TOL);
    }

    #[test]
    fn missing_veto_never_discords() {
        let t = ResolvedThresholds { q: 0.1, p: 0.2, v: None };
        assert!(discordance(100.0, &t).abs() < TOL);
    }

    #[test]
    fn proportional_thresholds_resolve_against_column_range() {
        let values = vec![vec![0.0], vec![10.0]];
        let resolved = resolve_thresholds(
            &[Thresholds {
                indifference: Some(ThresholdValue::Proportional(0.05)),
                preference: Some(ThresholdValue::Proportional(0.1)),
                veto: None,
            }],
            &values,
        )
        .unwrap();
        assert!((resolved[0].q - 0.5).abs() < TOL);
        assert!((resolved[0].p - 1.0).abs() < TOL);
        assert!(resolved[0].v.is_none());
    }

    #[test]
    fn inverted_threshold_order_is_rejected() {
        let values = vec![vec![0.0], vec![1.0]];
        let err = resolve_thresholds(
            &[Thresholds {
                indifference: Some(ThresholdValue::Fixed(0.3)),
                preference: Some(ThresholdValue::Fixed(0.1)),
                veto: None,
            }],
            &values,
        )
        .unwrap_err();
        assert!(matches!(err, McdmError::InvalidParameter { .. }));
    }

    #[test]
    fn full_veto_zeroes_credibility() {
        // One criterion strongly for a, the other vetoes.
        let values = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let thresholds = vec![fixed(0.0, 0.1, 0.5), fixed(0.0, 0.1, 0.5)];
        let (concordance, credibility) =
            credibility_matrix(&values, &[0.7, 0.3], &thresholds);
        assert!((concordance[0][1] - 0.7).abs() < TOL);
        // Criterion 2's gap of 1.0 >= veto 0.5: discordance 1, sigma 0.
        assert!(credibility[0][1].abs() < TOL);
    }

    #[test]
    fn empty_discordance_set_leaves_concordance() {
        let values = vec![vec![0.6, 0.6], vec![0.5, 0.5]];
        let thresholds = vec![fixed(0.1, 0.2, 0.5), fixed(0.1, 0.2, 0.5)];
        let (concordance, credibility) =
            credibility_matrix(&values, &[0.5, 0.5], &thresholds);
        assert!((credibility[0][1] - concordance[0][1]).abs() < TOL);
        assert!((credibility[1][0] - concordance[1][0]).abs() < TOL);
    }
}
