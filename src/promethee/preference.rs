//! Preference function families.

use crate::error::McdmError;

/// Maps a positive performance difference to a preference degree in
/// `[0, 1]`. A non-positive difference always maps to 0.
///
/// Thresholds live on the same scale as the compared values; with the
/// default min-max normalization that scale is `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PreferenceFunction {
    /// Any positive difference is full preference.
    Usual,

    /// Step at the indifference threshold `q`.
    UShape { q: f64 },

    /// Linear ramp from 0 to full preference over `[0, p]`.
    VShape { p: f64 },

    /// Half preference between `q` and `p`, full above.
    Level { q: f64, p: f64 },

    /// Linear ramp between the indifference band `q` and full
    /// preference at `p`.
    Linear { q: f64, p: f64 },

    /// Smooth `1 - exp(-d²/2s²)` growth.
    Gaussian { s: f64 },
}

impl Default for PreferenceFunction {
    fn default() -> Self {
        PreferenceFunction::VShape { p: 0.2 }
    }
}

impl PreferenceFunction {
    /// Preference degree for a signed difference (positive favors the
    /// first alternative).
    pub fn evaluate(&self, diff: f64) -> f64 {
        if diff <= 0.0 {
            return 0.0;
        }
        match *self {
            PreferenceFunction::Usual => 1.0,
            PreferenceFunction::UShape { q } => {
                if diff <= q {
                    0.0
                } else {
                    1.0
                }
            }
            PreferenceFunction::VShape { p } => {
                if p > 0.0 {
                    (diff / p).min(1.0)
                } else {
                    1.0
                }
            }
            PreferenceFunction::Level { q, p } => {
                if diff <= q {
                    0.0
                } else if diff <= p {
                    0.5
                } else {
                    1.0
                }
            }
            PreferenceFunction::Linear { q, p } => {
                if diff <= q {
                    0.0
                } else if diff <= p {
                    // q < diff <= p implies p > q, so no division by zero.
                    (diff - q) / (p - q)
                } else {
                    1.0
                }
            }
            PreferenceFunction::Gaussian { s } => 1.0 - (-(diff * diff) / (2.0 * s * s)).exp(),
        }
    }

    pub(crate) fn validate(&self, label: &str) -> Result<(), McdmError> {
        let check = |name: &str, value: f64, strictly_positive: bool| {
            let ok = value.is_finite() && if strictly_positive { value > 0.0 } else { value >= 0.0 };
            if ok {
                Ok(())
            } else {
                Err(McdmError::InvalidParameter {
                    method: "PROMETHEE",
                    reason: format!(
                        "{label}: {name} threshold must be {} got {value}",
                        if strictly_positive { "positive," } else { "finite and >= 0," }
                    ),
                })
            }
        };
        match *self {
            PreferenceFunction::Usual => Ok(()),
            PreferenceFunction::UShape { q } => check("q", q, false),
            PreferenceFunction::VShape { p } => check("p", p, false),
            PreferenceFunction::Level { q, p } | PreferenceFunction::Linear { q, p } => {
                check("q", q, false)?;
                check("p", p, false)?;
                if p < q {
                    return Err(McdmError::InvalidParameter {
                        method: "PROMETHEE",
                        reason: format!(
                            "{label}: preference threshold {p} is below indifference threshold {q}"
                        ),
                    });
                }
                Ok(())
            }
            PreferenceFunction::Gaussian { s } => check("s", s, true),
        }
    }
}
