//! PROMETHEE execution.

use std::time::Instant;

use super::config::{PrometheeConfig, PrometheeVariant};
use super::preference::PreferenceFunction;
use crate::error::McdmError;
use crate::matrix::DecisionMatrix;
use crate::method::{Diagnostics, MethodResult};
use crate::normalization::{normalize, unit_weights};

/// Intermediate artifacts of a PROMETHEE run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrometheeDiagnostics {
    /// Working matrix after direction-aware normalization.
    pub normalized: Vec<Vec<f64>>,
    /// Aggregated preference `Π(a, b)`, diagonal 0.
    pub preference: Vec<Vec<f64>>,
    /// Positive (leaving) flow `φ+`.
    pub positive_flow: Vec<f64>,
    /// Negative (entering) flow `φ-`.
    pub negative_flow: Vec<f64>,
    /// Net flow `φ = φ+ − φ-`.
    pub net_flow: Vec<f64>,
    /// Variant I only: partial-order relation (1 outranks, 0.5
    /// indifferent).
    pub outranking: Option<Vec<Vec<f64>>>,
    /// Variant I only: incomparable pairs `(i, j)` with `i < j`.
    pub incomparabilities: Option<Vec<(usize, usize)>>,
}

/// Executes PROMETHEE I or II over a decision matrix.
pub struct PrometheeRunner;

impl PrometheeRunner {
    pub fn run(
        matrix: &DecisionMatrix,
        config: &PrometheeConfig,
    ) -> Result<MethodResult, McdmError> {
        matrix.ensure_quantitative()?;
        config.validate()?;
        let start = Instant::now();

        let (n, m) = matrix.shape();
        let weights = unit_weights(&matrix.weights());
        let working = if config.skip_normalization {
            matrix.values().to_vec()
        } else {
            normalize(matrix.values(), &matrix.directions(), config.normalization)
        };

        let functions: Vec<PreferenceFunction> = match &config.functions {
            Some(functions) => {
                if functions.len() != m {
                    return Err(McdmError::InvalidParameter {
                        method: "PROMETHEE",
                        reason: format!(
                            "expected {m} preference functions, got {}",
                            functions.len()
                        ),
                    });
                }
                functions.clone()
            }
            None => vec![config.default_function; m],
        };

        // Aggregated preference matrix over the oriented differences; the
        // normalization already flipped minimize columns, so no second
        // sign handling happens here.
        let mut preference = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                preference[i][j] = (0..m)
                    .map(|k| weights[k] * functions[k].evaluate(working[i][k] - working[j][k]))
                    .sum();
            }
        }

        let scale = if n > 1 { (n - 1) as f64 } else { 1.0 };
        let positive_flow: Vec<f64> = preference
            .iter()
            .map(|row| row.iter().sum::<f64>() / scale)
            .collect();
        let negative_flow: Vec<f64> = (0..n)
            .map(|i| preference.iter().map(|row| row[i]).sum::<f64>() / scale)
            .collect();
        let net_flow: Vec<f64> = positive_flow
            .iter()
            .zip(&negative_flow)
            .map(|(p, n)| p - n)
            .collect();

        let (method, outranking, incomparabilities) = match config.variant {
            PrometheeVariant::I => {
                let (outranking, incomparabilities) =
                    partial_order(&positive_flow, &negative_flow);
                ("PROMETHEE-I", Some(outranking), Some(incomparabilities))
            }
            PrometheeVariant::Ii => ("PROMETHEE-II", None, None),
        };

        let diagnostics = Diagnostics::Promethee(PrometheeDiagnostics {
            normalized: working,
            preference,
            positive_flow,
            negative_flow,
            net_flow: net_flow.clone(),
            outranking,
            incomparabilities,
        });

        Ok(MethodResult::new(
            method,
            matrix,
            net_flow,
            diagnostics,
            start.elapsed().as_secs_f64() * 1e3,
        ))
    }
}

/// Variant I partial order: `a` outranks `b` when it is at least as good
/// on both flows and strictly better on one; equal flows mean
/// indifference (0.5 both ways); opposite flow orderings mean the pair
/// is incomparable.
fn partial_order(
    positive_flow: &[f64],
    negative_flow: &[f64],
) -> (Vec<Vec<f64>>, Vec<(usize, usize)>) {
    let n = positive_flow.len();
    let mut outranking = vec![vec![0.0; n]; n];
    let mut incomparabilities = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let better_positive = positive_flow[i] > positive_flow[j];
            let equal_positive = positive_flow[i] == positive_flow[j];
            let better_negative = negative_flow[i] < negative_flow[j];
            let equal_negative = negative_flow[i] == negative_flow[j];
            if (better_positive && (better_negative || equal_negative))
                || (equal_positive && better_negative)
            {
                outranking[i][j] = 1.0;
            } else if equal_positive && equal_negative {
                outranking[i][j] = 0.5;
                outranking[j][i] = 0.5;
            } else if i < j && better_positive != better_negative && !equal_positive && !equal_negative {
                incomparabilities.push((i, j));
            }
        }
    }
    (outranking, incomparabilities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{Alternative, Criterion, Direction};
    use proptest::prelude::*;

    const TOL: f64 = 1e-9;

    fn assert_vec_close(actual: &[f64], expected: &[f64]) {
        for (&a, &e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < TOL, "expected {e}, got {a}");
        }
    }

    fn sample_matrix() -> DecisionMatrix {
        DecisionMatrix::new(
            vec![
                Alternative::new("a1", "A1"),
                Alternative::new("a2", "A2"),
                Alternative::new("a3", "A3"),
                Alternative::new("a4", "A4"),
            ],
            vec![
                Criterion::new("c1", "C1", Direction::Maximize, 0.4),
                Criterion::new("c2", "C2", Direction::Maximize, 0.35),
                Criterion::new("c3", "C3", Direction::Maximize, 0.25),
            ],
            vec![
                vec![8.0, 7.0, 6.0],
                vec![6.0, 8.0, 7.0],
                vec![7.0, 6.0, 8.0],
                vec![3.0, 3.0, 3.0],
            ],
        )
        .unwrap()
    }

    #[test]
    fn net_flows_match_reference() {
        let result = PrometheeRunner::run(&sample_matrix(), &PrometheeConfig::default()).unwrap();
        assert_vec_close(&result.scores, &[0.433333333, 0.3, 0.266666667, -1.0]);
        assert_eq!(result.rankings, vec![1, 2, 3, 4]);
        assert_eq!(result.method, "PROMETHEE-II");
        let Diagnostics::Promethee(diag) = &result.diagnostics else {
            panic!("expected PROMETHEE diagnostics");
        };
        assert_vec_close(
            &diag.positive_flow,
            &[0.716666667, 0.65, 0.633333333, 0.0],
        );
        assert_vec_close(
            &diag.negative_flow,
            &[0.283333333, 0.35, 0.366666667, 1.0],
        );
        assert!(diag.outranking.is_none());
    }

    #[test]
    fn per_criterion_functions_match_reference() {
        let config = PrometheeConfig::default().with_functions(vec![
            PreferenceFunction::Usual,
            PreferenceFunction::Linear { q: 0.1, p: 0.3 },
            PreferenceFunction::Gaussian { s: 0.15 },
        ]);
        let result = PrometheeRunner::run(&sample_matrix(), &config).unwrap();
        assert_vec_close(
            &result.scores,
            &[0.469945194, 0.241666611, 0.288360184, -0.999971989],
        );
    }

    #[test]
    fn variant_i_reports_partial_order() {
        // 1 and 2 trade flow orderings (incomparable); 0 outranks
        // everything and everything outranks 3.
        let matrix = DecisionMatrix::new(
            vec![
                Alternative::new("a", "A"),
                Alternative::new("b", "B"),
                Alternative::new("c", "C"),
                Alternative::new("d", "D"),
            ],
            vec![
                Criterion::new("c1", "C1", Direction::Maximize, 0.6),
                Criterion::new("c2", "C2", Direction::Maximize, 0.4),
            ],
            vec![
                vec![1.0, 0.0],
                vec![0.5, 0.2],
                vec![0.0, 1.0],
                vec![0.0, 0.0],
            ],
        )
        .unwrap();
        let config = PrometheeConfig::variant_i()
            .with_default_function(PreferenceFunction::VShape { p: 1.0 });
        let result = PrometheeRunner::run(&matrix, &config).unwrap();
        assert_eq!(result.method, "PROMETHEE-I");
        assert_vec_close(&result.scores, &[0.34, 0.046666667, 0.073333333, -0.46]);
        assert_eq!(result.rankings, vec![1, 3, 2, 4]);
        let Diagnostics::Promethee(diag) = &result.diagnostics else {
            panic!("expected PROMETHEE diagnostics");
        };
        let outranking = diag.outranking.as_ref().unwrap();
        for (i, j) in [(0, 1), (0, 2), (0, 3), (1, 3), (2, 3)] {
            assert!((outranking[i][j] - 1.0).abs() < TOL, "expected {i} to outrank {j}");
            assert!(outranking[j][i].abs() < TOL);
        }
        assert!(outranking[1][2].abs() < TOL);
        assert!(outranking[2][1].abs() < TOL);
        assert_eq!(diag.incomparabilities.as_ref().unwrap(), &vec![(1, 2)]);
    }

    #[test]
    fn minimize_criteria_are_not_double_inverted() {
        // Same problem expressed twice: once as a cost to minimize, once
        // as the mirrored benefit. Flows must agree.
        let cost = DecisionMatrix::new(
            vec![Alternative::new("a", "A"), Alternative::new("b", "B")],
            vec![Criterion::new("c", "Cost", Direction::Minimize, 1.0)],
            vec![vec![2.0], vec![8.0]],
        )
        .unwrap();
        let benefit = DecisionMatrix::new(
            vec![Alternative::new("a", "A"), Alternative::new("b", "B")],
            vec![Criterion::new("c", "Benefit", Direction::Maximize, 1.0)],
            vec![vec![8.0], vec![2.0]],
        )
        .unwrap();
        let config = PrometheeConfig::default();
        let from_cost = PrometheeRunner::run(&cost, &config).unwrap();
        let from_benefit = PrometheeRunner::run(&benefit, &config).unwrap();
        assert_vec_close(&from_cost.scores, &from_benefit.scores);
        assert_eq!(from_cost.rankings, vec![1, 2]);
    }

    #[test]
    fn wrong_function_count_is_rejected() {
        let config =
            PrometheeConfig::default().with_functions(vec![PreferenceFunction::Usual]);
        let err = PrometheeRunner::run(&sample_matrix(), &config).unwrap_err();
        assert!(matches!(
            err,
            McdmError::InvalidParameter {
                method: "PROMETHEE",
                ..
            }
        ));
    }

    #[test]
    fn single_alternative_has_zero_flow() {
        let matrix = DecisionMatrix::new(
            vec![Alternative::new("only", "Only")],
            vec![Criterion::new("c1", "C1", Direction::Maximize, 1.0)],
            vec![vec![5.0]],
        )
        .unwrap();
        let result = PrometheeRunner::run(&matrix, &PrometheeConfig::default()).unwrap();
        assert_vec_close(&result.scores, &[0.0]);
        assert_eq!(result.rankings, vec![1]);
    }

    proptest! {
        /// Net flows always sum to zero: every `Π(a, b)` appears once
        /// positively and once negatively across the flow sums.
        #[test]
        fn net_flows_sum_to_zero(
            rows in prop::collection::vec(
                prop::collection::vec(0.0f64..100.0, 3),
                2..7,
            )
        ) {
            let alternatives = (0..rows.len())
                .map(|i| Alternative::new(format!("a{i}"), format!("A{i}")))
                .collect();
            let criteria = vec![
                Criterion::new("c1", "C1", Direction::Minimize, 0.5),
                Criterion::new("c2", "C2", Direction::Maximize, 0.3),
                Criterion::new("c3", "C3", Direction::Maximize, 0.2),
            ];
            let matrix = DecisionMatrix::new(alternatives, criteria, rows).unwrap();
            let result = PrometheeRunner::run(&matrix, &PrometheeConfig::default()).unwrap();
            let total: f64 = result.scores.iter().sum();
            prop_assert!(total.abs() < 1e-9, "net flows sum to {total}");
        }
    }
}
