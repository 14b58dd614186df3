//! Uniform method contract: name resolution, parameter dispatch, and
//! the evaluation entry points.
//!
//! Callers either hold a concrete parameter set and call [`evaluate`],
//! or resolve a method by its wire name with [`evaluate_named`] and let
//! the defaults apply. Method selection is always an explicit caller
//! decision; the engine never infers a method from the data.

mod result;

pub use result::{Diagnostics, MethodResult};
pub(crate) use result::rank_grouped;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::ahp::{AhpConfig, AhpRunner};
use crate::electre::{ElectreConfig, ElectreRunner, ElectreVariant};
use crate::error::McdmError;
use crate::matrix::DecisionMatrix;
use crate::promethee::{PrometheeConfig, PrometheeRunner, PrometheeVariant};
use crate::topsis::{TopsisConfig, TopsisRunner};

/// Supported decision methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MethodName {
    Topsis,
    Ahp,
    ElectreI,
    ElectreIii,
    PrometheeIi,
}

impl MethodName {
    pub const ALL: [MethodName; 5] = [
        MethodName::Topsis,
        MethodName::Ahp,
        MethodName::ElectreI,
        MethodName::ElectreIii,
        MethodName::PrometheeIi,
    ];

    /// Canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodName::Topsis => "TOPSIS",
            MethodName::Ahp => "AHP",
            MethodName::ElectreI => "ELECTRE-I",
            MethodName::ElectreIii => "ELECTRE-III",
            MethodName::PrometheeIi => "PROMETHEE-II",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            MethodName::Topsis => {
                "Technique for Order of Preference by Similarity to Ideal Solution"
            }
            MethodName::Ahp => "Analytic Hierarchy Process",
            MethodName::ElectreI | MethodName::ElectreIii => {
                "ELimination Et Choix Traduisant la REalité"
            }
            MethodName::PrometheeIi => {
                "Preference Ranking Organization Method for Enrichment of Evaluations"
            }
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MethodName::Topsis => {
                "Ranks alternatives by relative closeness to the positive and \
                 negative ideal solutions. Compensatory; suited to purely \
                 numeric criteria."
            }
            MethodName::Ahp => {
                "Derives priorities from pairwise comparisons via principal \
                 eigenvectors and checks judgment consistency. Suited to \
                 problems mixing subjective and objective factors."
            }
            MethodName::ElectreI => {
                "Crisp outranking with concordance and discordance thresholds; \
                 selects the kernel of non-dominated alternatives. \
                 Non-compensatory; suited to selection problems."
            }
            MethodName::ElectreIii => {
                "Fuzzy outranking with indifference, preference, and veto \
                 thresholds; ranks by net credibility flow. Non-compensatory; \
                 tolerant of imprecise data."
            }
            MethodName::PrometheeIi => {
                "Pairwise preference functions aggregated into net outranking \
                 flows for a complete ranking. Preference modeling per \
                 criterion via six function families."
            }
        }
    }

    /// Default parameter set for this method.
    pub fn default_params(&self) -> MethodParams {
        match self {
            MethodName::Topsis => MethodParams::Topsis(TopsisConfig::default()),
            MethodName::Ahp => MethodParams::Ahp(AhpConfig::default()),
            MethodName::ElectreI => MethodParams::Electre(ElectreConfig::variant_i()),
            MethodName::ElectreIii => MethodParams::Electre(ElectreConfig::variant_iii()),
            MethodName::PrometheeIi => MethodParams::Promethee(PrometheeConfig::default()),
        }
    }

    pub fn info(&self) -> MethodInfo {
        MethodInfo {
            name: self.as_str(),
            full_name: self.full_name(),
            description: self.description(),
        }
    }
}

impl FromStr for MethodName {
    type Err = McdmError;

    /// Accepts the canonical names, the bare family names (defaulting to
    /// variant I for ELECTRE and II for PROMETHEE), and the written-out
    /// method titles. Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TOPSIS"
            | "TECHNIQUE FOR ORDER OF PREFERENCE BY SIMILARITY TO IDEAL SOLUTION" => {
                Ok(MethodName::Topsis)
            }
            "AHP" | "ANALYTIC HIERARCHY PROCESS" => Ok(MethodName::Ahp),
            "ELECTRE-I" | "ELECTRE" | "ELIMINATION ET CHOIX TRADUISANT LA REALITE"
            | "ELIMINATION ET CHOIX TRADUISANT LA REALITÉ"
            | "ELIMINATION AND CHOICE EXPRESSING REALITY" => Ok(MethodName::ElectreI),
            "ELECTRE-III" => Ok(MethodName::ElectreIii),
            "PROMETHEE-II" | "PROMETHEE"
            | "PREFERENCE RANKING ORGANIZATION METHOD FOR ENRICHMENT OF EVALUATIONS" => {
                Ok(MethodName::PrometheeIi)
            }
            _ => Err(McdmError::UnknownMethod(s.to_string())),
        }
    }
}

impl fmt::Display for MethodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MethodInfo {
    pub name: &'static str,
    pub full_name: &'static str,
    pub description: &'static str,
}

/// Parameter set for one invocation, tagged by method family.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MethodParams {
    Topsis(TopsisConfig),
    Ahp(AhpConfig),
    Electre(ElectreConfig),
    Promethee(PrometheeConfig),
}

impl MethodParams {
    /// The method these parameters resolve to, variant included.
    /// PROMETHEE I has no name-registry entry and is reachable only
    /// through explicit parameters.
    pub fn label(&self) -> &'static str {
        match self {
            MethodParams::Topsis(_) => "TOPSIS",
            MethodParams::Ahp(_) => "AHP",
            MethodParams::Electre(config) => match config.variant {
                ElectreVariant::I => "ELECTRE-I",
                ElectreVariant::Iii => "ELECTRE-III",
            },
            MethodParams::Promethee(config) => match config.variant {
                PrometheeVariant::I => "PROMETHEE-I",
                PrometheeVariant::Ii => "PROMETHEE-II",
            },
        }
    }
}

/// Evaluates a decision matrix with the given parameters.
///
/// A pure function of its inputs: no state survives the call, and
/// identical inputs produce bit-identical scores.
pub fn evaluate(matrix: &DecisionMatrix, params: &MethodParams) -> Result<MethodResult, McdmError> {
    let (alternatives, criteria) = matrix.shape();
    debug!(
        method = params.label(),
        alternatives, criteria, "evaluating decision matrix"
    );
    match params {
        MethodParams::Topsis(config) => TopsisRunner::run(matrix, config),
        MethodParams::Ahp(config) => AhpRunner::run(matrix, config),
        MethodParams::Electre(config) => ElectreRunner::run(matrix, config),
        MethodParams::Promethee(config) => PrometheeRunner::run(matrix, config),
    }
}

/// Resolves a method by name and evaluates with the supplied parameters,
/// or with the method's defaults when none are given.
///
/// Parameters belonging to a different method (or the wrong ELECTRE /
/// PROMETHEE variant) are rejected before computation.
pub fn evaluate_named(
    name: &str,
    matrix: &DecisionMatrix,
    params: Option<&MethodParams>,
) -> Result<MethodResult, McdmError> {
    let method: MethodName = name.parse()?;
    match params {
        None => evaluate(matrix, &method.default_params()),
        Some(params) => {
            if params.label() != method.as_str() {
                return Err(McdmError::ParameterMismatch {
                    expected: method.as_str(),
                    got: params.label(),
                });
            }
            evaluate(matrix, params)
        }
    }
}
