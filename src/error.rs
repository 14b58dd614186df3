//! Error types for the decision engine.
//!
//! Only malformed *input* is an error: shape mismatches, negative
//! weights, unknown names, out-of-range parameters. Degenerate numeric
//! conditions (zero-range columns, zero total distance, empty
//! discordance sets) are expected edge cases with documented fallback
//! values inside each method, and never surface here.

use thiserror::Error;

/// Errors rejected before any numeric computation begins.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum McdmError {
    /// The decision matrix has no alternatives or no criteria.
    #[error("decision matrix must have at least one alternative and one criterion")]
    EmptyMatrix,

    /// Row count does not match the alternative count.
    #[error("matrix has {rows} rows but {alternatives} alternatives")]
    RowCountMismatch { rows: usize, alternatives: usize },

    /// A row's length does not match the criterion count.
    #[error("row {row} has {found} values, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// A matrix cell is NaN or infinite.
    #[error("matrix cell ({row}, {col}) is not finite")]
    NonFiniteValue { row: usize, col: usize },

    /// A criterion weight is negative, NaN, or infinite.
    #[error("criterion '{id}' has invalid weight {weight}; weights must be finite and >= 0")]
    InvalidWeight { id: String, weight: f64 },

    /// A criterion uses a qualitative scale, which numeric methods reject.
    #[error("criterion '{id}' is qualitative; numeric methods require quantitative scales")]
    QualitativeCriterion { id: String },

    /// The method name is not one of the supported identifiers.
    #[error("unknown method '{0}'")]
    UnknownMethod(String),

    /// The optimization direction is not `minimize` or `maximize`.
    #[error("unknown optimization direction '{0}'")]
    UnknownDirection(String),

    /// The supplied parameter variant belongs to a different method.
    #[error("parameters for {got} supplied to method {expected}")]
    ParameterMismatch {
        expected: &'static str,
        got: &'static str,
    },

    /// A method parameter is out of range or inconsistent.
    #[error("invalid {method} parameter: {reason}")]
    InvalidParameter {
        method: &'static str,
        reason: String,
    },
}
