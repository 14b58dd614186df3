//! AHP — Analytic Hierarchy Process.
//!
//! Derives criteria weights and per-criterion alternative priorities
//! from reciprocal pairwise-comparison matrices via the principal
//! eigenvector, checks judgment consistency against Saaty's random
//! index, and aggregates priorities into a weighted global score.
//! Inconsistent judgments are reported, never fatal.
//!
//! # References
//!
//! - Saaty (1980), "The Analytic Hierarchy Process"
//! - Saaty (1990), "How to make a decision: The Analytic Hierarchy Process"

mod config;
mod eigen;
mod runner;

pub use config::AhpConfig;
pub use eigen::ConsistencyReport;
pub use runner::{AhpDiagnostics, AhpRunner};
