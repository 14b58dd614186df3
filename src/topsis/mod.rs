//! TOPSIS — Technique for Order of Preference by Similarity to Ideal
//! Solution.
//!
//! Ranks alternatives by relative closeness to a positive ideal solution
//! (the best achievable weighted value on every criterion) and a
//! negative ideal solution (the worst). A fully compensatory method:
//! strength on one criterion offsets weakness on another.
//!
//! # References
//!
//! - Hwang & Yoon (1981), "Multiple Attribute Decision Making: Methods
//!   and Applications"

mod config;
mod runner;

pub use config::{DistanceMetric, TopsisConfig};
pub use runner::{TopsisDiagnostics, TopsisRunner};
