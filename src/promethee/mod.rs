//! PROMETHEE — Preference Ranking Organization METHod for Enrichment of
//! Evaluations.
//!
//! For every ordered pair of alternatives and every criterion, a
//! preference function maps the performance difference to a degree in
//! `[0, 1]`; the weighted aggregate over criteria forms a preference
//! matrix whose row and column averages are the positive and negative
//! outranking flows. Variant II ranks by net flow (complete order);
//! variant I reports the partial order the flow pair induces, including
//! incomparabilities.
//!
//! # References
//!
//! - Brans & Vincke (1985), "A preference ranking organisation method"
//! - Brans, Vincke & Mareschal (1986), "How to select and how to rank
//!   projects: The PROMETHEE method"

mod config;
mod preference;
mod runner;

pub use config::{PrometheeConfig, PrometheeVariant};
pub use preference::PreferenceFunction;
pub use runner::{PrometheeDiagnostics, PrometheeRunner};
