//! ELECTRE — ELimination Et Choix Traduisant la REalité.
//!
//! Outranking methods: instead of aggregating performances into one
//! utility, each ordered pair of alternatives is tested for whether one
//! *outranks* the other, i.e. is at least as good on a weighted majority
//! of criteria (concordance) and not unacceptably worse on any single
//! one (discordance / veto). Non-compensatory by construction:
//! excellence on one criterion cannot buy back a vetoed weakness on
//! another.
//!
//! Two variants share the concordance idea and diverge after it:
//!
//! - **Variant I** builds a crisp outranking relation from concordance
//!   and discordance thresholds, then selects the kernel of the strict
//!   dominance graph. Dominance cycles are condensed and retained
//!   jointly; kernel members always rank ahead of the rest.
//! - **Variant III** grades outranking continuously: piecewise-linear
//!   partial concordance with indifference/preference thresholds, veto
//!   discordance per criterion, and a credibility degree per pair.
//!   Ranking uses net credibility flows. Distillation is deliberately
//!   not part of the engine; callers needing it can run it over the
//!   credibility matrix in the diagnostics.
//!
//! # References
//!
//! - Roy (1968), "Classement et choix en présence de points de vue
//!   multiples (la méthode ELECTRE)"
//! - Roy (1978), "ELECTRE III: un algorithme de classement fondé sur une
//!   représentation floue des préférences"

mod concordance;
mod config;
mod credibility;
mod kernel;
mod runner;

pub use config::{
    DominanceScoring, ElectreConfig, ElectreVariant, ThresholdValue, Thresholds,
};
pub use runner::{ElectreIDiagnostics, ElectreIiiDiagnostics, ElectreRunner};
