//! Multi-criteria decision analysis engine.
//!
//! Evaluates a set of alternatives against weighted criteria and produces
//! a ranking plus the intermediate artifacts needed to audit it. Four
//! method families are provided behind one uniform contract:
//!
//! - **TOPSIS**: distance to the positive and negative ideal solutions,
//!   ranked by relative closeness.
//! - **AHP**: pairwise-comparison weighting via power-iteration
//!   eigenvectors, with Saaty consistency checking.
//! - **ELECTRE I / III**: outranking relations, either crisp kernel
//!   selection (variant I) or fuzzy credibility with veto thresholds
//!   (variant III).
//! - **PROMETHEE II**: pairwise preference functions aggregated into net
//!   outranking flows.
//!
//! # Architecture
//!
//! The engine is the decision core only. Building the decision matrix,
//! persisting results, and choosing which method to run are caller
//! concerns; every invocation here is a stateless, synchronous pure
//! function of its inputs. Callers may run any number of evaluations in
//! parallel with no coordination.
//!
//! # Example
//!
//! ```
//! use mcdm_engine::matrix::{Alternative, Criterion, DecisionMatrix, Direction};
//! use mcdm_engine::method::evaluate_named;
//!
//! let matrix = DecisionMatrix::new(
//!     vec![
//!         Alternative::new("a1", "Vendor A"),
//!         Alternative::new("a2", "Vendor B"),
//!     ],
//!     vec![
//!         Criterion::new("cost", "Cost", Direction::Minimize, 0.6),
//!         Criterion::new("quality", "Quality", Direction::Maximize, 0.4),
//!     ],
//!     vec![vec![120.0, 7.0], vec![95.0, 5.5]],
//! )?;
//!
//! let result = evaluate_named("TOPSIS", &matrix, None)?;
//! assert_eq!(result.rankings.len(), 2);
//! # Ok::<(), mcdm_engine::error::McdmError>(())
//! ```

pub mod ahp;
pub mod electre;
pub mod error;
pub mod matrix;
pub mod method;
pub mod normalization;
pub mod promethee;
pub mod topsis;
