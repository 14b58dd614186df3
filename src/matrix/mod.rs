//! Decision problem data model.
//!
//! A [`DecisionMatrix`] pairs an ordered list of [`Alternative`]s (rows)
//! with an ordered list of [`Criterion`]s (columns) over a real-valued
//! performance table. Shape and value invariants are enforced at
//! construction so that every method can assume a well-formed input.

mod alternative;
mod criterion;
mod decision;

pub use alternative::Alternative;
pub use criterion::{Criterion, Direction, Scale};
pub use decision::DecisionMatrix;
