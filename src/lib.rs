//! Two-product production planning over a MIP solver.
//!
//! Builds a fixed-shape integer program — two products competing for a
//! time budget and a cash budget — hands it to SCIP, and compares the
//! profit achieved under two different budget splits.

pub mod compare;
pub mod error;
pub mod evaluate;
pub mod params;

pub use compare::{Comparison, compare};
pub use error::{CompareError, EvaluateError};
pub use evaluate::{Evaluation, evaluate};
pub use params::{Budget, PlanParams, Product};
