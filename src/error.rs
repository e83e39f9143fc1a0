//! Error taxonomy for evaluation and comparison.

use russcip::Status;
use thiserror::Error;

/// Failure modes of a single scenario evaluation.
#[derive(Debug, Error)]
pub enum EvaluateError {
    /// The solver terminated abnormally (limit hit, interrupt, numerical
    /// trouble). Carries SCIP's own terminal status as the diagnostic.
    #[error("solver terminated with status {status:?}")]
    Solver { status: Status },

    /// The solver finished without a usable solution, either because the
    /// model is infeasible or unbounded or because no best solution was
    /// reported.
    #[error("solver produced no usable solution")]
    Incomplete,
}

/// Failure modes of the scenario comparison.
#[derive(Debug, Error)]
pub enum CompareError {
    /// A scenario contributed no profit figure, so the comparison cannot
    /// be decided.
    #[error("missing result for {0} scenario")]
    MissingResult(&'static str),
}
