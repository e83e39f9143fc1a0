//! Profit comparison between the two budget scenarios.

use crate::error::CompareError;
use crate::evaluate::Evaluation;

/// Outcome of pitting the shifted budget against the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparison {
    /// The shifted budget does not beat the baseline.
    NoImprovement,
    /// The shifted budget improves profit by this amount.
    Improvement(f64),
}

/// Compares the baseline evaluation against the shifted-budget one.
///
/// Both evaluations must be present: a scenario that failed to produce
/// a result makes the comparison undecidable rather than trivially won
/// by the other side.
pub fn compare(
    baseline: Option<&Evaluation>,
    shifted: Option<&Evaluation>,
) -> Result<Comparison, CompareError> {
    let baseline = baseline.ok_or(CompareError::MissingResult("baseline"))?;
    let shifted = shifted.ok_or(CompareError::MissingResult("shifted-budget"))?;

    if shifted.profit <= baseline.profit {
        Ok(Comparison::NoImprovement)
    } else {
        Ok(Comparison::Improvement(shifted.profit - baseline.profit))
    }
}
