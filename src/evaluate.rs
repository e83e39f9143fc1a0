//! Builds the planning model, solves it, and validates the optimum.

use russcip::prelude::*;
use tracing::debug;

use crate::error::EvaluateError;
use crate::params::{Budget, PlanParams};

/// Tolerance for the post-solution feasibility checks. SCIP reports
/// solutions feasible to within a tolerance of the same magnitude.
const FEAS_EPS: f64 = 1e-6;

/// Optimal plan for one budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Units to produce of each product.
    pub quantities: [u64; 2],
    /// Total profit at the optimum.
    pub profit: f64,
}

/// Solves the two-product planning problem for one budget.
///
/// Maximises the total margin subject to the time budget and the
/// effective-cash budget, with integer non-negative production
/// quantities. Returns the optimal quantities and the achieved profit,
/// or an error when the solver fails or the model has no optimum.
///
/// # Panics
///
/// Panics if the solver claims an optimal solution that violates a
/// budget constraint, produces a negative quantity, or leaves more than
/// one unit's worth of both resources unused. Any of these means the
/// solver result is inconsistent with the model and must not be
/// tolerated silently.
pub fn evaluate(params: &PlanParams, budget: Budget) -> Result<Evaluation, EvaluateError> {
    let mut model = Model::new()
        .hide_output()
        .include_default_plugins()
        .create_prob("production_planning")
        .set_obj_sense(ObjSense::Maximize);

    let mut vars = Vec::with_capacity(params.products.len());
    for (i, product) in params.products.iter().enumerate() {
        let name = format!("product_{}", i + 1);
        vars.push(model.add_var(0., f64::INFINITY, product.margin(), &name, VarType::Integer));
    }

    let time_costs: Vec<f64> = params.products.iter().map(|p| p.time_cost_h).collect();
    let eff_cash_costs: Vec<f64> = params
        .products
        .iter()
        .map(|p| p.effective_cash_cost())
        .collect();

    let _time_constraint = model.add_cons(
        vars.iter().collect(),
        &time_costs,
        -f64::INFINITY,
        budget.time_h,
        "time_budget",
    );

    let _cash_constraint = model.add_cons(
        vars.iter().collect(),
        &eff_cash_costs,
        -f64::INFINITY,
        budget.cash_usd,
        "cash_budget",
    );

    debug!(
        time_h = budget.time_h,
        cash_usd = budget.cash_usd,
        "solving planning model"
    );

    let solved_model = model.solve();

    match solved_model.status() {
        Status::Optimal => {}
        Status::Infeasible | Status::Unbounded => return Err(EvaluateError::Incomplete),
        status => return Err(EvaluateError::Solver { status }),
    }

    let sol = solved_model.best_sol().ok_or(EvaluateError::Incomplete)?;
    let raw: Vec<f64> = vars.iter().map(|v| sol.val(v)).collect();
    let profit = solved_model.obj_val();
    debug!(?raw, profit, "optimum found");

    assert_feasible(params, budget, &raw);

    // Reported quantities are the integralised solver values.
    let quantities = [raw[0].abs().trunc() as u64, raw[1].abs().trunc() as u64];
    Ok(Evaluation { quantities, profit })
}

/// Re-checks the model invariants on the solver's raw solution values.
///
/// The raw values are judged rather than the rounded quantities: the
/// assertions apply to the solution the solver actually claimed optimal.
fn assert_feasible(params: &PlanParams, budget: Budget, raw: &[f64]) {
    let time_used: f64 = params
        .products
        .iter()
        .zip(raw)
        .map(|(p, q)| p.time_cost_h * q)
        .sum();
    let cash_used: f64 = params
        .products
        .iter()
        .zip(raw)
        .map(|(p, q)| p.effective_cash_cost() * q)
        .sum();

    assert!(
        raw.iter().all(|q| *q >= -FEAS_EPS),
        "negative production quantity in {raw:?}"
    );
    assert!(
        time_used <= budget.time_h + FEAS_EPS,
        "time budget exceeded: {time_used} > {}",
        budget.time_h
    );
    assert!(
        cash_used <= budget.cash_usd + FEAS_EPS,
        "cash budget exceeded: {cash_used} > {}",
        budget.cash_usd
    );

    // With strictly positive margins, leaving a full unit's worth of both
    // resources unused cannot be optimal.
    let time_slack = budget.time_h - time_used;
    let cash_slack = budget.cash_usd - cash_used;
    assert!(
        time_slack <= params.min_time_cost() || cash_slack <= params.min_cash_cost(),
        "no binding resource: time slack {time_slack} h, cash slack ${cash_slack}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Product;
    use float_eq::assert_float_eq;

    #[test]
    fn cash_bound_catalogue_exhausts_the_cash_budget() {
        // Product 1 dominates product 2 on every axis, and with no
        // revenue recovery the cash budget caps production at 10 units.
        let params = PlanParams {
            products: [
                Product {
                    time_cost_h: 1.0,
                    cash_cost_usd: 10.0,
                    revenue_usd: 15.0,
                    cash_recovery_ratio: 0.0,
                },
                Product {
                    time_cost_h: 5.0,
                    cash_cost_usd: 20.0,
                    revenue_usd: 21.0,
                    cash_recovery_ratio: 0.0,
                },
            ],
        };
        let budget = Budget {
            time_h: 1_000.0,
            cash_usd: 100.0,
        };

        let eval = evaluate(&params, budget).unwrap();

        assert_eq!(eval.quantities, [10, 0]);
        assert_float_eq!(eval.profit, 50.0, abs <= 1e-6);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let params = PlanParams::default();
        let budget = Budget {
            time_h: 20_000.0,
            cash_usd: 4_000.0,
        };

        let first = evaluate(&params, budget).unwrap();
        let second = evaluate(&params, budget).unwrap();

        assert_eq!(first.quantities, second.quantities);
        assert_float_eq!(first.profit, second.profit, abs <= 0.0);
    }

    #[test]
    fn unsatisfiable_cash_budget_reports_incomplete() {
        // A negative right-hand side with non-negative variables and
        // positive effective cash costs leaves no feasible point.
        let params = PlanParams::default();
        let budget = Budget {
            time_h: 100.0,
            cash_usd: -5.0,
        };

        let err = evaluate(&params, budget).unwrap_err();
        assert!(matches!(err, EvaluateError::Incomplete));
    }
}
