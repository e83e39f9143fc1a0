//! Runs both budget scenarios and reports whether shifting budget from
//! starting cash into production time improves profit.

use anyhow::Result;
use tracing::warn;

use production_plan::{Budget, Comparison, Evaluation, PlanParams, compare, evaluate};

/// Baseline split: 20 000 h of production time, $4 000 starting cash.
const BASELINE: Budget = Budget {
    time_h: 20_000.0,
    cash_usd: 4_000.0,
};

/// Shifted split: 2 000 extra hours bought at the cost of $400 cash.
const SHIFTED: Budget = Budget {
    time_h: 22_000.0,
    cash_usd: 3_600.0,
};

fn main() -> Result<()> {
    init_logging();

    let params = PlanParams::default();

    let baseline = run_scenario("Scenario A", &params, BASELINE);
    let shifted = run_scenario("Scenario B", &params, SHIFTED);

    match compare(baseline.as_ref(), shifted.as_ref())? {
        Comparison::NoImprovement => {
            println!("\nShifting budget from cash to time does not improve profit.");
        }
        Comparison::Improvement(gain) => {
            println!("\nShifting budget from cash to time improves profit by ${gain:.2}.");
        }
    }

    Ok(())
}

/// Evaluates one scenario and prints its plan. A solver failure is
/// reported here and the scenario contributes no profit figure to the
/// comparison.
fn run_scenario(name: &str, params: &PlanParams, budget: Budget) -> Option<Evaluation> {
    println!(
        "\n{name}: {} h available, ${} starting cash",
        budget.time_h, budget.cash_usd
    );

    match evaluate(params, budget) {
        Ok(eval) => {
            println!("Product 1: {}", eval.quantities[0]);
            println!("Product 2: {}", eval.quantities[1]);
            println!("Total profit: ${:.2}", eval.profit);
            Some(eval)
        }
        Err(e) => {
            warn!(scenario = name, error = %e, "evaluation failed");
            eprintln!("{name} failed: {e}");
            None
        }
    }
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("production_plan=info"));

    fmt().with_env_filter(env_filter).with_target(false).init();
}
