//! Product economics and resource budgets for the planning problem.

/// Per-unit economics of one product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    /// Production time consumed per unit, in hours.
    pub time_cost_h: f64,
    /// Cash outlay per unit, before any revenue recovery.
    pub cash_cost_usd: f64,
    /// Sale revenue per unit.
    pub revenue_usd: f64,
    /// Fraction of revenue recouped as cash before the cash budget binds.
    pub cash_recovery_ratio: f64,
}

impl Product {
    /// Cash cost per unit after crediting recovered revenue.
    pub fn effective_cash_cost(&self) -> f64 {
        self.cash_cost_usd - self.cash_recovery_ratio * self.revenue_usd
    }

    /// Profit contributed per unit produced.
    pub fn margin(&self) -> f64 {
        self.revenue_usd - self.cash_cost_usd - self.cash_recovery_ratio * self.revenue_usd
    }
}

/// The two-product catalogue the planner optimises over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanParams {
    pub products: [Product; 2],
}

impl PlanParams {
    /// Smallest raw time cost across the catalogue.
    pub fn min_time_cost(&self) -> f64 {
        self.products
            .iter()
            .map(|p| p.time_cost_h)
            .fold(f64::INFINITY, f64::min)
    }

    /// Smallest raw cash cost across the catalogue.
    pub fn min_cash_cost(&self) -> f64 {
        self.products
            .iter()
            .map(|p| p.cash_cost_usd)
            .fold(f64::INFINITY, f64::min)
    }
}

impl Default for PlanParams {
    /// The fixed catalogue: product 1 partially self-funds at 45% of
    /// revenue, product 2 at 30%.
    fn default() -> Self {
        Self {
            products: [
                Product {
                    time_cost_h: 3.0,
                    cash_cost_usd: 3.0,
                    revenue_usd: 6.0,
                    cash_recovery_ratio: 0.45,
                },
                Product {
                    time_cost_h: 4.0,
                    cash_cost_usd: 2.0,
                    revenue_usd: 5.4,
                    cash_recovery_ratio: 0.3,
                },
            ],
        }
    }
}

/// Resource budgets for one evaluation. Both components are non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Budget {
    /// Available production time, in hours.
    pub time_h: f64,
    /// Available starting cash, in USD.
    pub cash_usd: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn effective_cash_costs_credit_recovered_revenue() {
        let params = PlanParams::default();
        assert_float_eq!(params.products[0].effective_cash_cost(), 0.3, abs <= 1e-12);
        assert_float_eq!(params.products[1].effective_cash_cost(), 0.38, abs <= 1e-12);
    }

    #[test]
    fn margins_match_hand_computation() {
        let params = PlanParams::default();
        assert_float_eq!(params.products[0].margin(), 0.3, abs <= 1e-12);
        assert_float_eq!(params.products[1].margin(), 1.78, abs <= 1e-12);
    }

    #[test]
    fn minimum_costs_are_taken_over_raw_values() {
        let params = PlanParams::default();
        assert_float_eq!(params.min_time_cost(), 3.0, abs <= 0.0);
        assert_float_eq!(params.min_cash_cost(), 2.0, abs <= 0.0);
    }
}
