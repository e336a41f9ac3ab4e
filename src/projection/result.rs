//! Output structures for a projection run

use serde::{Deserialize, Serialize};
use std::fmt;

/// Months needed to recoup total expenses at one month's revenue pace
///
/// `Never` stands in for an infinite ratio (no customers, or no revenue per
/// customer to recoup anything with).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BreakEven {
    Months(f64),
    Never,
}

impl BreakEven {
    /// Ratio as a float, `f64::INFINITY` for `Never`
    pub fn as_f64(&self) -> f64 {
        match self {
            BreakEven::Months(months) => *months,
            BreakEven::Never => f64::INFINITY,
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, BreakEven::Never)
    }
}

impl fmt::Display for BreakEven {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakEven::Months(months) => write!(f, "{:.2}", months),
            BreakEven::Never => f.write_str("infinite"),
        }
    }
}

/// Derived financial metrics for the whole projection period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Customers captured at the target share
    pub market_size: u64,

    // Totals over the projection period
    pub projected_revenue: f64,
    pub total_employee_costs: f64,
    pub total_llm_cost: f64,
    pub total_fixed_expenses: f64,
    pub total_expenses: f64,

    // Taxes and fees
    pub estimated_tax: f64,
    pub apple_tax: f64,

    /// Revenue less expenses, tax and app store fee; negative on a loss
    pub profit: f64,

    pub break_even_point_months: BreakEven,

    /// Zero when there are no employees
    pub revenue_per_employee: f64,
}

impl ProjectionResult {
    /// Whether the projection ends in profit
    pub fn is_profitable(&self) -> bool {
        self.profit > 0.0
    }

    /// Profit as a share of projected revenue (0 when there is no revenue)
    pub fn profit_margin(&self) -> f64 {
        if self.projected_revenue > 0.0 {
            self.profit / self.projected_revenue
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_even_display() {
        assert_eq!(BreakEven::Months(0.6251).to_string(), "0.63");
        assert_eq!(BreakEven::Months(12.0).to_string(), "12.00");
        assert_eq!(BreakEven::Never.to_string(), "infinite");
        assert!(BreakEven::Never.as_f64().is_infinite());
    }

    fn result_with(projected_revenue: f64, profit: f64) -> ProjectionResult {
        ProjectionResult {
            market_size: 0,
            projected_revenue,
            total_employee_costs: 0.0,
            total_llm_cost: 0.0,
            total_fixed_expenses: 0.0,
            total_expenses: 0.0,
            estimated_tax: 0.0,
            apple_tax: 0.0,
            profit,
            break_even_point_months: BreakEven::Never,
            revenue_per_employee: 0.0,
        }
    }

    #[test]
    fn test_profit_margin() {
        assert_eq!(result_with(1000.0, 250.0).profit_margin(), 0.25);
        assert_eq!(result_with(1000.0, -500.0).profit_margin(), -0.5);
        assert_eq!(result_with(0.0, -1200.0).profit_margin(), 0.0);
        assert!(!result_with(0.0, -1200.0).is_profitable());
    }
}
