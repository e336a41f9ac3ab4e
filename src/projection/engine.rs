//! Core projection engine mapping business parameters to financial metrics

use crate::error::ValidationError;
use crate::inputs::ProjectionInput;
use super::result::{BreakEven, ProjectionResult};

/// Stateless projection engine
///
/// Every call to [`ProjectionEngine::compute`] is independent, so a single
/// engine can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionEngine;

impl ProjectionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Validate the input, then compute
    pub fn compute_checked(&self, input: &ProjectionInput) -> Result<ProjectionResult, ValidationError> {
        input.validate()?;
        Ok(self.compute(input))
    }

    /// Compute all projection metrics
    ///
    /// Assumes the input is already validated (or clamped); out-of-range
    /// values are not rejected here.
    pub fn compute(&self, input: &ProjectionInput) -> ProjectionResult {
        let months = input.months as f64;

        // Truncate, never round: a partial customer is not a customer
        let market_size = market_size(input.total_customers, input.target_percentage);
        let customers = market_size as f64;

        let projected_revenue = customers * input.price_per_customer * months;

        // Expenses
        let total_employee_costs = input.num_employees as f64 * input.avg_salary * months;
        let total_llm_cost = input.llm_cost_per_user * customers * months;
        let total_fixed_expenses = input.fixed_expenses * months;
        let total_expenses = total_employee_costs + total_llm_cost + total_fixed_expenses;

        // No tax credit on a loss
        let estimated_tax = ((projected_revenue - total_expenses) * (input.tax_rate / 100.0)).max(0.0);
        // App store fee is charged on gross revenue, profitable or not
        let apple_tax = projected_revenue * (input.apple_tax_rate / 100.0);

        let profit = projected_revenue - total_expenses - estimated_tax - apple_tax;

        let break_even_point_months = break_even(total_expenses, input.price_per_customer, market_size);

        let revenue_per_employee = if input.num_employees > 0 {
            projected_revenue / input.num_employees as f64
        } else {
            0.0
        };

        log::debug!(
            "projection: months={} market_size={} revenue={:.2} expenses={:.2} profit={:.2} break_even={}",
            input.months,
            market_size,
            projected_revenue,
            total_expenses,
            profit,
            break_even_point_months,
        );

        ProjectionResult {
            market_size,
            projected_revenue,
            total_employee_costs,
            total_llm_cost,
            total_fixed_expenses,
            total_expenses,
            estimated_tax,
            apple_tax,
            profit,
            break_even_point_months,
            revenue_per_employee,
        }
    }
}

/// Customers captured at the given share: floor(total * pct / 100)
///
/// Counts above 2^53 can round up on the way into `f64`, so the result is
/// capped at `total_customers`.
pub fn market_size(total_customers: u64, target_percentage: f64) -> u64 {
    let size = (total_customers as f64 * target_percentage / 100.0).floor() as u64;
    size.min(total_customers)
}

/// Total expenses divided by a single month's revenue
///
/// The numerator already spans every projected month while the denominator is
/// one month of revenue; the ratio is kept in that form. A zero market, or a
/// zero monthly revenue, never breaks even.
fn break_even(total_expenses: f64, price_per_customer: f64, market_size: u64) -> BreakEven {
    if market_size == 0 {
        return BreakEven::Never;
    }

    let months = total_expenses / (price_per_customer * market_size as f64);
    if months.is_finite() {
        BreakEven::Months(months)
    } else {
        BreakEven::Never
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn reference_input() -> ProjectionInput {
        ProjectionInput {
            months: 12,
            total_customers: 1000,
            target_percentage: 100.0,
            price_per_customer: 39.99,
            num_employees: 1,
            avg_salary: 1000.0,
            llm_cost_per_user: 1.0,
            fixed_expenses: 100.0,
            tax_rate: 20.0,
            apple_tax_rate: 30.0,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let result = ProjectionEngine::new().compute(&reference_input());

        assert_eq!(result.market_size, 1000);
        assert_abs_diff_eq!(result.projected_revenue, 479_880.00, epsilon = 1e-6);
        assert_abs_diff_eq!(result.total_employee_costs, 12_000.00, epsilon = 1e-6);
        assert_abs_diff_eq!(result.total_llm_cost, 12_000.00, epsilon = 1e-6);
        assert_abs_diff_eq!(result.total_fixed_expenses, 1_200.00, epsilon = 1e-6);
        assert_abs_diff_eq!(result.total_expenses, 25_200.00, epsilon = 1e-6);
        assert_abs_diff_eq!(result.estimated_tax, 90_936.00, epsilon = 1e-6);
        assert_abs_diff_eq!(result.apple_tax, 143_964.00, epsilon = 1e-6);
        assert_abs_diff_eq!(result.profit, 219_780.00, epsilon = 1e-6);
        assert_abs_diff_eq!(result.revenue_per_employee, 479_880.00, epsilon = 1e-6);

        // 25200 / (39.99 * 1000)
        assert_abs_diff_eq!(result.break_even_point_months.as_f64(), 0.630157539, epsilon = 1e-6);
    }

    #[test]
    fn test_market_size_truncates() {
        assert_eq!(market_size(10, 15.0), 1);
        assert_eq!(market_size(3, 50.0), 1);
        assert_eq!(market_size(999, 99.9), 998);
        assert_eq!(market_size(0, 100.0), 0);
        assert_eq!(market_size(1_000_000, 0.0), 0);
    }

    #[test]
    fn test_market_size_never_exceeds_total() {
        for total in [0u64, 1, 7, 99, 1000, 123_456] {
            for pct in [0.0, 0.5, 12.5, 33.3, 66.7, 99.99, 100.0] {
                let size = market_size(total, pct);
                assert!(size <= total, "market {} > total {} at {}%", size, total, pct);
                assert_eq!(size, (total as f64 * pct / 100.0).floor() as u64);
            }
        }
    }

    #[test]
    fn test_market_size_capped_beyond_f64_precision() {
        // 2^53 + 3 rounds up to 2^53 + 4 as an f64
        let total = (1u64 << 53) + 3;
        assert_eq!(market_size(total, 100.0), total);
        assert_eq!(market_size(u64::MAX, 100.0), u64::MAX);

        for pct in [50.0, 99.99, 100.0] {
            assert!(market_size(total, pct) <= total);
        }
    }

    #[test]
    fn test_expense_sum_identity() {
        let input = ProjectionInput {
            months: 37,
            total_customers: 12_345,
            target_percentage: 17.5,
            num_employees: 9,
            avg_salary: 4321.09,
            llm_cost_per_user: 0.37,
            fixed_expenses: 987.65,
            ..reference_input()
        };
        let result = ProjectionEngine::new().compute(&input);

        assert_eq!(
            result.total_expenses,
            result.total_employee_costs + result.total_llm_cost + result.total_fixed_expenses
        );
    }

    #[test]
    fn test_tax_floored_at_zero_on_loss() {
        let input = ProjectionInput {
            total_customers: 10,
            num_employees: 50,
            avg_salary: 10_000.0,
            ..reference_input()
        };
        let result = ProjectionEngine::new().compute(&input);

        assert!(result.projected_revenue < result.total_expenses);
        assert_eq!(result.estimated_tax, 0.0);
        assert!(result.apple_tax > 0.0);
        assert!(result.profit < 0.0);
        assert!(!result.is_profitable());
    }

    #[test]
    fn test_zero_employees() {
        let input = ProjectionInput { num_employees: 0, ..reference_input() };
        let result = ProjectionEngine::new().compute(&input);

        assert_eq!(result.revenue_per_employee, 0.0);
        assert_eq!(result.total_employee_costs, 0.0);
    }

    #[test]
    fn test_zero_market_never_breaks_even() {
        let input = ProjectionInput { total_customers: 0, ..reference_input() };
        let result = ProjectionEngine::new().compute(&input);

        assert_eq!(result.market_size, 0);
        assert_eq!(result.projected_revenue, 0.0);
        assert_eq!(result.break_even_point_months, BreakEven::Never);
    }

    #[test]
    fn test_free_product_never_breaks_even() {
        let input = ProjectionInput { price_per_customer: 0.0, ..reference_input() };
        let result = ProjectionEngine::new().compute(&input);
        assert!(result.break_even_point_months.is_never());

        // Nothing to recoup and nothing earned
        let input = ProjectionInput {
            price_per_customer: 0.0,
            num_employees: 0,
            llm_cost_per_user: 0.0,
            fixed_expenses: 0.0,
            ..reference_input()
        };
        let result = ProjectionEngine::new().compute(&input);
        assert!(result.break_even_point_months.is_never());
    }

    #[test]
    fn test_deterministic() {
        let engine = ProjectionEngine::new();
        let input = reference_input();
        assert_eq!(engine.compute(&input), engine.compute(&input));
    }

    #[test]
    fn test_compute_checked_rejects_invalid() {
        let input = ProjectionInput { months: 61, ..reference_input() };
        let err = ProjectionEngine::new().compute_checked(&input).unwrap_err();
        assert_eq!(err.field(), "months");
    }
}
