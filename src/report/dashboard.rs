//! Grouped key-metric cards for display layers

use serde::Serialize;

use crate::projection::ProjectionResult;
use super::currency::{convert, format_primary, format_secondary};
use super::table::Metric;

/// A single displayed metric with both currency values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value_primary: f64,
    pub value_secondary: f64,
}

impl MetricCard {
    fn new(metric: Metric, value: f64) -> Self {
        Self {
            label: metric.label(),
            value_primary: value,
            value_secondary: convert(value),
        }
    }
}

/// A titled group of cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSection {
    pub title: &'static str,
    pub cards: Vec<MetricCard>,
}

impl DashboardSection {
    /// Plain-text rendering, one card per line
    pub fn render(&self) -> String {
        let mut out = format!("{}\n", self.title);
        for card in &self.cards {
            out.push_str(&format!(
                "  {:<18} {:>18}   {:>22}\n",
                card.label,
                format_primary(card.value_primary),
                format_secondary(card.value_secondary),
            ));
        }
        out
    }
}

/// Key metrics, tax and fee metrics, then the expense breakdown
pub fn dashboard(result: &ProjectionResult) -> Vec<DashboardSection> {
    vec![
        DashboardSection {
            title: "Key Financial Metrics",
            cards: vec![
                MetricCard::new(Metric::ProjectedRevenue, result.projected_revenue),
                MetricCard::new(Metric::TotalExpenses, result.total_expenses),
                MetricCard::new(Metric::Profit, result.profit),
            ],
        },
        DashboardSection {
            title: "Tax and Fee Metrics",
            cards: vec![
                MetricCard::new(Metric::EstimatedTax, result.estimated_tax),
                MetricCard::new(Metric::AppStoreFee, result.apple_tax),
            ],
        },
        DashboardSection {
            title: "Expenses Breakdown",
            cards: vec![
                MetricCard::new(Metric::EmployeeCosts, result.total_employee_costs),
                MetricCard::new(Metric::LlmCosts, result.total_llm_cost),
                MetricCard::new(Metric::FixedExpenses, result.total_fixed_expenses),
            ],
        },
    ]
}
