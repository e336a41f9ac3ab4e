//! Scenario runner for batch projections
//!
//! Runs many named inputs through one engine in parallel and summarises the
//! outcomes side by side.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::{ExportError, ValidationError};
use crate::inputs::{NamedScenario, ProjectionInput};
use crate::projection::{ProjectionEngine, ProjectionResult};

/// Result of a single named scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub name: String,
    pub input: ProjectionInput,
    pub result: ProjectionResult,
}

/// One line of the batch comparison file
#[derive(Debug, Serialize)]
struct SummaryRow<'a> {
    #[serde(rename = "Scenario")]
    scenario: &'a str,
    #[serde(rename = "Months")]
    months: u32,
    #[serde(rename = "MarketSize")]
    market_size: u64,
    #[serde(rename = "ProjectedRevenue")]
    projected_revenue: f64,
    #[serde(rename = "TotalExpenses")]
    total_expenses: f64,
    #[serde(rename = "EstimatedTax")]
    estimated_tax: f64,
    #[serde(rename = "AppStoreFee")]
    app_store_fee: f64,
    #[serde(rename = "Profit")]
    profit: f64,
    #[serde(rename = "ProfitMargin")]
    profit_margin: f64,
    #[serde(rename = "BreakEvenMonths")]
    break_even_months: String,
}

/// Batch runner around a shared [`ProjectionEngine`]
///
/// # Example
/// ```ignore
/// let scenarios = load_scenarios("scenarios.csv", false)?;
/// let outcomes = ScenarioRunner::new().run_batch(&scenarios);
/// println!("{}", ScenarioRunner::summary_csv(&outcomes)?);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self { engine: ProjectionEngine::new() }
    }

    /// Validate and compute a single input
    pub fn run(&self, input: &ProjectionInput) -> Result<ProjectionResult, ValidationError> {
        self.engine.compute_checked(input)
    }

    /// Compute every scenario in parallel, keeping input order
    ///
    /// Scenarios are expected to be validated already (as `load_scenarios`
    /// does).
    pub fn run_batch(&self, scenarios: &[NamedScenario]) -> Vec<ScenarioOutcome> {
        log::info!("running {} scenarios", scenarios.len());

        scenarios
            .par_iter()
            .map(|scenario| ScenarioOutcome {
                name: scenario.name.clone(),
                input: scenario.input,
                result: self.engine.compute(&scenario.input),
            })
            .collect()
    }

    /// Run one base input across several timelines
    pub fn run_timelines(&self, base: &ProjectionInput, months: &[u32]) -> Vec<ScenarioOutcome> {
        let scenarios: Vec<_> = months
            .iter()
            .map(|&m| NamedScenario {
                name: format!("{} months", m),
                input: ProjectionInput { months: m, ..*base },
            })
            .collect();
        self.run_batch(&scenarios)
    }

    /// Most profitable outcome, if any
    pub fn best_by_profit(outcomes: &[ScenarioOutcome]) -> Option<&ScenarioOutcome> {
        outcomes
            .iter()
            .max_by(|a, b| a.result.profit.total_cmp(&b.result.profit))
    }

    /// Side-by-side comparison of outcomes as CSV
    pub fn summary_csv(outcomes: &[ScenarioOutcome]) -> Result<String, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        for outcome in outcomes {
            writer.serialize(SummaryRow {
                scenario: &outcome.name,
                months: outcome.input.months,
                market_size: outcome.result.market_size,
                projected_revenue: outcome.result.projected_revenue,
                total_expenses: outcome.result.total_expenses,
                estimated_tax: outcome.result.estimated_tax,
                app_store_fee: outcome.result.apple_tax,
                profit: outcome.result.profit,
                profit_margin: outcome.result.profit_margin(),
                break_even_months: outcome.result.break_even_point_months.to_string(),
            })?;
        }

        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::BreakEven;

    fn scenarios() -> Vec<NamedScenario> {
        vec![
            NamedScenario {
                name: "base".into(),
                input: ProjectionInput { total_customers: 1000, ..Default::default() },
            },
            NamedScenario {
                name: "empty".into(),
                input: ProjectionInput { total_customers: 0, ..Default::default() },
            },
            NamedScenario {
                name: "premium".into(),
                input: ProjectionInput { total_customers: 1000, price_per_customer: 99.0, ..Default::default() },
            },
        ]
    }

    #[test]
    fn test_batch_preserves_order_and_matches_engine() {
        let runner = ScenarioRunner::new();
        let scenarios = scenarios();
        let outcomes = runner.run_batch(&scenarios);

        assert_eq!(outcomes.len(), 3);
        for (scenario, outcome) in scenarios.iter().zip(&outcomes) {
            assert_eq!(scenario.name, outcome.name);
            assert_eq!(outcome.result, ProjectionEngine::new().compute(&scenario.input));
        }
        assert_eq!(outcomes[1].result.break_even_point_months, BreakEven::Never);
    }

    #[test]
    fn test_best_by_profit() {
        let outcomes = ScenarioRunner::new().run_batch(&scenarios());
        assert_eq!(ScenarioRunner::best_by_profit(&outcomes).unwrap().name, "premium");
        assert!(ScenarioRunner::best_by_profit(&[]).is_none());
    }

    #[test]
    fn test_timelines_scale_revenue() {
        let base = ProjectionInput { total_customers: 1000, ..Default::default() };
        let outcomes = ScenarioRunner::new().run_timelines(&base, &[6, 12, 24]);

        assert_eq!(outcomes[0].name, "6 months");
        assert!(outcomes[2].result.projected_revenue > outcomes[1].result.projected_revenue);
        assert!(outcomes[1].result.projected_revenue > outcomes[0].result.projected_revenue);
    }

    #[test]
    fn test_run_rejects_invalid() {
        let input = ProjectionInput { apple_tax_rate: 45.0, ..Default::default() };
        assert_eq!(ScenarioRunner::new().run(&input).unwrap_err().field(), "apple_tax_rate");
    }

    #[test]
    fn test_summary_csv() {
        let outcomes = ScenarioRunner::new().run_batch(&scenarios());
        let csv = ScenarioRunner::summary_csv(&outcomes).unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Scenario,Months,MarketSize,ProjectedRevenue,TotalExpenses,EstimatedTax,AppStoreFee,Profit,ProfitMargin,BreakEvenMonths"
        );
        assert!(lines[2].starts_with("empty,12,0,"));
        let empty: Vec<_> = lines[2].split(',').collect();
        assert_eq!(empty[8].parse::<f64>().unwrap(), 0.0);
        assert_eq!(empty[9], "infinite");

        let base: Vec<_> = lines[1].split(',').collect();
        let margin: f64 = base[8].parse().unwrap();
        assert_eq!(margin, outcomes[0].result.profit_margin());
    }
}
