//! Load named projection scenarios from CSV
//!
//! Expected header:
//! `Scenario,Months,TotalCustomers,TargetPercentage,PricePerCustomer,NumEmployees,AvgSalary,LlmCostPerUser,FixedExpenses,TaxRate,AppleTaxRate`

use csv::Reader;
use serde::Serialize;
use std::path::Path;

use super::ProjectionInput;
use crate::error::ScenarioError;

/// A projection input tagged with a scenario name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedScenario {
    pub name: String,
    pub input: ProjectionInput,
}

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Scenario")]
    scenario: String,
    #[serde(rename = "Months")]
    months: u32,
    #[serde(rename = "TotalCustomers")]
    total_customers: u64,
    #[serde(rename = "TargetPercentage")]
    target_percentage: f64,
    #[serde(rename = "PricePerCustomer")]
    price_per_customer: f64,
    #[serde(rename = "NumEmployees")]
    num_employees: u32,
    #[serde(rename = "AvgSalary")]
    avg_salary: f64,
    #[serde(rename = "LlmCostPerUser")]
    llm_cost_per_user: f64,
    #[serde(rename = "FixedExpenses")]
    fixed_expenses: f64,
    #[serde(rename = "TaxRate")]
    tax_rate: f64,
    #[serde(rename = "AppleTaxRate")]
    apple_tax_rate: f64,
}

impl CsvRow {
    fn to_scenario(self, row: usize, clamp: bool) -> Result<NamedScenario, ScenarioError> {
        let input = ProjectionInput {
            months: self.months,
            total_customers: self.total_customers,
            target_percentage: self.target_percentage,
            price_per_customer: self.price_per_customer,
            num_employees: self.num_employees,
            avg_salary: self.avg_salary,
            llm_cost_per_user: self.llm_cost_per_user,
            fixed_expenses: self.fixed_expenses,
            tax_rate: self.tax_rate,
            apple_tax_rate: self.apple_tax_rate,
        };

        let input = if clamp { input.clamped() } else { input };
        input.validate().map_err(|source| ScenarioError::Invalid {
            name: self.scenario.clone(),
            row,
            source,
        })?;

        Ok(NamedScenario { name: self.scenario, input })
    }
}

/// Load all scenarios from a CSV file
///
/// Rows that fail validation abort the load unless `clamp` is set, in which
/// case they are coerced into range first.
pub fn load_scenarios<P: AsRef<Path>>(path: P, clamp: bool) -> Result<Vec<NamedScenario>, ScenarioError> {
    let reader = Reader::from_path(path)?;
    collect_scenarios(reader, clamp)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: std::io::Read>(
    reader: R,
    clamp: bool,
) -> Result<Vec<NamedScenario>, ScenarioError> {
    collect_scenarios(Reader::from_reader(reader), clamp)
}

fn collect_scenarios<R: std::io::Read>(
    mut reader: Reader<R>,
    clamp: bool,
) -> Result<Vec<NamedScenario>, ScenarioError> {
    let mut scenarios = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario(idx + 1, clamp)?);
    }

    log::info!("loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}
