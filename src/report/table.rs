//! Tabular metric rows and their CSV form

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::error::ExportError;
use crate::inputs::ProjectionInput;
use crate::projection::ProjectionResult;
use super::currency::convert;

/// Column headers of the CSV export
pub const CSV_HEADER: [&str; 3] = ["Metric", "Value (USD)", "Value (SAR)"];

/// Literal used for metrics that have no converted value
pub const NOT_APPLICABLE: &str = "N/A";

/// Metrics reported in the table, in export order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    MarketSize,
    TargetMarketShare,
    ProjectedRevenue,
    TotalExpenses,
    Profit,
    EstimatedTax,
    AppStoreFee,
    EmployeeCosts,
    LlmCosts,
    FixedExpenses,
}

impl Metric {
    pub const TABLE_ORDER: [Metric; 10] = [
        Metric::MarketSize,
        Metric::TargetMarketShare,
        Metric::ProjectedRevenue,
        Metric::TotalExpenses,
        Metric::Profit,
        Metric::EstimatedTax,
        Metric::AppStoreFee,
        Metric::EmployeeCosts,
        Metric::LlmCosts,
        Metric::FixedExpenses,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::MarketSize => "Market Size",
            Metric::TargetMarketShare => "Target Market Share (%)",
            Metric::ProjectedRevenue => "Projected Revenue",
            Metric::TotalExpenses => "Total Expenses",
            Metric::Profit => "Profit",
            Metric::EstimatedTax => "Estimated Tax",
            Metric::AppStoreFee => "App Store Fee",
            Metric::EmployeeCosts => "Employee Costs",
            Metric::LlmCosts => "LLM Costs",
            Metric::FixedExpenses => "Fixed Expenses",
        }
    }

    pub fn from_label(label: &str) -> Option<Metric> {
        Metric::TABLE_ORDER.into_iter().find(|m| m.label() == label)
    }

    /// Counts and percentages are not converted
    pub fn is_monetary(&self) -> bool {
        !matches!(self, Metric::MarketSize | Metric::TargetMarketShare)
    }

    /// Primary-currency (or raw) value of this metric
    pub fn value(&self, input: &ProjectionInput, result: &ProjectionResult) -> f64 {
        match self {
            Metric::MarketSize => result.market_size as f64,
            Metric::TargetMarketShare => input.target_percentage,
            Metric::ProjectedRevenue => result.projected_revenue,
            Metric::TotalExpenses => result.total_expenses,
            Metric::Profit => result.profit,
            Metric::EstimatedTax => result.estimated_tax,
            Metric::AppStoreFee => result.apple_tax,
            Metric::EmployeeCosts => result.total_employee_costs,
            Metric::LlmCosts => result.total_llm_cost,
            Metric::FixedExpenses => result.total_fixed_expenses,
        }
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Converted value column: an amount, or `N/A` for counts and percentages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SecondaryValue {
    Amount(f64),
    NotApplicable,
}

impl SecondaryValue {
    pub fn amount(&self) -> Option<f64> {
        match self {
            SecondaryValue::Amount(value) => Some(*value),
            SecondaryValue::NotApplicable => None,
        }
    }
}

impl fmt::Display for SecondaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecondaryValue::Amount(value) => write!(f, "{}", value),
            SecondaryValue::NotApplicable => f.write_str(NOT_APPLICABLE),
        }
    }
}

impl Serialize for SecondaryValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SecondaryValue::Amount(value) => serializer.serialize_f64(*value),
            SecondaryValue::NotApplicable => serializer.serialize_str(NOT_APPLICABLE),
        }
    }
}

/// One row of the metrics table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableRow {
    pub metric: Metric,
    pub value_primary: f64,
    pub value_secondary: SecondaryValue,
}

/// Build the metrics table in its fixed row order
pub fn build_table(input: &ProjectionInput, result: &ProjectionResult) -> Vec<TableRow> {
    Metric::TABLE_ORDER
        .iter()
        .map(|metric| {
            let value_primary = metric.value(input, result);
            let value_secondary = if metric.is_monetary() {
                SecondaryValue::Amount(convert(value_primary))
            } else {
                SecondaryValue::NotApplicable
            };
            TableRow { metric: *metric, value_primary, value_secondary }
        })
        .collect()
}

/// Render table rows as CSV text with a header line
///
/// Numbers are written at full precision so the file parses back to the same
/// values.
pub fn write_csv(rows: &[TableRow]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for row in rows {
        writer.write_record([
            row.metric.label().to_string(),
            row.value_primary.to_string(),
            row.value_secondary.to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Raw CSV row matching the export columns
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "Metric")]
    metric: String,
    #[serde(rename = "Value (USD)")]
    value_primary: String,
    #[serde(rename = "Value (SAR)")]
    value_secondary: String,
}

impl CsvRecord {
    fn to_row(self) -> Result<TableRow, ExportError> {
        let metric = Metric::from_label(&self.metric)
            .ok_or_else(|| ExportError::UnknownMetric(self.metric.clone()))?;

        let value_primary = parse_number(&self.metric, &self.value_primary)?;
        let value_secondary = if self.value_secondary == NOT_APPLICABLE {
            SecondaryValue::NotApplicable
        } else {
            SecondaryValue::Amount(parse_number(&self.metric, &self.value_secondary)?)
        };

        Ok(TableRow { metric, value_primary, value_secondary })
    }
}

fn parse_number(metric: &str, value: &str) -> Result<f64, ExportError> {
    value.trim().parse().map_err(|_| ExportError::InvalidValue {
        metric: metric.to_string(),
        value: value.to_string(),
    })
}

/// Read a CSV export back into table rows
pub fn parse_csv(data: &str) -> Result<Vec<TableRow>, ExportError> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    let mut rows = Vec::new();

    for result in reader.deserialize() {
        let record: CsvRecord = result?;
        rows.push(record.to_row()?);
    }

    Ok(rows)
}
