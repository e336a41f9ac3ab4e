//! Report rendering: text report, metrics table, dashboard cards and exports

mod config;
pub mod currency;
mod dashboard;
mod export;
mod table;
mod text;

pub use config::ReportConfig;
pub use currency::{convert, format_primary, format_secondary, SAR_PER_USD};
pub use dashboard::{dashboard, DashboardSection, MetricCard};
pub use export::{ExportArtifact, ProjectionReport, MIME_CSV, MIME_JSON, MIME_TEXT};
pub use table::{build_table, parse_csv, write_csv, Metric, SecondaryValue, TableRow, CSV_HEADER, NOT_APPLICABLE};
pub use text::render_text;

use chrono::Utc;

use crate::error::ExportError;
use crate::inputs::ProjectionInput;
use crate::projection::ProjectionResult;

/// Renders projection results using a fixed [`ReportConfig`]
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    config: ReportConfig,
}

impl ReportFormatter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Human-readable report
    pub fn to_text(&self, input: &ProjectionInput, result: &ProjectionResult) -> String {
        render_text(&self.config, input, result)
    }

    /// Ordered metric rows with converted values
    pub fn to_table(&self, input: &ProjectionInput, result: &ProjectionResult) -> Vec<TableRow> {
        build_table(input, result)
    }

    /// Metric rows as CSV text
    pub fn to_csv(&self, input: &ProjectionInput, result: &ProjectionResult) -> Result<String, ExportError> {
        write_csv(&self.to_table(input, result))
    }

    /// Input, result and table as pretty-printed JSON
    pub fn to_json(&self, input: &ProjectionInput, result: &ProjectionResult) -> Result<String, ExportError> {
        let table = self.to_table(input, result);
        let report = ProjectionReport {
            generated_at: Utc::now(),
            input,
            result,
            table: &table,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }

    pub fn text_artifact(&self, input: &ProjectionInput, result: &ProjectionResult) -> ExportArtifact {
        ExportArtifact {
            file_name: self.config.text_file_name(),
            mime_type: MIME_TEXT,
            content: self.to_text(input, result),
        }
    }

    pub fn csv_artifact(&self, input: &ProjectionInput, result: &ProjectionResult) -> Result<ExportArtifact, ExportError> {
        Ok(ExportArtifact {
            file_name: self.config.csv_file_name(),
            mime_type: MIME_CSV,
            content: self.to_csv(input, result)?,
        })
    }

    pub fn json_artifact(&self, input: &ProjectionInput, result: &ProjectionResult) -> Result<ExportArtifact, ExportError> {
        Ok(ExportArtifact {
            file_name: self.config.json_file_name(),
            mime_type: MIME_JSON,
            content: self.to_json(input, result)?,
        })
    }

    /// Text, CSV and JSON artifacts together
    pub fn artifacts(&self, input: &ProjectionInput, result: &ProjectionResult) -> Result<Vec<ExportArtifact>, ExportError> {
        Ok(vec![
            self.text_artifact(input, result),
            self.csv_artifact(input, result)?,
            self.json_artifact(input, result)?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionEngine;

    fn run() -> (ProjectionInput, ProjectionResult) {
        let input = ProjectionInput { total_customers: 250, target_percentage: 40.0, ..Default::default() };
        let result = ProjectionEngine::new().compute(&input);
        (input, result)
    }

    #[test]
    fn test_artifact_names_and_types() {
        let (input, result) = run();
        let formatter = ReportFormatter::default();
        let artifacts = formatter.artifacts(&input, &result).unwrap();

        let names: Vec<_> = artifacts.iter().map(|a| (a.file_name.as_str(), a.mime_type)).collect();
        assert_eq!(
            names,
            [
                ("narra_financial_report.txt", "text/plain"),
                ("narra_financial_metrics.csv", "text/csv"),
                ("narra_financial_projection.json", "application/json"),
            ]
        );
        assert_eq!(artifacts[0].content, formatter.to_text(&input, &result));
        assert!(artifacts[1].content.starts_with("Metric,Value (USD),Value (SAR)\n"));
    }

    #[test]
    fn test_json_contains_result_and_table() {
        let (input, result) = run();
        let json = ReportFormatter::default().to_json(&input, &result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["result"]["market_size"], 100);
        assert_eq!(value["input"]["months"], 12);
        assert_eq!(value["table"].as_array().unwrap().len(), 10);
        assert_eq!(value["table"][0]["metric"], "Market Size");
        assert_eq!(value["table"][0]["value_secondary"], "N/A");
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_csv_matches_result() {
        let (input, result) = run();
        let csv = ReportFormatter::default().to_csv(&input, &result).unwrap();
        let rows = parse_csv(&csv).unwrap();

        for row in rows {
            assert_eq!(row.value_primary, row.metric.value(&input, &result));
        }
    }
}
