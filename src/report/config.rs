//! Report presentation settings

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ExportError;

/// Title, currency label and file naming for exported reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// First line of the text report
    pub title: String,

    /// Primary currency code printed in the report header
    pub currency_code: String,

    /// Prefix for exported file names (`<stem>_report.txt`, `<stem>_metrics.csv`,
    /// `<stem>_scenarios.csv`)
    pub file_stem: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Narra Financial Analysis Report".into(),
            currency_code: "USD".into(),
            file_stem: "narra_financial".into(),
        }
    }
}

impl ReportConfig {
    /// Load settings from a JSON file; missing keys keep their defaults
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, ExportError> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn text_file_name(&self) -> String {
        format!("{}_report.txt", self.file_stem)
    }

    pub fn csv_file_name(&self) -> String {
        format!("{}_metrics.csv", self.file_stem)
    }

    pub fn json_file_name(&self) -> String {
        format!("{}_projection.json", self.file_stem)
    }

    /// Batch summary written by the scenario runner
    pub fn scenario_file_name(&self) -> String {
        format!("{}_scenarios.csv", self.file_stem)
    }
}
