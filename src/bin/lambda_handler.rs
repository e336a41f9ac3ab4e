//! AWS Lambda handler for single projections
//!
//! Accepts projection parameters as JSON (direct invocation or a Function URL
//! event with a JSON `body`) and returns the computed metrics together with
//! the text report and CSV export.

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use projection_calculator::{
    report::{dashboard, DashboardSection},
    ProjectionEngine, ProjectionInput, ProjectionResult, ReportConfig, ReportFormatter, TableRow,
};

/// Input configuration for the projection
///
/// Any parameter left out takes the calculator's default value.
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    #[serde(flatten)]
    pub input: ProjectionInput,

    /// Clamp out-of-range values instead of rejecting the request
    #[serde(default)]
    pub clamp: bool,

    /// Report title / currency label / file naming overrides
    #[serde(default)]
    pub report: Option<ReportConfig>,
}

/// Output from the projection
#[derive(Debug, Serialize, Default)]
pub struct ProjectionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<ProjectionInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ProjectionResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dashboard: Vec<DashboardSection>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub table: Vec<TableRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_csv: Option<String>,
    pub execution_time_us: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn error_response(message: String) -> ProjectionResponse {
    log::warn!("rejected projection request: {}", message);
    ProjectionResponse {
        error: Some(message),
        ..Default::default()
    }
}

/// Function URL events wrap the request in a string `body`
fn request_payload(event: Value) -> Result<Value, serde_json::Error> {
    match event.get("body") {
        Some(Value::String(body)) => serde_json::from_str(body),
        Some(Value::Null) => Ok(Value::Object(Default::default())),
        _ => Ok(event),
    }
}

/// Lambda handler function
async fn handler(event: LambdaEvent<Value>) -> Result<ProjectionResponse, Error> {
    let start = std::time::Instant::now();

    let request: ProjectionRequest = match request_payload(event.payload).and_then(serde_json::from_value) {
        Ok(r) => r,
        Err(e) => return Ok(error_response(format!("Invalid JSON: {}", e))),
    };

    let input = if request.clamp { request.input.clamped() } else { request.input };

    let result = match ProjectionEngine::new().compute_checked(&input) {
        Ok(r) => r,
        Err(e) => return Ok(error_response(e.to_string())),
    };

    let formatter = ReportFormatter::new(request.report.unwrap_or_default());
    let report_csv = formatter.to_csv(&input, &result)?;

    Ok(ProjectionResponse {
        input: Some(input),
        result: Some(result),
        dashboard: dashboard(&result),
        table: formatter.to_table(&input, &result),
        report_text: Some(formatter.to_text(&input, &result)),
        report_csv: Some(report_csv),
        execution_time_us: start.elapsed().as_micros() as u64,
        error: None,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
