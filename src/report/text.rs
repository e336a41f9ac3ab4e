//! Plain-text financial report

use crate::inputs::ProjectionInput;
use crate::projection::ProjectionResult;
use super::config::ReportConfig;
use super::currency::format_primary;

/// Render the downloadable text report
///
/// Sections are separated by one blank line and the report ends with a
/// newline.
pub fn render_text(config: &ReportConfig, input: &ProjectionInput, result: &ProjectionResult) -> String {
    let sections = [
        vec![config.title.clone()],
        vec![
            format!("Timeline: {} months", input.months),
            format!("Currency: {}", config.currency_code),
        ],
        vec![
            format!("Revenue Projection: {}", format_primary(result.projected_revenue)),
            format!("Total Expenses: {}", format_primary(result.total_expenses)),
            format!("Profit: {}", format_primary(result.profit)),
        ],
        vec![
            "Expenses Breakdown:".to_string(),
            format!("- Employee Costs: {}", format_primary(result.total_employee_costs)),
            format!("- LLM Costs: {}", format_primary(result.total_llm_cost)),
            format!("- Fixed Expenses: {}", format_primary(result.total_fixed_expenses)),
        ],
        vec![
            format!("Break-Even Point: {} months", result.break_even_point_months),
            format!("Revenue Per Employee: {}", format_primary(result.revenue_per_employee)),
        ],
        vec![
            format!("Estimated Tax: {}", format_primary(result.estimated_tax)),
            format!("App Store Fee: {}", format_primary(result.apple_tax)),
        ],
    ];

    let mut out = sections
        .iter()
        .map(|lines| lines.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n");
    out.push('\n');
    out
}
