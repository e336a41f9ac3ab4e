//! Projection Calculator CLI
//!
//! Collects projection parameters from flags, prints the results and
//! optionally writes the text/CSV/JSON exports.

use anyhow::{Context, Result};
use clap::{Args, Parser, ValueEnum};
use std::path::{Path, PathBuf};

use projection_calculator::{
    inputs::load_scenarios,
    report::{dashboard, format_primary},
    ProjectionEngine, ProjectionInput, ReportConfig, ReportFormatter, ScenarioRunner,
};

#[derive(Debug, Parser)]
#[command(name = "projection_calculator", version, about = "Revenue, expense, tax and profit projections")]
struct Cli {
    #[command(flatten)]
    input: InputArgs,

    /// Coerce out-of-range values into their bounds instead of failing
    #[arg(long)]
    clamp: bool,

    /// What to print to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Dashboard)]
    format: OutputFormat,

    /// Write the text, CSV and JSON exports into this directory
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// JSON file with report title, currency code and file stem (applies to batch runs too)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run every scenario in this CSV file instead of the single flag-based input
    #[arg(long)]
    scenarios: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Dashboard,
    Text,
    Csv,
    Json,
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Projection period in months (1-60)
    #[arg(long, default_value_t = 12)]
    months: u32,

    /// Total available customers
    #[arg(long, default_value_t = 1)]
    total_customers: u64,

    /// Target market share in percent (0-100)
    #[arg(long, default_value_t = 100.0)]
    target_percentage: f64,

    /// Monthly price per customer (USD)
    #[arg(long, default_value_t = 39.99)]
    price_per_customer: f64,

    /// Number of employees
    #[arg(long, default_value_t = 1)]
    num_employees: u32,

    /// Average monthly salary (USD)
    #[arg(long, default_value_t = 1000.0)]
    avg_salary: f64,

    /// LLM cost per user per month (USD)
    #[arg(long, default_value_t = 1.0)]
    llm_cost_per_user: f64,

    /// Fixed monthly expenses (USD)
    #[arg(long, default_value_t = 100.0)]
    fixed_expenses: f64,

    /// Estimated tax rate in percent (0-50)
    #[arg(long, default_value_t = 20.0)]
    tax_rate: f64,

    /// App store fee in percent (0-30)
    #[arg(long, default_value_t = 30.0)]
    apple_tax_rate: f64,
}

impl From<InputArgs> for ProjectionInput {
    fn from(args: InputArgs) -> Self {
        ProjectionInput {
            months: args.months,
            total_customers: args.total_customers,
            target_percentage: args.target_percentage,
            price_per_customer: args.price_per_customer,
            num_employees: args.num_employees,
            avg_salary: args.avg_salary,
            llm_cost_per_user: args.llm_cost_per_user,
            fixed_expenses: args.fixed_expenses,
            tax_rate: args.tax_rate,
            apple_tax_rate: args.apple_tax_rate,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ReportConfig::from_json_path(path)
            .with_context(|| format!("failed to load report config from {}", path.display()))?,
        None => ReportConfig::default(),
    };
    let formatter = ReportFormatter::new(config);

    match cli.scenarios.clone() {
        Some(path) => run_batch(&cli, &path, &formatter),
        None => run_single(cli, &formatter),
    }
}

fn run_single(cli: Cli, formatter: &ReportFormatter) -> Result<()> {
    let input = ProjectionInput::from(cli.input);
    let input = if cli.clamp { input.clamped() } else { input };

    let result = ProjectionEngine::new()
        .compute_checked(&input)
        .context("invalid projection input")?;

    match cli.format {
        OutputFormat::Dashboard => {
            println!("{}", formatter.config().title);
            println!("{}\n", "=".repeat(formatter.config().title.len()));
            println!("Market Size: {} customers\n", result.market_size);
            for section in dashboard(&result) {
                println!("{}", section.render());
            }
            println!("Break-Even Point: {} months", result.break_even_point_months);
            println!("Revenue Per Employee: {}", format_primary(result.revenue_per_employee));
        }
        OutputFormat::Text => print!("{}", formatter.to_text(&input, &result)),
        OutputFormat::Csv => print!("{}", formatter.to_csv(&input, &result)?),
        OutputFormat::Json => println!("{}", formatter.to_json(&input, &result)?),
    }

    if let Some(dir) = &cli.out_dir {
        for artifact in formatter.artifacts(&input, &result)? {
            let path = artifact
                .write_to(dir)
                .with_context(|| format!("failed to write {}", artifact.file_name))?;
            eprintln!("Wrote {} ({})", path.display(), artifact.mime_type);
        }
    }

    Ok(())
}

fn run_batch(cli: &Cli, path: &Path, formatter: &ReportFormatter) -> Result<()> {
    let scenarios = load_scenarios(path, cli.clamp)
        .with_context(|| format!("failed to load scenarios from {}", path.display()))?;

    let runner = ScenarioRunner::new();
    let outcomes = runner.run_batch(&scenarios);

    match cli.format {
        OutputFormat::Csv => print!("{}", ScenarioRunner::summary_csv(&outcomes)?),
        OutputFormat::Json => {
            let rows: Vec<_> = outcomes
                .iter()
                .map(|o| serde_json::json!({ "name": o.name, "input": o.input, "result": o.result }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Dashboard | OutputFormat::Text => {
            println!("{}", formatter.config().title);
            println!("{}\n", "=".repeat(formatter.config().title.len()));
            println!("{:<20} {:>18} {:>18} {:>18} {:>12}",
                "Scenario", "Revenue", "Expenses", "Profit", "Break-Even");
            println!("{}", "-".repeat(90));
            for outcome in &outcomes {
                println!("{:<20} {:>18} {:>18} {:>18} {:>12}",
                    outcome.name,
                    format_primary(outcome.result.projected_revenue),
                    format_primary(outcome.result.total_expenses),
                    format_primary(outcome.result.profit),
                    outcome.result.break_even_point_months.to_string(),
                );
            }
            if let Some(best) = ScenarioRunner::best_by_profit(&outcomes) {
                println!("\nMost profitable: {} ({})", best.name, format_primary(best.result.profit));
            }
        }
    }

    if let Some(dir) = &cli.out_dir {
        std::fs::create_dir_all(dir)?;
        let summary_path = dir.join(formatter.config().scenario_file_name());
        std::fs::write(&summary_path, ScenarioRunner::summary_csv(&outcomes)?)
            .with_context(|| format!("failed to write {}", summary_path.display()))?;
        eprintln!("Wrote {}", summary_path.display());
    }

    Ok(())
}
