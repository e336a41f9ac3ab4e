//! Projection Calculator - revenue, expense, tax and profit projections
//!
//! This library provides:
//! - A pure projection engine over a validated parameter set
//! - Input validation and clamping with per-field errors
//! - Text report, metrics table (CSV) and JSON export with a secondary currency
//! - Parallel batch evaluation of named scenarios

pub mod error;
pub mod inputs;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{ExportError, ScenarioError, ValidationError};
pub use inputs::{NamedScenario, ProjectionInput};
pub use projection::{BreakEven, ProjectionEngine, ProjectionResult};
pub use report::{ExportArtifact, ReportConfig, ReportFormatter, TableRow};
pub use scenario::ScenarioRunner;
