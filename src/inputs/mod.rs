//! Projection input parameters and scenario loading

mod data;
pub mod loader;

pub use data::{FieldBounds, ProjectionInput, APPLE_TAX_RATE, MONTHS, TARGET_PERCENTAGE, TAX_RATE};
pub use loader::{load_scenarios, load_scenarios_from_reader, NamedScenario};
