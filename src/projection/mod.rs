//! Projection engine and its output types

mod engine;
mod result;

pub use engine::{market_size, ProjectionEngine};
pub use result::{BreakEven, ProjectionResult};
