//! gcpcost library
//!
//! This library provides the core functionality for the gcpcost CLI.

pub mod config;
pub mod engine;
pub mod error;
pub mod interactive;
pub mod pricing;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use engine::{CostBreakdown, ScenarioResult};
pub use pricing::{PriceTable, ServiceCategory};
pub use scenario::Scenario;
