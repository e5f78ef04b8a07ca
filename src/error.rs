//! Error types for gcpcost
//!
//! This module defines the error handling strategy for gcpcost. Library code
//! uses `crate::error::Result<T>` which returns `CostError`. CLI code uses
//! `anyhow::Result<T>` for top-level error handling. The conversion happens
//! at the CLI boundary using `anyhow::Error::from` to preserve error chains.
//!
//! This split exists because:
//! - Library code benefits from structured error types for programmatic handling
//! - CLI code benefits from `anyhow`'s context chains and user-friendly display
//!
//! ## When to Use Which Error
//!
//! - `UnknownScenario`: the caller asked for a scenario name outside the
//!   fixed set (demo, staging, production, enterprise). Carries the invalid
//!   name. The interactive shell and report generator catch it and keep the
//!   session alive.
//!
//! - `UnknownSku`: a pricing lookup for a (category, sku) pair that is not in
//!   the catalog. Lookups fail loudly; they never default to zero.

use crate::pricing::ServiceCategory;
use thiserror::Error;

/// Main error type for gcpcost
#[derive(Error, Debug)]
pub enum CostError {
    #[error("Unknown scenario: '{0}' (expected one of: demo, staging, production, enterprise)")]
    UnknownScenario(String),

    #[error("Unknown SKU: '{sku}' in category '{category}'")]
    UnknownSku {
        category: ServiceCategory,
        sku: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CostError>;
