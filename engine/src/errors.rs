//! Error types for plan validation
//!
//! The analyzers themselves never fail: unknown exercise ids are skipped and
//! unparseable rep specs are treated as missing data. Errors only exist at
//! the input-validation boundary.

use thiserror::Error;

/// Validation errors raised before a plan is analyzed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid {field}: {reason}")]
    Field { field: String, reason: String },
}

impl PlanError {
    pub fn field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        PlanError::Field {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
