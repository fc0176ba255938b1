//! Error type for the fallible edges of the planner
//!
//! The calculators themselves never fail; these errors come from loading
//! plan files and CSV inputs, parsing labels, and validating inputs.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid plan file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("unknown {kind}: {label:?}")]
    UnknownLabel { kind: &'static str, label: String },
}

pub type Result<T> = std::result::Result<T, PlannerError>;

/// Reject negative or non-finite amounts
pub(crate) fn require_amount(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PlannerError::InvalidInput {
            field,
            reason: format!("{value} is not a finite number"),
        });
    }
    if value < 0.0 {
        return Err(PlannerError::InvalidInput {
            field,
            reason: format!("{value} must not be negative"),
        });
    }
    Ok(())
}

/// Reject non-finite rates (negative rates are allowed)
pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PlannerError::InvalidInput {
            field,
            reason: format!("{value} is not a finite number"),
        })
    }
}

/// Reject percentages outside [0, 100]
pub(crate) fn require_percent(field: &'static str, value: f64) -> Result<()> {
    require_amount(field, value)?;
    if value > 100.0 {
        return Err(PlannerError::InvalidInput {
            field,
            reason: format!("{value} exceeds 100%"),
        });
    }
    Ok(())
}
