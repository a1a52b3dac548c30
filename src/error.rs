//! Error type shared by the projection library

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while loading contracts or building projections
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// Projection window must cover at least one month
    #[error("projection length must be at least one month, got {0}")]
    InvalidProjectionMonths(u32),

    /// Start date could not be read as a calendar date
    #[error("invalid start date: {0:?}")]
    InvalidStartDate(String),

    /// Calendar arithmetic left the representable date range
    #[error("date arithmetic out of range starting from {0}")]
    DateOutOfRange(NaiveDate),

    /// A persisted contract record could not be turned into a profile
    #[error("contract record {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProjectionError {
    /// True for caller-contract violations (bad window, bad start date)
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            ProjectionError::InvalidProjectionMonths(_)
                | ProjectionError::InvalidStartDate(_)
                | ProjectionError::DateOutOfRange(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
