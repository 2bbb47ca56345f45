//! # AppError
//!
//! Centralized error handling for Flatboard.
//! Maps domain-specific failures to actionable error types.

use thiserror::Error;

/// The primary error type for all fb-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (entity name, requested id)
    #[error("{0} with ID {1} not found")]
    NotFound(String, String),

    /// Validation failure (e.g., title too short, unknown field in payload)
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Infrastructure failure (e.g., unreadable data file, disk full)
    #[error("internal service error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn board_not_found(id: impl ToString) -> Self {
        Self::NotFound("Board".to_string(), id.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        // `{:#}` keeps the whole context chain on one line.
        Self::Internal(format!("{err:#}"))
    }
}

/// A specialized Result type for Flatboard logic.
pub type Result<T> = std::result::Result<T, AppError>;
