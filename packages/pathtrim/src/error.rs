//! Error handling for text measurement operations
//!
//! Truncation itself never fails; every error here originates in the
//! measurement oracle and is propagated to the caller unchanged.

/// Errors surfaced while measuring text under a font configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeasurementError {
    #[error("Font family unavailable: {family}")]
    FontUnavailable { family: String },

    #[error("Invalid font configuration: {0}")]
    InvalidFont(String),

    #[error("Measurement oracle failed: {0}")]
    Oracle(String),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for MeasurementError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        MeasurementError::Oracle(err.to_string())
    }
}

/// Result type for measurement operations
pub type MeasurementResult<T> = Result<T, MeasurementError>;
