//! Error types for the table_trend crate

use crate::data::Metric;
use thiserror::Error;

/// Custom error types for the table_trend crate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    /// No historical records were supplied at all
    #[error("no historical records provided")]
    EmptyInput,

    /// Fewer periods than the selected strategy requires
    #[error("insufficient history for {metric}: {required} periods required, {actual} available")]
    InsufficientData {
        metric: Metric,
        required: usize,
        actual: usize,
    },

    /// Malformed calendar month
    #[error("invalid calendar month: {0}")]
    InvalidMonth(String),

    /// Error from invalid parameters
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from mathematical operations
    #[error("math error: {0}")]
    MathError(String),

    /// Error from serializing a value object
    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::SerializationError(err.to_string())
    }
}
