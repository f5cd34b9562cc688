//! Error types for parameter validation.
//!
//! Out-of-range values with a defined correction policy (undersized stock,
//! positive depth magnitudes, non-positive step sizes) are clamped or
//! defaulted during normalization and never surface as errors. Only values
//! with no sensible correction are rejected here.

use thiserror::Error;

/// Errors raised while normalizing machining parameters.
#[derive(Error, Debug)]
pub enum ParameterError {
    /// A parameter that must be strictly positive was zero, negative, or NaN.
    #[error("Parameter '{name}' must be positive, got {value}")]
    NotPositive { name: String, value: f64 },

    /// A parameter value is invalid for a reason other than its sign.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;
