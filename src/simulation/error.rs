//! Error type shared by the formula library and the state engine

use thiserror::Error;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised by the simulation core
///
/// Every operation validates its inputs before touching state, so an error
/// always means the context was left exactly as it was
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SimError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SimError::InvalidArgument(msg.into())
    }
}

/// Reject NaN and infinities
pub(crate) fn require_finite(name: &str, value: f64) -> SimResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimError::invalid(format!("{name} must be finite, got {value}")))
    }
}

/// Reject anything that is not a finite, strictly positive value
pub(crate) fn require_positive(name: &str, value: f64) -> SimResult<f64> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(SimError::invalid(format!("{name} must be positive, got {value}")))
    }
}
