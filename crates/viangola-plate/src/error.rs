//! Error types for plate parsing

use thiserror::Error;

/// Errors from [`crate::Plate::parse`].
///
/// The free functions in this crate never fail; only the typed
/// [`crate::Plate`] value rejects input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlateError {
    /// Input held no letters or digits
    #[error("Plate is empty")]
    Empty,

    /// Input does not match either plate form (carries the normalized input)
    #[error("Invalid plate '{0}': expected LD-00-00-AA or LDA-00-00-AA")]
    Invalid(String),
}

/// Result type for plate parsing.
pub type PlateResult<T> = Result<T, PlateError>;

impl PlateError {
    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            PlateError::Empty => "PLATE_EMPTY",
            PlateError::Invalid(_) => "PLATE_INVALID",
        }
    }
}
