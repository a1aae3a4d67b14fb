//! Error types for query composition

use thiserror::Error;
use viangola_plate::PlateError;

/// Errors raised while composing registry queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Neither a plate nor a driving license was supplied
    #[error("A plate or a driving license number is required")]
    MissingCriteria,

    /// The supplied plate is not a valid Angolan plate
    #[error(transparent)]
    InvalidPlate(#[from] PlateError),
}

/// Result type for query composition.
pub type QueryResult<T> = Result<T, QueryError>;

impl QueryError {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        400
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::MissingCriteria => "MISSING_CRITERIA",
            QueryError::InvalidPlate(e) => e.error_code(),
        }
    }
}
