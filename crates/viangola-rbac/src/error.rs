//! Error types for access checks

use thiserror::Error;

use crate::actions::Action;
use crate::resources::Resource;
use crate::roles::Role;

/// Access error types returned by [`crate::authorize`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// No user is signed in
    #[error("Not authenticated")]
    Unauthenticated,

    /// The user's role does not grant the action
    #[error("Forbidden: {role} may not {action} {resource}")]
    Forbidden {
        /// Role of the denied user.
        role: Role,
        /// Resource that was requested.
        resource: Resource,
        /// Action that was requested.
        action: Action,
    },
}

/// Result type for access checks.
pub type AccessResult<T> = Result<T, AccessError>;

impl AccessError {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AccessError::Unauthenticated => 401,
            AccessError::Forbidden { .. } => 403,
        }
    }

    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            AccessError::Unauthenticated => "UNAUTHENTICATED",
            AccessError::Forbidden { .. } => "FORBIDDEN",
        }
    }
}
