//! Domain-specific error types and error handling.

mod types;

pub use types::{ValidationError, VerificationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    /// Shorthand for a missing user
    pub fn user_not_found() -> Self {
        DomainError::NotFound {
            resource: "User".to_string(),
        }
    }

    /// Whether this error means the addressed document does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
