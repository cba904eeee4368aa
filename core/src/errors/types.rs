//! Error types for the verification lifecycle and input validation
//!
//! Messages here are for logs. The HTTP layer maps each variant to a
//! localized message and a status code.

use gc_shared::validation::FieldIssue;
use thiserror::Error;

/// Verification lifecycle errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("No verification in progress")]
    NoVerificationInProgress,

    #[error("Verification code expired")]
    Expired,

    #[error("Incorrect verification code (attempt {attempts})")]
    IncorrectCode { attempts: u32 },

    #[error("Email already verified")]
    AlreadyVerified,

    #[error("Too many verification attempts ({attempts})")]
    TooManyAttempts { attempts: u32 },

    #[error("Email delivery failed: {reason}")]
    DeliveryFailed { reason: String },

    #[error("User already registered")]
    UserAlreadyRegistered,

    #[error("Email not verified")]
    EmailNotVerified,
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email")]
    InvalidEmail,
}

impl From<FieldIssue> for ValidationError {
    fn from(issue: FieldIssue) -> Self {
        match issue {
            FieldIssue::Missing(field) => ValidationError::RequiredField {
                field: field.to_string(),
            },
            FieldIssue::InvalidEmail => ValidationError::InvalidEmail,
        }
    }
}
