//! Field validation helpers shared by the domain and the HTTP layer

use super::email::is_valid_email;

/// Outcome of a single field check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    /// Field absent or blank
    Missing(&'static str),
    /// Email address not syntactically valid
    InvalidEmail,
}

/// Require a non-blank value
pub fn require(field: &'static str, value: &str) -> Result<(), FieldIssue> {
    if value.trim().is_empty() {
        Err(FieldIssue::Missing(field))
    } else {
        Ok(())
    }
}

/// Require a non-blank, syntactically valid email address
pub fn require_email(field: &'static str, value: &str) -> Result<(), FieldIssue> {
    require(field, value)?;
    if is_valid_email(value.trim()) {
        Ok(())
    } else {
        Err(FieldIssue::InvalidEmail)
    }
}
