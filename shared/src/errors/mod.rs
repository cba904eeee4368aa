//! Shared error response body

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Error body returned by every API endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`, mirrors the success envelope
    pub success: bool,

    /// Error code for client identification
    pub error: String,

    /// Human-readable error message (localized)
    pub message: String,

    /// Additional error details (attempt count, field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Error codes used across the application
pub mod error_codes {
    pub const UNAUTHORIZED: &str = "unauthorized";
    pub const NOT_FOUND: &str = "not_found";
    pub const VALIDATION_ERROR: &str = "validation_error";
    pub const INTERNAL_ERROR: &str = "internal_error";
    pub const NO_VERIFICATION_IN_PROGRESS: &str = "no_verification_in_progress";
    pub const VERIFICATION_CODE_EXPIRED: &str = "verification_code_expired";
    pub const VERIFICATION_CODE_INVALID: &str = "invalid_verification_code";
    pub const TOO_MANY_ATTEMPTS: &str = "too_many_attempts";
    pub const ALREADY_VERIFIED: &str = "email_already_verified";
    pub const USER_ALREADY_REGISTERED: &str = "user_already_registered";
    pub const EMAIL_NOT_VERIFIED: &str = "email_not_verified";
    pub const DELIVERY_FAILED: &str = "email_delivery_failed";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serialization() {
        let body = ErrorResponse::new(error_codes::VERIFICATION_CODE_INVALID, "Incorrect code")
            .add_detail("attempts", 2);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "invalid_verification_code");
        assert_eq!(json["details"]["attempts"], 2);
    }

    #[test]
    fn test_details_omitted_when_empty() {
        let json = serde_json::to_value(ErrorResponse::new("not_found", "missing")).unwrap();
        assert!(json.get("details").is_none());
    }
}
