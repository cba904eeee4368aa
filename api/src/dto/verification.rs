//! Verification endpoint bodies

use chrono::{DateTime, Utc};
use gc_core::services::verification::{IssueOutcome, VerificationStatus, VerificationView};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of send-verification-email and resend-verification-email
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendVerificationRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,
}

/// Body of verify-code
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
}

/// A code was issued
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueResponse {
    pub success: bool,
    pub message: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl IssueResponse {
    pub fn new(outcome: &IssueOutcome, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            issued_at: outcome.issued_at,
            expires_at: outcome.expires_at,
        }
    }
}

/// The code matched
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeResponse {
    pub success: bool,
    pub message: String,
    pub verified_at: DateTime<Utc>,
}

/// Verification state of one user
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationStatusResponse {
    pub success: bool,
    pub user_id: String,
    pub email_verified: bool,
    pub email_verified_at: Option<DateTime<Utc>>,
    pub verification: Option<VerificationView>,
}

impl VerificationStatusResponse {
    pub fn new(user_id: impl Into<String>, status: VerificationStatus) -> Self {
        Self {
            success: true,
            user_id: user_id.into(),
            email_verified: status.email_verified,
            email_verified_at: status.email_verified_at,
            verification: status.verification,
        }
    }
}
