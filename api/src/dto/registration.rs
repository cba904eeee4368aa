//! Registration endpoint bodies

use chrono::{DateTime, Utc};
use gc_core::domain::entities::{AccountStatus, User};
use gc_core::services::registration::{NewUser, RegistrationOutcome};
use gc_core::services::verification::VerificationView;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Account fields supplied at sign-up
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    #[serde(default)]
    #[validate(length(min = 1, message = "uid is required"))]
    pub uid: String,

    #[serde(default)]
    #[validate(email(message = "email is invalid"))]
    pub email: String,

    pub display_name: Option<String>,

    pub phone: Option<String>,
}

impl From<UserData> for NewUser {
    fn from(data: UserData) -> Self {
        NewUser {
            uid: data.uid,
            email: data.email,
            display_name: data.display_name,
            phone: data.phone,
        }
    }
}

/// Body of register
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(nested)]
    pub user_data: UserData,
}

/// Body of verify-account
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAccountRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "verificationCode is required"))]
    pub verification_code: String,
}

/// Body of send-welcome-email
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeEmailRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,
}

/// Public view of an account
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub account_status: AccountStatus,
    pub email_verified: bool,
    pub email_verified_at: Option<DateTime<Utc>>,
    pub welcome_email_sent: bool,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            uid: user.id.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            account_status: user.account_status,
            email_verified: user.email_verified,
            email_verified_at: user.email_verified_at,
            welcome_email_sent: user.welcome_email_sent,
        }
    }
}

/// Result of register
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user_id: String,
    pub verification_sent: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

impl RegisterResponse {
    pub fn new(outcome: &RegistrationOutcome, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            user_id: outcome.user_id.clone(),
            verification_sent: outcome.verification_sent,
            expires_at: outcome.expires_at,
        }
    }
}

/// Result of verify-account
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyAccountResponse {
    pub success: bool,
    pub message: String,
    pub user: UserSummary,
    pub welcome_email_sent: bool,
}

/// Result of send-welcome-email
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeEmailResponse {
    pub success: bool,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

/// Result of registration status
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationStatusResponse {
    pub success: bool,
    pub user: UserSummary,
    pub verification: Option<VerificationView>,
}
