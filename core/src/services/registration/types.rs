//! Types for registration service inputs and results

use chrono::{DateTime, Utc};

use crate::domain::entities::user::User;
use crate::services::verification::VerificationView;

/// Account details supplied at sign-up
#[derive(Debug, Clone)]
pub struct NewUser {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub phone: Option<String>,
}

/// Result of a registration request
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    pub user_id: String,
    /// `false` when an unverified account already existed and only a new code went out
    pub created: bool,
    /// Whether the verification email was accepted by the transport
    pub verification_sent: bool,
    pub expires_at: Option<DateTime<Utc>>,
    /// Transport error when the verification email could not be sent
    pub delivery_error: Option<String>,
}

/// Result of verifying an account through the registration flow
#[derive(Debug, Clone)]
pub struct AccountVerification {
    /// Account state after activation
    pub user: User,
    pub verified_at: DateTime<Utc>,
    pub welcome_email_sent: bool,
    pub admin_notified: bool,
}

/// Registration state of an account
#[derive(Debug, Clone)]
pub struct RegistrationStatus {
    pub user: User,
    pub verification: Option<VerificationView>,
}
