//! User entity representing a registered GameCash customer.
//!
//! Documents live in the `users` collection keyed by the account uid. Field
//! names on the wire are camelCase to stay compatible with existing data.

use chrono::{DateTime, Utc};
use gc_shared::timestamp;
use serde::{Deserialize, Serialize};

/// Role of the account holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A storefront customer
    #[default]
    Customer,
    /// Back-office administrator
    Admin,
}

/// Lifecycle state of the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Registered, email not yet verified
    #[default]
    Pending,
    /// Email verified
    Active,
}

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Account uid, also the document id
    #[serde(rename = "uid")]
    pub id: String,

    /// Contact address receiving verification codes
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default)]
    pub role: UserRole,

    #[serde(default)]
    pub account_status: AccountStatus,

    #[serde(default)]
    pub email_verified: bool,

    #[serde(default, with = "timestamp::option")]
    pub email_verified_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub welcome_email_sent: bool,

    #[serde(default, rename = "welcomeEmailSentDate", with = "timestamp::option")]
    pub welcome_email_sent_at: Option<DateTime<Utc>>,

    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,

    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a pending customer account
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        display_name: Option<String>,
        phone: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            display_name,
            phone,
            role: UserRole::Customer,
            account_status: AccountStatus::Pending,
            email_verified: false,
            email_verified_at: None,
            welcome_email_sent: false,
            welcome_email_sent_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Name used in greetings and notices, the email when no name is set
    pub fn display_label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }

    /// Marks the email verified and activates the account
    pub fn mark_email_verified(&mut self, now: DateTime<Utc>) {
        self.email_verified = true;
        self.email_verified_at = Some(now);
        self.account_status = AccountStatus::Active;
        self.updated_at = now;
    }

    /// Records that the welcome email went out
    pub fn mark_welcome_email_sent(&mut self, now: DateTime<Utc>) {
        self.welcome_email_sent = true;
        self.welcome_email_sent_at = Some(now);
        self.updated_at = now;
    }

    /// Checks if the account is active
    pub fn is_active(&self) -> bool {
        self.account_status == AccountStatus::Active
    }
}
