//! Types for verification service results

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::verification_record::VerificationRecord;

/// Result of issuing a verification code
#[derive(Debug, Clone)]
pub struct IssueOutcome {
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Transport message id
    pub message_id: String,
}

/// Result of a successful verification
#[derive(Debug, Clone)]
pub struct VerifyOutcome {
    pub verified_at: DateTime<Utc>,
    /// Attempts recorded against the code, including the successful one
    pub attempt_count: u32,
    /// Whether the confirmation email went out
    pub confirmation_sent: bool,
}

/// Read-only projection of a verification record, never carries the code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationView {
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub consumed: bool,
    pub consumed_at: Option<DateTime<Utc>>,
    pub attempt_count: u32,
    pub expired: bool,
}

impl VerificationView {
    pub fn from_record(record: &VerificationRecord, now: DateTime<Utc>) -> Self {
        Self {
            issued_at: record.issued_at,
            expires_at: record.expires_at,
            consumed: record.consumed,
            consumed_at: record.consumed_at,
            attempt_count: record.attempt_count,
            expired: !record.consumed && record.is_expired(now),
        }
    }
}

/// Verification state of a subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationStatus {
    pub email_verified: bool,
    pub email_verified_at: Option<DateTime<Utc>>,
    pub verification: Option<VerificationView>,
}
