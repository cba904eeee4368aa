//! Verification record for an issued email verification code.
//!
//! One record per subject lives in the `emailVerifications` collection keyed
//! by the subject id. Reissuing a code overwrites the record, which resets the
//! attempt counter and the consumed flag.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use gc_shared::timestamp;
use serde::{Deserialize, Serialize};

/// Hours a code stays valid after issuance
pub const VERIFICATION_WINDOW_HOURS: i64 = 24;

/// Digits in a code unless configured otherwise
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Stored field holding the attempt counter
pub const ATTEMPTS_FIELD: &str = "attempts";

/// Verification record entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Owner of the code
    #[serde(rename = "userId")]
    pub subject_id: String,

    /// Address the code was sent to
    #[serde(rename = "email")]
    pub contact_address: String,

    pub code: String,

    #[serde(rename = "createdAt", with = "timestamp")]
    pub issued_at: DateTime<Utc>,

    #[serde(rename = "expiresAt", with = "timestamp")]
    pub expires_at: DateTime<Utc>,

    /// Terminal once set
    #[serde(rename = "verified", default)]
    pub consumed: bool,

    #[serde(rename = "verifiedAt", default, with = "timestamp::option")]
    pub consumed_at: Option<DateTime<Utc>>,

    #[serde(rename = "attempts", default)]
    pub attempt_count: u32,
}

impl VerificationRecord {
    /// Creates a fresh, unconsumed record expiring after the validity window
    pub fn new(
        subject_id: impl Into<String>,
        contact_address: impl Into<String>,
        code: impl Into<String>,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            contact_address: contact_address.into(),
            code: code.into(),
            issued_at,
            expires_at: issued_at + Duration::hours(VERIFICATION_WINDOW_HOURS),
            consumed: false,
            consumed_at: None,
            attempt_count: 0,
        }
    }

    /// A code is expired from the instant `expires_at` is reached
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Exact comparison against the stored code in constant time
    pub fn matches(&self, candidate: &str) -> bool {
        constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }

    /// Marks the record consumed
    pub fn consume(&mut self, now: DateTime<Utc>) {
        self.consumed = true;
        self.consumed_at = Some(now);
    }
}
