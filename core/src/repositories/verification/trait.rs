//! Verification record repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::verification_record::VerificationRecord;
use crate::errors::DomainError;

/// Persistence for one verification record per subject
#[async_trait]
pub trait VerificationRepository: Send + Sync {
    /// Load the record for a subject
    async fn find_by_subject(
        &self,
        subject_id: &str,
    ) -> Result<Option<VerificationRecord>, DomainError>;

    /// Write the record, replacing any previous record for the subject
    async fn save(&self, record: &VerificationRecord) -> Result<(), DomainError>;

    /// Atomically add one to the attempt counter
    ///
    /// # Returns
    /// * `Ok(count)` - Counter value after the increment
    /// * `Err(DomainError::NotFound)` - No record for the subject
    async fn increment_attempts(&self, subject_id: &str) -> Result<u32, DomainError>;

    /// Set `consumed` and `consumed_at`
    async fn mark_consumed(&self, subject_id: &str, at: DateTime<Utc>) -> Result<(), DomainError>;
}
