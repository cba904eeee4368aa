//! Verification record manager
//!
//! Owns creation, lookup, expiry and the attempt counter of verification
//! records. It has no notion of whether a submitted code is correct.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::entities::verification_record::VerificationRecord;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::VerificationRepository;

/// Record manager over a verification repository
pub struct RecordManager<V: VerificationRepository> {
    repository: Arc<V>,
}

impl<V: VerificationRepository> Clone for RecordManager<V> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<V: VerificationRepository> RecordManager<V> {
    pub fn new(repository: Arc<V>) -> Self {
        Self { repository }
    }

    /// Build and persist a fresh record, replacing any previous one
    ///
    /// # Arguments
    ///
    /// * `subject_id` - Owner of the code
    /// * `contact_address` - Address the code is delivered to
    /// * `code` - Generated code
    /// * `now` - Issuance instant, the record expires 24 hours later
    pub async fn create(
        &self,
        subject_id: &str,
        contact_address: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<VerificationRecord> {
        let record = VerificationRecord::new(subject_id, contact_address, code, now);
        self.repository.save(&record).await?;
        Ok(record)
    }

    /// Load the record for a subject
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::NotFound)` - Nothing was ever issued for the subject
    pub async fn fetch(&self, subject_id: &str) -> DomainResult<VerificationRecord> {
        self.find(subject_id).await?.ok_or_else(|| DomainError::NotFound {
            resource: "VerificationRecord".to_string(),
        })
    }

    /// Load the record for a subject if one exists
    pub async fn find(&self, subject_id: &str) -> DomainResult<Option<VerificationRecord>> {
        self.repository.find_by_subject(subject_id).await
    }

    pub fn is_expired(&self, record: &VerificationRecord, now: DateTime<Utc>) -> bool {
        record.is_expired(now)
    }

    /// Atomically count one attempt, returning the new total
    pub async fn record_attempt(&self, subject_id: &str) -> DomainResult<u32> {
        self.repository.increment_attempts(subject_id).await
    }

    pub async fn mark_consumed(&self, subject_id: &str, now: DateTime<Utc>) -> DomainResult<()> {
        self.repository.mark_consumed(subject_id, now).await
    }
}
