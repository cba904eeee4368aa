//! Mock implementation of VerificationRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::verification_record::VerificationRecord;
use crate::errors::DomainError;

use super::r#trait::VerificationRepository;

/// Mock verification repository for testing
#[derive(Clone, Default)]
pub struct MockVerificationRepository {
    records: Arc<RwLock<HashMap<String, VerificationRecord>>>,
}

impl MockVerificationRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a stored record
    pub async fn get(&self, subject_id: &str) -> Option<VerificationRecord> {
        self.records.read().await.get(subject_id).cloned()
    }

    /// Overwrite a stored record directly
    pub async fn put(&self, record: VerificationRecord) {
        self.records
            .write()
            .await
            .insert(record.subject_id.clone(), record);
    }
}

fn record_not_found() -> DomainError {
    DomainError::NotFound {
        resource: "VerificationRecord".to_string(),
    }
}

#[async_trait]
impl VerificationRepository for MockVerificationRepository {
    async fn find_by_subject(
        &self,
        subject_id: &str,
    ) -> Result<Option<VerificationRecord>, DomainError> {
        Ok(self.records.read().await.get(subject_id).cloned())
    }

    async fn save(&self, record: &VerificationRecord) -> Result<(), DomainError> {
        self.put(record.clone()).await;
        Ok(())
    }

    async fn increment_attempts(&self, subject_id: &str) -> Result<u32, DomainError> {
        let mut records = self.records.write().await;
        let record = records.get_mut(subject_id).ok_or_else(record_not_found)?;
        record.attempt_count += 1;
        Ok(record.attempt_count)
    }

    async fn mark_consumed(&self, subject_id: &str, at: DateTime<Utc>) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        let record = records.get_mut(subject_id).ok_or_else(record_not_found)?;
        record.consume(at);
        Ok(())
    }
}
