//! `emailVerifications` collection repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;

use gc_core::domain::entities::verification_record::ATTEMPTS_FIELD;
use gc_core::domain::entities::VerificationRecord;
use gc_core::errors::DomainError;
use gc_core::repositories::VerificationRepository;
use gc_shared::timestamp;

use super::{from_document, to_document};
use crate::store::{Collection, Document, DocumentStore};

/// Verification record repository over a document store
#[derive(Clone)]
pub struct DocumentVerificationRepository {
    store: Arc<dyn DocumentStore>,
}

impl DocumentVerificationRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl VerificationRepository for DocumentVerificationRepository {
    async fn find_by_subject(
        &self,
        subject_id: &str,
    ) -> Result<Option<VerificationRecord>, DomainError> {
        match self
            .store
            .get(Collection::EmailVerifications, subject_id)
            .await?
        {
            Some(document) => Ok(Some(from_document(document)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, record: &VerificationRecord) -> Result<(), DomainError> {
        let document = to_document(record)?;
        self.store
            .set(Collection::EmailVerifications, &record.subject_id, document)
            .await?;
        Ok(())
    }

    async fn increment_attempts(&self, subject_id: &str) -> Result<u32, DomainError> {
        let value = self
            .store
            .increment(Collection::EmailVerifications, subject_id, ATTEMPTS_FIELD, 1)
            .await?;
        u32::try_from(value).map_err(|_| DomainError::Internal {
            message: format!("Attempt counter out of range: {}", value),
        })
    }

    async fn mark_consumed(&self, subject_id: &str, at: DateTime<Utc>) -> Result<(), DomainError> {
        let mut fields = Document::new();
        fields.insert("verified".to_string(), json!(true));
        fields.insert("verifiedAt".to_string(), json!(timestamp::to_rfc3339(&at)));
        self.store
            .update(Collection::EmailVerifications, subject_id, fields)
            .await?;
        Ok(())
    }
}
