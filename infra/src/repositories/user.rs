//! `users` collection repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use gc_core::domain::entities::User;
use gc_core::errors::DomainError;
use gc_core::repositories::UserRepository;
use gc_shared::timestamp;

use super::{from_document, to_document};
use crate::store::{Collection, Document, DocumentStore};

/// User repository over a document store
#[derive(Clone)]
pub struct DocumentUserRepository {
    store: Arc<dyn DocumentStore>,
}

impl DocumentUserRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for DocumentUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        let Some(mut document) = self.store.get(Collection::Users, id).await? else {
            return Ok(None);
        };
        // Older documents may not repeat the uid in their body
        document.entry("uid").or_insert_with(|| json!(id));
        Ok(Some(from_document(document)?))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let document = to_document(&user)?;
        self.store.set(Collection::Users, &user.id, document).await?;
        debug!(user_id = %user.id, "User document created");
        Ok(user)
    }

    async fn mark_email_verified(&self, id: &str, at: DateTime<Utc>) -> Result<(), DomainError> {
        let stamp = timestamp::to_rfc3339(&at);
        let mut fields = Document::new();
        fields.insert("emailVerified".to_string(), json!(true));
        fields.insert("emailVerifiedAt".to_string(), json!(stamp));
        fields.insert("accountStatus".to_string(), json!("active"));
        fields.insert("updatedAt".to_string(), json!(stamp));
        self.store.update(Collection::Users, id, fields).await?;
        Ok(())
    }

    async fn mark_welcome_email_sent(
        &self,
        id: &str,
        at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let stamp = timestamp::to_rfc3339(&at);
        let mut fields = Document::new();
        fields.insert("welcomeEmailSent".to_string(), json!(true));
        fields.insert("welcomeEmailSentDate".to_string(), json!(stamp));
        fields.insert("updatedAt".to_string(), json!(stamp));
        self.store.update(Collection::Users, id, fields).await?;
        Ok(())
    }
}
