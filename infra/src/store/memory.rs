//! In-memory document store for development and tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::{not_found, Collection, Document, DocumentStore};
use crate::InfrastructureError;

type DocumentKey = (Collection, String);

/// Process-local store; contents are lost on restart
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    documents: Arc<RwLock<HashMap<DocumentKey, Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection
    pub async fn len(&self, collection: Collection) -> usize {
        self.documents
            .read()
            .await
            .keys()
            .filter(|(c, _)| *c == collection)
            .count()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, InfrastructureError> {
        let documents = self.documents.read().await;
        Ok(documents.get(&(collection, id.to_string())).cloned())
    }

    async fn set(
        &self,
        collection: Collection,
        id: &str,
        document: Document,
    ) -> Result<(), InfrastructureError> {
        debug!(collection = %collection, id = %id, "Writing document");
        let mut documents = self.documents.write().await;
        documents.insert((collection, id.to_string()), document);
        Ok(())
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        fields: Document,
    ) -> Result<(), InfrastructureError> {
        let mut documents = self.documents.write().await;
        let document = documents
            .get_mut(&(collection, id.to_string()))
            .ok_or_else(|| not_found(collection, id))?;
        for (field, value) in fields {
            document.insert(field, value);
        }
        Ok(())
    }

    async fn increment(
        &self,
        collection: Collection,
        id: &str,
        field: &str,
        by: i64,
    ) -> Result<i64, InfrastructureError> {
        let mut documents = self.documents.write().await;
        let document = documents
            .get_mut(&(collection, id.to_string()))
            .ok_or_else(|| not_found(collection, id))?;
        let current = document.get(field).and_then(|v| v.as_i64()).unwrap_or(0);
        let next = current + by;
        document.insert(field.to_string(), serde_json::Value::from(next));
        Ok(next)
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
