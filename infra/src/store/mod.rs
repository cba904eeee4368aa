//! Document store abstraction
//!
//! Records live as flat JSON objects addressed by collection and id. The
//! store offers whole-document writes, field merges on existing documents
//! and an atomic numeric increment, which is all the repositories need.

pub mod memory;
pub mod mysql_store;
pub mod redis_store;


pub use memory::InMemoryDocumentStore;
pub use mysql_store::MySqlDocumentStore;
pub use redis_store::RedisDocumentStore;

use async_trait::async_trait;
use std::fmt;

use crate::InfrastructureError;

/// A stored document: top-level field name to JSON value
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Named collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    EmailVerifications,
}

impl Collection {
    /// Collection name as stored
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::EmailVerifications => "emailVerifications",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyed document persistence
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read a document, `None` when absent
    async fn get(&self, collection: Collection, id: &str)
        -> Result<Option<Document>, InfrastructureError>;

    /// Create or fully replace a document
    async fn set(
        &self,
        collection: Collection,
        id: &str,
        document: Document,
    ) -> Result<(), InfrastructureError>;

    /// Merge fields into an existing document
    ///
    /// # Returns
    /// * `Err(InfrastructureError::NotFound)` - Document does not exist
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        fields: Document,
    ) -> Result<(), InfrastructureError>;

    /// Atomically add `by` to an integer field, treating a missing field as zero
    ///
    /// # Returns
    /// * `Ok(value)` - Field value after the increment
    /// * `Err(InfrastructureError::NotFound)` - Document does not exist
    async fn increment(
        &self,
        collection: Collection,
        id: &str,
        field: &str,
        by: i64,
    ) -> Result<i64, InfrastructureError>;

    /// Backend name for logs and health output
    fn backend_name(&self) -> &str;

    /// Check connectivity, always healthy by default
    async fn health_check(&self) -> Result<bool, InfrastructureError> {
        Ok(true)
    }
}

pub(crate) fn not_found(collection: Collection, id: &str) -> InfrastructureError {
    InfrastructureError::NotFound {
        collection: collection.as_str().to_string(),
        id: id.to_string(),
    }
}

/// Hide credentials in a connection URL before logging it
pub fn mask_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***@{}", &url[..scheme_end], &url[at + 1..])
        }
        _ => url.to_string(),
    }
}
