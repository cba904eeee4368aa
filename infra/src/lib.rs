//! # Infrastructure Layer
//!
//! Concrete implementations for the GameCash notification services:
//! document stores holding the `users` and `emailVerifications`
//! collections, repository adapters over those stores, and outbound mail.

pub use gc_core::errors::*;

/// Document stores: in-memory, Redis and MySQL backends
pub mod store;

/// Repository implementations over a document store
pub mod repositories;

/// Outbound email providers and the notifier adapter
pub mod mail;

/// Wiring from configuration to concrete services
pub mod bootstrap;

pub use bootstrap::{build_document_store, build_mail_notifier, initialize, InfrastructureServices};
pub use mail::{create_mail_service, MailNotifier, MailService, MockMailService, OutboundEmail};
pub use repositories::{DocumentUserRepository, DocumentVerificationRepository};
pub use store::{
    Collection, Document, DocumentStore, InMemoryDocumentStore, MySqlDocumentStore, RedisDocumentStore,
};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Stored document could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Addressed document does not exist
    #[error("Document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail transport error
    #[error("Mail service error: {0}")]
    Mail(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::NotFound { collection, id } => DomainError::NotFound {
                resource: format!("{}/{}", collection, id),
            },
            other => DomainError::Internal {
                message: other.to_string(),
            },
        }
    }
}
