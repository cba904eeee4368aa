//! Infrastructure initialization
//!
//! Turns configuration into a document store, the repositories over it and
//! the mail notifier.

use std::sync::Arc;

use gc_shared::{AppConfig, MailConfig, StoreBackend, StoreConfig};

use crate::mail::{create_mail_service, MailNotifier};
use crate::repositories::{DocumentUserRepository, DocumentVerificationRepository};
use crate::store::{DocumentStore, InMemoryDocumentStore, MySqlDocumentStore, RedisDocumentStore};
use crate::InfrastructureError;

/// Infrastructure service container
#[derive(Clone)]
pub struct InfrastructureServices {
    pub store: Arc<dyn DocumentStore>,
    pub users: Arc<DocumentUserRepository>,
    pub verifications: Arc<DocumentVerificationRepository>,
    pub notifier: Arc<MailNotifier>,
}

impl InfrastructureServices {
    /// Assemble services around an existing store and notifier
    pub fn new(store: Arc<dyn DocumentStore>, notifier: MailNotifier) -> Self {
        Self {
            users: Arc::new(DocumentUserRepository::new(store.clone())),
            verifications: Arc::new(DocumentVerificationRepository::new(store.clone())),
            notifier: Arc::new(notifier),
            store,
        }
    }
}

/// Initialize infrastructure services from application configuration
pub async fn initialize(config: &AppConfig) -> Result<InfrastructureServices, InfrastructureError> {
    tracing::info!("Initializing infrastructure services...");

    let store = build_document_store(&config.store).await?;
    let notifier = build_mail_notifier(&config.mail);

    tracing::info!(
        store = store.backend_name(),
        mail = notifier.provider_name(),
        "Infrastructure services initialized"
    );

    Ok(InfrastructureServices::new(store, notifier))
}

/// Connect the configured document store backend
pub async fn build_document_store(
    config: &StoreConfig,
) -> Result<Arc<dyn DocumentStore>, InfrastructureError> {
    let store: Arc<dyn DocumentStore> = match config.backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory document store, data is lost on restart");
            Arc::new(InMemoryDocumentStore::new())
        }
        StoreBackend::Redis => {
            Arc::new(RedisDocumentStore::connect(&config.redis_url, &config.key_prefix).await?)
        }
        StoreBackend::Mysql => Arc::new(
            MySqlDocumentStore::connect(&config.database_url, config.max_connections).await?,
        ),
    };
    Ok(store)
}

/// Build the notifier for the configured mail provider
pub fn build_mail_notifier(config: &MailConfig) -> MailNotifier {
    MailNotifier::new(create_mail_service(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend_needs_no_connection() {
        let store = build_document_store(&StoreConfig::default()).await.unwrap();
        assert_eq!(store.backend_name(), "memory");
    }

    #[tokio::test]
    async fn test_invalid_redis_url_is_config_error() {
        let config = StoreConfig {
            backend: StoreBackend::Redis,
            redis_url: "not-a-url".to_string(),
            ..StoreConfig::default()
        };
        let err = build_document_store(&config).await.err().unwrap();
        assert!(matches!(err, InfrastructureError::Config(_)));
    }

    #[tokio::test]
    async fn test_initialize_development_defaults() {
        let config = AppConfig::for_environment(gc_shared::Environment::Development);
        let services = initialize(&config).await.unwrap();
        assert_eq!(services.store.backend_name(), "memory");
        assert_eq!(services.notifier.provider_name(), "Mock");
    }
}
