//! Redis document store
//!
//! Each document is one hash at `{prefix}:{collection}:{id}`. Hash fields are
//! the document's top-level fields, each holding the JSON encoding of its
//! value, so integer fields stay usable with `HINCRBY`.

use async_trait::async_trait;
use redis::{aio::MultiplexedConnection, AsyncCommands, Client, RedisError, RedisResult};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use super::{mask_url, not_found, Collection, Document, DocumentStore};
use crate::InfrastructureError;

/// Merge fields only when the hash already exists
const UPDATE_SCRIPT: &str = r#"
if redis.call('EXISTS', KEYS[1]) == 0 then
    return 0
end
redis.call('HSET', KEYS[1], unpack(ARGV))
return 1
"#;

/// Increment a field only when the hash already exists
const INCREMENT_SCRIPT: &str = r#"
if redis.call('EXISTS', KEYS[1]) == 0 then
    return false
end
return redis.call('HINCRBY', KEYS[1], ARGV[1], ARGV[2])
"#;

type RedisFuture<T> = Pin<Box<dyn Future<Output = RedisResult<T>> + Send>>;

/// Redis-backed document store with connection retry
#[derive(Clone)]
pub struct RedisDocumentStore {
    connection: MultiplexedConnection,
    key_prefix: String,
    /// Maximum number of attempts per operation
    max_retries: u32,
    /// Base delay between retries (exponential backoff)
    retry_delay_ms: u64,
}

impl RedisDocumentStore {
    /// Connect with the default retry settings
    pub async fn connect(url: &str, key_prefix: &str) -> Result<Self, InfrastructureError> {
        Self::connect_with_retry_config(url, key_prefix, 3, 100).await
    }

    /// Connect with custom retry settings
    pub async fn connect_with_retry_config(
        url: &str,
        key_prefix: &str,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<Self, InfrastructureError> {
        info!(url = %mask_url(url), "Connecting Redis document store");

        let client = Client::open(url).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection =
            Self::create_connection_with_retry(client, max_retries, retry_delay_ms).await?;

        info!("Redis document store connected");

        Ok(Self {
            connection,
            key_prefix: key_prefix.to_string(),
            max_retries,
            retry_delay_ms,
        })
    }

    async fn create_connection_with_retry(
        client: Client,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = retry_delay_ms;

        loop {
            attempts += 1;
            debug!("Attempting to connect to Redis (attempt {})", attempts);

            match client.get_multiplexed_async_connection().await {
                Ok(connection) => return Ok(connection),
                Err(e) if attempts < max_retries => {
                    warn!(
                        "Failed to connect to Redis (attempt {}/{}): {}. Retrying in {}ms...",
                        attempts, max_retries, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(5000);
                }
                Err(e) => {
                    error!("Failed to connect to Redis after {} attempts: {}", attempts, e);
                    return Err(InfrastructureError::Cache(e));
                }
            }
        }
    }

    /// Hash key for a document
    pub fn document_key(&self, collection: Collection, id: &str) -> String {
        format!("{}:{}:{}", self.key_prefix, collection.as_str(), id)
    }

    async fn execute_with_retry<F, T>(&self, operation: F) -> RedisResult<T>
    where
        F: Fn(MultiplexedConnection) -> RedisFuture<T>,
    {
        let mut attempts = 0;
        let mut delay = self.retry_delay_ms;

        loop {
            attempts += 1;

            match operation(self.connection.clone()).await {
                Ok(result) => return Ok(result),
                Err(e) if attempts < self.max_retries && is_retriable_error(&e) => {
                    warn!(
                        "Redis operation failed (attempt {}/{}): {}. Retrying in {}ms...",
                        attempts, self.max_retries, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(5000);
                }
                Err(e) => {
                    error!("Redis operation failed after {} attempts: {}", attempts, e);
                    return Err(e);
                }
            }
        }
    }
}

#[async_trait]
impl DocumentStore for RedisDocumentStore {
    async fn get(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, InfrastructureError> {
        let key = self.document_key(collection, id);

        let fields = self
            .execute_with_retry(|mut conn| {
                let key = key.clone();
                Box::pin(async move { conn.hgetall::<_, HashMap<String, String>>(key).await })
            })
            .await?;

        if fields.is_empty() {
            debug!(key = %key, "Document not found");
            return Ok(None);
        }

        decode_fields(fields).map(Some)
    }

    async fn set(
        &self,
        collection: Collection,
        id: &str,
        document: Document,
    ) -> Result<(), InfrastructureError> {
        let key = self.document_key(collection, id);
        let items = encode_fields(&document)?;

        self.execute_with_retry(|mut conn| {
            let key = key.clone();
            let items = items.clone();
            Box::pin(async move {
                let mut pipe = redis::pipe();
                pipe.atomic().del(&key).ignore();
                if !items.is_empty() {
                    pipe.hset_multiple(&key, &items).ignore();
                }
                pipe.query_async::<_, ()>(&mut conn).await
            })
        })
        .await?;

        debug!(key = %key, fields = items.len(), "Document written");
        Ok(())
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        fields: Document,
    ) -> Result<(), InfrastructureError> {
        let key = self.document_key(collection, id);
        let items = encode_fields(&fields)?;

        let updated = if items.is_empty() {
            self.execute_with_retry(|mut conn| {
                let key = key.clone();
                Box::pin(async move { conn.exists::<_, bool>(key).await })
            })
            .await?
        } else {
            self.execute_with_retry(|mut conn| {
                let key = key.clone();
                let items = items.clone();
                Box::pin(async move {
                    let script = redis::Script::new(UPDATE_SCRIPT);
                    let mut invocation = script.key(&key);
                    for (field, value) in &items {
                        invocation.arg(field).arg(value);
                    }
                    invocation.invoke_async::<_, i64>(&mut conn).await.map(|n| n == 1)
                })
            })
            .await?
        };

        if updated {
            Ok(())
        } else {
            Err(not_found(collection, id))
        }
    }

    async fn increment(
        &self,
        collection: Collection,
        id: &str,
        field: &str,
        by: i64,
    ) -> Result<i64, InfrastructureError> {
        let key = self.document_key(collection, id);

        // Not retried: a lost reply may already have been applied.
        let mut conn = self.connection.clone();
        let value: Option<i64> = redis::Script::new(INCREMENT_SCRIPT)
            .key(&key)
            .arg(field)
            .arg(by)
            .invoke_async(&mut conn)
            .await
            .map_err(|e| {
                error!(key = %key, field = %field, "Increment failed: {}", e);
                InfrastructureError::Cache(e)
            })?;

        value.ok_or_else(|| not_found(collection, id))
    }

    fn backend_name(&self) -> &str {
        "redis"
    }

    async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let response = self
            .execute_with_retry(|mut conn| {
                Box::pin(async move { redis::cmd("PING").query_async::<_, String>(&mut conn).await })
            })
            .await?;

        if response == "PONG" {
            Ok(true)
        } else {
            warn!("Unexpected Redis PING response: {}", response);
            Ok(false)
        }
    }
}

fn encode_fields(document: &Document) -> Result<Vec<(String, String)>, InfrastructureError> {
    document
        .iter()
        .map(|(field, value)| Ok((field.clone(), serde_json::to_string(value)?)))
        .collect()
}

fn decode_fields(fields: HashMap<String, String>) -> Result<Document, InfrastructureError> {
    fields
        .into_iter()
        .map(|(field, raw)| Ok((field, serde_json::from_str(&raw)?)))
        .collect()
}

pub(crate) fn is_retriable_error(error: &RedisError) -> bool {
    matches!(
        error.kind(),
        redis::ErrorKind::IoError
            | redis::ErrorKind::ClientError
            | redis::ErrorKind::BusyLoadingError
            | redis::ErrorKind::TryAgain
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_encoding_keeps_integers_incrementable() {
        let mut document = Document::new();
        document.insert("attempts".to_string(), json!(3));
        document.insert("email".to_string(), json!("player@gamecash.fr"));
        document.insert("verifiedAt".to_string(), json!(null));

        let encoded: HashMap<String, String> = encode_fields(&document).unwrap().into_iter().collect();
        assert_eq!(encoded["attempts"], "3");
        assert_eq!(encoded["email"], "\"player@gamecash.fr\"");
        assert_eq!(encoded["verifiedAt"], "null");

        let decoded = decode_fields(encoded).unwrap();
        assert_eq!(decoded, document);
    }

    #[test]
    fn test_decode_rejects_non_json_field() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "not json".to_string());
        assert!(matches!(
            decode_fields(fields),
            Err(InfrastructureError::Serialization(_))
        ));
    }

    #[test]
    fn test_retriable_error_kinds() {
        let io = RedisError::from((redis::ErrorKind::IoError, "connection reset"));
        let busy = RedisError::from((redis::ErrorKind::BusyLoadingError, "loading"));
        let type_error = RedisError::from((redis::ErrorKind::TypeError, "wrong type"));
        assert!(is_retriable_error(&io));
        assert!(is_retriable_error(&busy));
        assert!(!is_retriable_error(&type_error));
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let result = RedisDocumentStore::connect_with_retry_config("not-a-url", "gamecash", 1, 10).await;
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }

    async fn live_store() -> RedisDocumentStore {
        let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
        let prefix = format!("gamecash-test-{}", uuid::Uuid::new_v4());
        RedisDocumentStore::connect(&url, &prefix).await.unwrap()
    }

    #[tokio::test]
    #[ignore] // Requires a running Redis instance
    async fn test_live_document_round_trip() {
        let store = live_store().await;
        assert!(store.health_check().await.unwrap());

        let mut document = Document::new();
        document.insert("code".to_string(), json!("012345"));
        document.insert("attempts".to_string(), json!(0));
        store.set(Collection::EmailVerifications, "uid-1", document.clone()).await.unwrap();

        let loaded = store.get(Collection::EmailVerifications, "uid-1").await.unwrap();
        assert_eq!(loaded, Some(document));

        let count = store
            .increment(Collection::EmailVerifications, "uid-1", "attempts", 1)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    #[ignore] // Requires a running Redis instance
    async fn test_live_missing_document_is_not_found() {
        let store = live_store().await;

        let err = store
            .increment(Collection::EmailVerifications, "missing", "attempts", 1)
            .await
            .unwrap_err();
        assert!(matches!(err, InfrastructureError::NotFound { .. }));

        let mut fields = Document::new();
        fields.insert("verified".to_string(), json!(true));
        let err = store.update(Collection::Users, "missing", fields).await.unwrap_err();
        assert!(matches!(err, InfrastructureError::NotFound { .. }));
    }
}
