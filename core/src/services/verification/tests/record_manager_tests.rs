//! Unit tests for the record manager

use chrono::Duration;
use std::sync::Arc;

use crate::errors::DomainError;
use crate::repositories::MockVerificationRepository;
use crate::services::verification::RecordManager;

use super::mocks::t0;

#[tokio::test]
async fn test_create_persists_fresh_record() {
    let repo = Arc::new(MockVerificationRepository::new());
    let manager = RecordManager::new(repo.clone());

    let record = manager.create("uid-1", "a@b.fr", "123456", t0()).await.unwrap();

    assert_eq!(record.expires_at, t0() + Duration::hours(24));
    assert_eq!(repo.get("uid-1").await, Some(record));
}

#[tokio::test]
async fn test_fetch_missing_is_not_found() {
    let manager = RecordManager::new(Arc::new(MockVerificationRepository::new()));
    assert!(matches!(
        manager.fetch("nobody").await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(manager.find("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_record_attempt_returns_running_total() {
    let manager = RecordManager::new(Arc::new(MockVerificationRepository::new()));
    manager.create("uid-1", "a@b.fr", "123456", t0()).await.unwrap();

    assert_eq!(manager.record_attempt("uid-1").await.unwrap(), 1);
    assert_eq!(manager.record_attempt("uid-1").await.unwrap(), 2);
}

#[tokio::test]
async fn test_mark_consumed_and_expiry() {
    let manager = RecordManager::new(Arc::new(MockVerificationRepository::new()));
    let record = manager.create("uid-1", "a@b.fr", "123456", t0()).await.unwrap();

    assert!(!manager.is_expired(&record, t0() + Duration::hours(23)));
    assert!(manager.is_expired(&record, t0() + Duration::hours(24)));

    manager.mark_consumed("uid-1", t0()).await.unwrap();
    let stored = manager.fetch("uid-1").await.unwrap();
    assert!(stored.consumed);
    assert_eq!(stored.consumed_at, Some(t0()));
}
