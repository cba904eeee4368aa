//! Unit tests for the notifier adapter

use std::sync::Arc;

use gc_core::services::verification::NotifierTrait;

use crate::mail::{MailNotifier, MockMailService};

#[tokio::test]
async fn test_adapter_forwards_to_provider() {
    let mock = MockMailService::new();
    let notifier = MailNotifier::new(Arc::new(mock.clone()));

    let id = notifier
        .send_email("player@gamecash.fr", "Bienvenue sur GameCash !", "<p>Bienvenue</p>")
        .await
        .unwrap();

    assert!(id.starts_with("mock_"));
    let outbox = mock.outbox().await;
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].subject, "Bienvenue sur GameCash !");
    assert_eq!(outbox[0].html, "<p>Bienvenue</p>");
    assert_eq!(notifier.provider_name(), "Mock");
}

#[tokio::test]
async fn test_adapter_maps_failure_to_reason() {
    let mock = MockMailService::new();
    mock.set_simulate_failure(true);
    let notifier = MailNotifier::new(Arc::new(mock));

    let reason = notifier
        .send_email("player@gamecash.fr", "Subject", "<p></p>")
        .await
        .unwrap_err();
    assert!(reason.contains("Simulated mail delivery failure"));
}
