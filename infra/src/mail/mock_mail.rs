//! Mock Mail Service Implementation
//!
//! Logs messages instead of sending them and keeps an outbox for tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use gc_shared::email::{is_valid_email, mask_email};

use super::mail_service::{MailService, OutboundEmail};
use crate::InfrastructureError;

/// Mock mail service for development and testing
#[derive(Clone, Default)]
pub struct MockMailService {
    outbox: Arc<Mutex<Vec<OutboundEmail>>>,
    /// Whether to simulate failures
    simulate_failure: Arc<AtomicBool>,
}

impl MockMailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// Messages accepted so far
    pub async fn outbox(&self) -> Vec<OutboundEmail> {
        self.outbox.lock().await.clone()
    }

    pub async fn message_count(&self) -> usize {
        self.outbox.lock().await.len()
    }
}

#[async_trait]
impl MailService for MockMailService {
    async fn send(&self, email: &OutboundEmail) -> Result<String, InfrastructureError> {
        if !is_valid_email(&email.to) {
            return Err(InfrastructureError::Mail(format!(
                "Invalid recipient address: {}",
                mask_email(&email.to)
            )));
        }

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(to = %mask_email(&email.to), "Mock mail service simulating failure");
            return Err(InfrastructureError::Mail(
                "Simulated mail delivery failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        self.outbox.lock().await.push(email.clone());

        info!(
            event = "mail_sent",
            provider = "mock",
            to = %mask_email(&email.to),
            subject = %email.subject,
            message_id = %message_id,
            "Mock email accepted"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
