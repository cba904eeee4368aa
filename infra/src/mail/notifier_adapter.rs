//! Mail Service Notifier Adapter
//!
//! Implements the core `NotifierTrait` on top of any [`MailService`], bridging
//! the infrastructure providers with the domain services.

use async_trait::async_trait;
use std::sync::Arc;

use gc_core::services::verification::NotifierTrait;

use super::mail_service::{MailService, OutboundEmail};

/// Adapter that implements the core NotifierTrait for a mail provider
#[derive(Clone)]
pub struct MailNotifier {
    inner: Arc<dyn MailService>,
}

impl MailNotifier {
    pub fn new(inner: Arc<dyn MailService>) -> Self {
        Self { inner }
    }

    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

#[async_trait]
impl NotifierTrait for MailNotifier {
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> Result<String, String> {
        self.inner
            .send(&OutboundEmail::new(to, subject, html))
            .await
            .map_err(|e| e.to_string())
    }
}
