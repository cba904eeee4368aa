//! Mail Service Interface

use async_trait::async_trait;

use crate::InfrastructureError;

/// One HTML email ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

impl OutboundEmail {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            html: html.into(),
        }
    }
}

/// Mail service trait for sending transactional email
///
/// Implementations include:
/// - SMTP relay
/// - Mock implementation for development
#[async_trait]
pub trait MailService: Send + Sync {
    /// Send a message
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Identifier of the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send(&self, email: &OutboundEmail) -> Result<String, InfrastructureError>;

    /// Provider name (e.g. "SMTP", "Mock")
    fn provider_name(&self) -> &str;

    /// Check if the service is available, always true by default
    async fn is_available(&self) -> bool {
        true
    }
}
