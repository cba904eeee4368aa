//! Traits for outbound notification

use async_trait::async_trait;

/// Trait for email delivery integration
#[async_trait]
pub trait NotifierTrait: Send + Sync {
    /// Send one HTML email
    ///
    /// # Returns
    /// * `Ok(message_id)` - Identifier assigned by the transport
    /// * `Err(reason)` - Delivery failed, no retry is attempted
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> Result<String, String>;
}
