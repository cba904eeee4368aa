//! Outbound Mail Module
//!
//! Transactional email delivery for verification codes and account notices.
//!
//! ## Features
//!
//! - **Mail Service Trait**: Common interface for all providers
//! - **SMTP**: Authenticated relay via lettre
//! - **Mock Implementation**: Log-only outbox for development and tests
//! - **Notifier Adapter**: Bridges any provider to the core notifier trait

use std::sync::Arc;

pub mod mail_service;
pub mod mock_mail;
pub mod notifier_adapter;
pub mod smtp;

pub use mail_service::{MailService, OutboundEmail};
pub use mock_mail::MockMailService;
pub use notifier_adapter::MailNotifier;
pub use smtp::SmtpMailService;

use gc_shared::{MailConfig, MailProvider};

#[cfg(test)]
mod tests;

/// Create a mail service from configuration
///
/// SMTP without credentials, or an SMTP transport that fails to build,
/// falls back to the mock provider so development setups still run.
pub fn create_mail_service(config: &MailConfig) -> Arc<dyn MailService> {
    match config.provider {
        MailProvider::Mock => Arc::new(MockMailService::new()),
        MailProvider::Smtp => {
            if !config.has_smtp_credentials() {
                tracing::warn!("SMTP credentials missing, using mock mail service");
                return Arc::new(MockMailService::new());
            }

            match SmtpMailService::new(config) {
                Ok(service) => Arc::new(service),
                Err(e) => {
                    tracing::error!("Failed to initialize SMTP mail service: {}", e);
                    tracing::warn!("Falling back to mock mail service");
                    Arc::new(MockMailService::new())
                }
            }
        }
    }
}
