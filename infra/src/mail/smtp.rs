//! SMTP mail service over lettre's async transport

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{error, info};
use uuid::Uuid;

use gc_shared::email::mask_email;
use gc_shared::MailConfig;

use super::mail_service::{MailService, OutboundEmail};
use crate::InfrastructureError;

/// Port using implicit TLS; any other port negotiates STARTTLS
const SMTPS_PORT: u16 = 465;

/// Authenticated SMTP relay
pub struct SmtpMailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailService {
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        let address: Address = config.sender_address().parse().map_err(|e| {
            InfrastructureError::Config(format!("Invalid sender address: {}", e))
        })?;
        let sender = Mailbox::new(Some(config.from_name.clone()), address);

        let builder = if config.smtp_port == SMTPS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
        }
        .map_err(|e| InfrastructureError::Config(format!("SMTP relay error: {}", e)))?;

        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        info!(
            host = %config.smtp_host,
            port = config.smtp_port,
            "SMTP mail service configured"
        );

        Ok(Self { transport, sender })
    }

    fn message_id(&self) -> String {
        format!("<{}@{}>", Uuid::new_v4(), self.sender.email.domain())
    }

    fn build_message(&self, email: &OutboundEmail, message_id: &str) -> Result<Message, InfrastructureError> {
        let recipient: Mailbox = email.to.parse().map_err(|e| {
            InfrastructureError::Mail(format!("Invalid recipient address: {}", e))
        })?;

        Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject(email.subject.clone())
            .message_id(Some(message_id.to_string()))
            .header(ContentType::TEXT_HTML)
            .body(email.html.clone())
            .map_err(|e| InfrastructureError::Mail(format!("Failed to build email: {}", e)))
    }
}

#[async_trait]
impl MailService for SmtpMailService {
    async fn send(&self, email: &OutboundEmail) -> Result<String, InfrastructureError> {
        let message_id = self.message_id();
        let message = self.build_message(email, &message_id)?;

        self.transport.send(message).await.map_err(|e| {
            error!(to = %mask_email(&email.to), "SMTP delivery failed: {}", e);
            InfrastructureError::Mail(format!("Failed to send email: {}", e))
        })?;

        info!(
            event = "mail_sent",
            provider = "smtp",
            to = %mask_email(&email.to),
            subject = %email.subject,
            message_id = %message_id,
            "Email sent"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "SMTP"
    }

    async fn is_available(&self) -> bool {
        self.transport.test_connection().await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MailConfig {
        MailConfig {
            smtp_username: "noreply@gamecash.fr".to_string(),
            smtp_password: "app-password".to_string(),
            ..MailConfig::default()
        }
    }

    #[tokio::test]
    async fn test_new_uses_username_as_sender() {
        let service = SmtpMailService::new(&config()).unwrap();
        assert_eq!(service.sender.email.to_string(), "noreply@gamecash.fr");
        assert_eq!(service.sender.name.as_deref(), Some("GameCash"));
    }

    #[tokio::test]
    async fn test_new_rejects_invalid_sender() {
        let config = MailConfig {
            from_address: "not an address".to_string(),
            ..config()
        };
        assert!(matches!(
            SmtpMailService::new(&config),
            Err(InfrastructureError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_build_message_sets_headers() {
        let service = SmtpMailService::new(&config()).unwrap();
        let message_id = service.message_id();
        assert!(message_id.ends_with("@gamecash.fr>"));

        let email = OutboundEmail::new("player@gamecash.fr", "Bienvenue sur GameCash !", "<p>Salut</p>");
        let message = service.build_message(&email, &message_id).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("To: player@gamecash.fr"));
        assert!(raw.contains(&format!("Message-ID: {}", message_id)));
        assert!(raw.contains("Content-Type: text/html"));
    }

    #[tokio::test]
    async fn test_build_message_rejects_bad_recipient() {
        let service = SmtpMailService::new(&config()).unwrap();
        let email = OutboundEmail::new("nobody", "Subject", "<p></p>");
        assert!(matches!(
            service.build_message(&email, "<id@gamecash.fr>"),
            Err(InfrastructureError::Mail(_))
        ));
    }
}
