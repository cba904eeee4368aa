//! Outbound mail configuration

use serde::{Deserialize, Serialize};

/// Mail transport provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Authenticated SMTP relay
    Smtp,
    /// Log-only provider for development and tests
    #[default]
    Mock,
}

/// Mail transport and sender identity
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    #[serde(default)]
    pub provider: MailProvider,

    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    #[serde(default)]
    pub smtp_username: String,

    #[serde(default)]
    pub smtp_password: String,

    /// Display name of the sender
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Sender address, falls back to the SMTP username when empty
    #[serde(default)]
    pub from_address: String,

    /// Recipient of new-user notices, falls back to the sender address
    #[serde(default)]
    pub admin_address: String,

    /// Storefront URL linked from templates
    #[serde(default = "default_website_url")]
    pub website_url: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::default(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_name: default_from_name(),
            from_address: String::new(),
            admin_address: String::new(),
            website_url: default_website_url(),
        }
    }
}

impl MailConfig {
    /// Effective sender address
    pub fn sender_address(&self) -> &str {
        if self.from_address.trim().is_empty() {
            &self.smtp_username
        } else {
            &self.from_address
        }
    }

    /// Effective admin notification address
    pub fn admin_recipient(&self) -> &str {
        if self.admin_address.trim().is_empty() {
            self.sender_address()
        } else {
            &self.admin_address
        }
    }

    /// Whether SMTP credentials are present
    pub fn has_smtp_credentials(&self) -> bool {
        !self.smtp_username.is_empty() && !self.smtp_password.is_empty()
    }
}

fn default_smtp_host() -> String {
    String::from("smtp.gmail.com")
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_name() -> String {
    String::from("GameCash")
}

fn default_website_url() -> String {
    String::from("https://gamecash.fr")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_falls_back_to_username() {
        let mut config = MailConfig::default();
        config.smtp_username = "contact@gamecash.fr".to_string();
        assert_eq!(config.sender_address(), "contact@gamecash.fr");
        assert_eq!(config.admin_recipient(), "contact@gamecash.fr");

        config.admin_address = "admin@gamecash.fr".to_string();
        assert_eq!(config.admin_recipient(), "admin@gamecash.fr");
    }

    #[test]
    fn test_credentials_required() {
        let mut config = MailConfig::default();
        assert!(!config.has_smtp_credentials());
        config.smtp_username = "user".to_string();
        config.smtp_password = "pass".to_string();
        assert!(config.has_smtp_credentials());
    }
}
