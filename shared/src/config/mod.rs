//! Configuration module with service-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - API key protecting the HTTP surface
//! - `environment` - Environment detection and logging configuration
//! - `mail` - Outbound email provider and sender identity
//! - `server` - HTTP server and CORS configuration
//! - `store` - Document store backend selection
//! - `verification` - Verification code generation and attempt policy
//!
//! [`AppConfig::load`] layers, from lowest to highest precedence: built-in
//! defaults, `config/default.toml`, `config/{environment}.toml`, and `GC__`
//! prefixed environment variables (`GC__MAIL__SMTP_HOST=smtp.example.com`).

pub mod auth;
pub mod environment;
pub mod mail;
pub mod server;
pub mod store;
pub mod verification;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::AuthConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use mail::{MailConfig, MailProvider};
pub use server::{CorsConfig, ServerConfig};
pub use store::{StoreBackend, StoreConfig};
pub use verification::VerificationConfig;

pub use ::config::ConfigError;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "GC";

/// Separator between nested keys in environment variable overrides
pub const ENV_SEPARATOR: &str = "__";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default = "Environment::from_env")]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// API key configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Document store configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Outbound mail configuration
    #[serde(default)]
    pub mail: MailConfig,

    /// Verification code configuration
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Baseline configuration for an environment
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            server: ServerConfig::default(),
            cors: if environment.is_production() {
                CorsConfig::default()
            } else {
                CorsConfig::development()
            },
            auth: AuthConfig::default(),
            store: StoreConfig::default(),
            mail: MailConfig::default(),
            verification: VerificationConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration from files and the process environment
    ///
    /// A `.env` file is read first when present, so its values take part in
    /// environment detection and in the `GC__` overrides.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let environment = Environment::from_env();
        Self::load_from("config", environment)
    }

    /// Load configuration from an explicit directory for a given environment
    pub fn load_from(dir: &str, environment: Environment) -> Result<Self, ConfigError> {
        let defaults = ::config::Config::try_from(&Self::for_environment(environment))?;

        let settings = ::config::Config::builder()
            .add_source(defaults)
            .add_source(::config::File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(
                ::config::File::with_name(&format!("{}/{}", dir, environment)).required(false),
            )
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the service cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.environment.is_production() && self.auth.api_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "auth.api_key must be set in production".to_string(),
            ));
        }
        if self.verification.code_length == 0 {
            return Err(ConfigError::Message(
                "verification.code_length must be at least 1".to_string(),
            ));
        }
        if self.mail.provider == MailProvider::Smtp && self.mail.smtp_host.trim().is_empty() {
            return Err(ConfigError::Message(
                "mail.smtp_host is required for the smtp provider".to_string(),
            ));
        }
        Ok(())
    }
}
