//! Shared utilities and common types for the GameCash notification server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and layered loading
//! - Error response structures
//! - Utility functions (email validation, timestamp normalization)
//! - Language detection for localized responses

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use self::config::{
    AppConfig, AuthConfig, ConfigError, CorsConfig, Environment, LoggingConfig, MailConfig,
    MailProvider, ServerConfig, StoreBackend, StoreConfig, VerificationConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::Language;
pub use utils::{email, timestamp, validation};
