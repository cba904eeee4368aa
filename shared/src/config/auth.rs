//! API key configuration

use serde::{Deserialize, Serialize};

/// Shared secret callers present as `Authorization: Bearer <api_key>`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Expected API key. Empty disables the check outside production.
    #[serde(default)]
    pub api_key: String,
}

impl AuthConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into() }
    }

    /// Whether requests must carry the key
    pub fn is_enabled(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
