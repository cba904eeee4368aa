//! Configuration for the verification service

use gc_shared::VerificationConfig;

use crate::domain::entities::verification_record::DEFAULT_CODE_LENGTH;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Digits per generated code
    pub code_length: usize,
    /// Attempt cap per issued code, `None` tracks attempts without enforcing
    pub max_attempts: Option<u32>,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: None,
        }
    }
}

impl From<&VerificationConfig> for VerificationServiceConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            code_length: config.code_length,
            max_attempts: config.max_attempts,
        }
    }
}
