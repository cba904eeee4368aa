//! Verification code configuration

use serde::{Deserialize, Serialize};

/// Code generation and attempt policy settings
///
/// The validity window is fixed at 24 hours and is not configurable.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Number of decimal digits in a code
    #[serde(default = "default_code_length")]
    pub code_length: usize,

    /// Attempt cap per issued code, unlimited when absent
    #[serde(default)]
    pub max_attempts: Option<u32>,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_length: default_code_length(),
            max_attempts: None,
        }
    }
}

fn default_code_length() -> usize {
    6
}
