//! Attempt policy for verification codes

/// Decides whether another guess is allowed against the current code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttemptPolicy {
    max_attempts: Option<u32>,
}

impl AttemptPolicy {
    pub fn new(max_attempts: Option<u32>) -> Self {
        Self { max_attempts }
    }

    /// Track attempts without ever refusing one
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Whether a guess is allowed given the attempts already recorded
    pub fn allows_attempt(&self, attempt_count: u32) -> bool {
        self.max_attempts.map_or(true, |max| attempt_count < max)
    }

    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }
}
