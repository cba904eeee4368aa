//! Verification code generation

use rand::{rngs::OsRng, Rng};

use crate::domain::entities::verification_record::DEFAULT_CODE_LENGTH;

/// Produces verification codes
pub trait CodeSource: Send + Sync {
    fn generate(&self) -> String;
}

/// Decimal code generator backed by the OS CSPRNG
///
/// Every digit is drawn independently and uniformly from `0..=9`, so leading
/// zeros are as likely as any other digit and the output always has exactly
/// `length` characters.
#[derive(Debug, Clone, Copy)]
pub struct CodeGenerator {
    length: usize,
}

impl CodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeSource for CodeGenerator {
    fn generate(&self) -> String {
        let mut rng = OsRng;
        (0..self.length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }
}
