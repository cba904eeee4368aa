//! Email verification lifecycle
//!
//! This module provides the complete verification code workflow:
//! - Code generation from the OS CSPRNG
//! - One record per subject with a fixed 24 hour validity window
//! - Verification with attempt tracking and single-use consumption
//! - Resend, which fully supersedes the previous code
//! - Account activation and a best-effort confirmation email

mod clock;
mod code_generator;
mod config;
mod policy;
mod record_manager;
mod service;
mod traits;
mod types;

#[cfg(test)]
pub(crate) mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use code_generator::{CodeGenerator, CodeSource};
pub use config::VerificationServiceConfig;
pub use policy::AttemptPolicy;
pub use record_manager::RecordManager;
pub use service::VerificationService;
pub use traits::NotifierTrait;
pub use types::{IssueOutcome, VerificationStatus, VerificationView, VerifyOutcome};
