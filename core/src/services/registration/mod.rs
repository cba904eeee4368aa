//! Registration flow built on the verification lifecycle
//!
//! Creates pending accounts, drives their email verification, and sends the
//! welcome and back-office notices once an account is verified.

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::RegistrationService;
pub use types::{AccountVerification, NewUser, RegistrationOutcome, RegistrationStatus};
