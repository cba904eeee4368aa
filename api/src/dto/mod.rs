//! Request and response bodies
//!
//! Field names are camelCase on the wire.

pub mod notifications;
pub mod registration;
pub mod verification;
