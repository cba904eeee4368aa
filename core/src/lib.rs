//! # GameCash Core
//!
//! Domain layer for GameCash transactional email: the email verification
//! code lifecycle, the registration flow built on top of it, order, review
//! and contact notices, and the repository and notifier seams the
//! infrastructure layer implements.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
