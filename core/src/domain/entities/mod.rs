//! Domain entities stored in the document store.

pub mod user;
pub mod verification_record;

// Re-export commonly used types
pub use user::{AccountStatus, User, UserRole};
pub use verification_record::{VerificationRecord, DEFAULT_CODE_LENGTH, VERIFICATION_WINDOW_HOURS};
