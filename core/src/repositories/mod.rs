pub mod user;
pub mod verification;

pub use user::{MockUserRepository, UserRepository};
pub use verification::{MockVerificationRepository, VerificationRepository};
