//! User repository trait defining the interface for user data persistence.
//!
//! The verification lifecycle only ever reads a user and flips a few
//! well-known fields, so updates are expressed as targeted operations
//! rather than whole-entity writes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by account uid
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with this uid
    /// * `Err(DomainError)` - Store error or malformed document
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user, overwriting any document with the same uid
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Set `emailVerified`, `emailVerifiedAt`, `accountStatus = active` and `updatedAt`
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No user with this uid
    async fn mark_email_verified(&self, id: &str, at: DateTime<Utc>) -> Result<(), DomainError>;

    /// Set `welcomeEmailSent`, `welcomeEmailSentDate` and `updatedAt`
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No user with this uid
    async fn mark_welcome_email_sent(&self, id: &str, at: DateTime<Utc>)
        -> Result<(), DomainError>;
}
