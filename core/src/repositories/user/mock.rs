//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::r#trait::UserRepository;

/// Mock user repository for testing
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
    should_fail: Arc<AtomicBool>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock repository seeded with users
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let map = users.into_iter().map(|u| (u.id.clone(), u)).collect();
        Self {
            users: Arc::new(RwLock::new(map)),
            should_fail: Arc::default(),
        }
    }

    /// Make account updates fail as a store outage would
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Internal {
                message: "user store unavailable".to_string(),
            });
        }
        Ok(())
    }

    /// Snapshot of a stored user
    pub async fn get(&self, id: &str) -> Option<User> {
        self.users.read().await.get(id).cloned()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn mark_email_verified(&self, id: &str, at: DateTime<Utc>) -> Result<(), DomainError> {
        self.check_available()?;
        let mut users = self.users.write().await;
        let user = users.get_mut(id).ok_or_else(DomainError::user_not_found)?;
        user.mark_email_verified(at);
        Ok(())
    }

    async fn mark_welcome_email_sent(
        &self,
        id: &str,
        at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(id).ok_or_else(DomainError::user_not_found)?;
        user.mark_welcome_email_sent(at);
        Ok(())
    }
}
