//! Projects a completed verification onto the user document

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::errors::DomainResult;
use crate::repositories::UserRepository;

/// Writes the verified state onto the account
pub struct AccountStatusProjector<U: UserRepository> {
    users: Arc<U>,
}

impl<U: UserRepository> AccountStatusProjector<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Mark the subject's email verified and its account active
    ///
    /// Idempotent apart from refreshing the timestamps.
    pub async fn project_verified(&self, subject_id: &str, now: DateTime<Utc>) -> DomainResult<()> {
        self.users.mark_email_verified(subject_id, now).await?;
        tracing::info!(
            subject_id = subject_id,
            event = "account_activated",
            "Account status set to active"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::{AccountStatus, User};
    use crate::repositories::MockUserRepository;
    use chrono::Duration;

    #[tokio::test]
    async fn test_project_verified_is_idempotent() {
        let now = Utc::now();
        let users = Arc::new(MockUserRepository::with_users([User::new(
            "uid-1", "p@g.fr", None, None, now,
        )]));
        let projector = AccountStatusProjector::new(users.clone());

        projector.project_verified("uid-1", now).await.unwrap();
        projector
            .project_verified("uid-1", now + Duration::seconds(1))
            .await
            .unwrap();

        let user = users.get("uid-1").await.unwrap();
        assert!(user.email_verified);
        assert_eq!(user.account_status, AccountStatus::Active);
    }

    #[tokio::test]
    async fn test_project_verified_missing_user() {
        let projector = AccountStatusProjector::new(Arc::new(MockUserRepository::new()));
        assert!(projector
            .project_verified("ghost", Utc::now())
            .await
            .unwrap_err()
            .is_not_found());
    }
}
