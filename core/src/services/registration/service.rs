//! Registration service implementation

use chrono::{DateTime, Utc};
use gc_shared::email::mask_email;
use gc_shared::validation::{require, require_email};
use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, ValidationError, VerificationError};
use crate::repositories::{UserRepository, VerificationRepository};
use crate::services::templates::MessageRenderer;
use crate::services::verification::{NotifierTrait, VerificationService};

use super::types::{AccountVerification, NewUser, RegistrationOutcome, RegistrationStatus};

/// Registration service for GameCash accounts
pub struct RegistrationService<U: UserRepository, V: VerificationRepository, N: NotifierTrait> {
    users: Arc<U>,
    verification: Arc<VerificationService<U, V, N>>,
    notifier: Arc<N>,
    renderer: Arc<dyn MessageRenderer>,
    /// Recipient of new-user notices, disabled when empty
    admin_address: String,
}

impl<U: UserRepository, V: VerificationRepository, N: NotifierTrait> RegistrationService<U, V, N> {
    /// Create a new registration service
    ///
    /// # Arguments
    ///
    /// * `users` - User repository shared with the verification service
    /// * `verification` - Verification lifecycle
    /// * `notifier` - Email delivery
    /// * `renderer` - Email templates
    /// * `admin_address` - Where new-user notices go
    pub fn new(
        users: Arc<U>,
        verification: Arc<VerificationService<U, V, N>>,
        notifier: Arc<N>,
        renderer: Arc<dyn MessageRenderer>,
        admin_address: impl Into<String>,
    ) -> Self {
        Self {
            users,
            verification,
            notifier,
            renderer,
            admin_address: admin_address.into(),
        }
    }

    /// Register an account and send its verification code
    ///
    /// An existing unverified account gets a fresh code instead of an error.
    /// A verification email that cannot be delivered does not fail the
    /// registration, the outcome reports it instead.
    ///
    /// # Returns
    ///
    /// * `Ok(RegistrationOutcome)` - Account exists and is pending verification
    /// * `Err(VerificationError::UserAlreadyRegistered)` - The account is already verified
    pub async fn register_user(&self, new_user: NewUser) -> DomainResult<RegistrationOutcome> {
        require("uid", &new_user.uid).map_err(ValidationError::from)?;
        require_email("email", &new_user.email).map_err(ValidationError::from)?;

        // Lookup and create must agree on the stored id
        let uid = new_user.uid.trim();

        let (user, created) = match self.users.find_by_id(uid).await? {
            Some(existing) if existing.email_verified => {
                tracing::info!(
                    subject_id = %existing.id,
                    event = "registration_rejected",
                    "Registration for an already verified account"
                );
                return Err(VerificationError::UserAlreadyRegistered.into());
            }
            Some(existing) => {
                tracing::info!(
                    subject_id = %existing.id,
                    event = "registration_pending_resend",
                    "Account exists but is unverified, sending a new code"
                );
                (existing, false)
            }
            None => {
                let user = User::new(
                    uid,
                    new_user.email.trim(),
                    non_blank(new_user.display_name),
                    non_blank(new_user.phone),
                    self.verification.now(),
                );
                let user = self.users.create(user).await?;
                tracing::info!(
                    subject_id = %user.id,
                    email = %mask_email(&user.email),
                    event = "user_registered",
                    "Created pending account"
                );
                (user, true)
            }
        };

        match self.verification.issue_verification(&user).await {
            Ok(issued) => Ok(RegistrationOutcome {
                user_id: user.id,
                created,
                verification_sent: true,
                expires_at: Some(issued.expires_at),
                delivery_error: None,
            }),
            Err(DomainError::Verification(VerificationError::DeliveryFailed { reason })) => {
                Ok(RegistrationOutcome {
                    user_id: user.id,
                    created,
                    verification_sent: false,
                    expires_at: None,
                    delivery_error: Some(reason),
                })
            }
            Err(e) => Err(e),
        }
    }

    /// Verify an account's code, then notify the back office and welcome the user
    ///
    /// Both notices are best effort. A delivered welcome email is recorded on
    /// the account.
    pub async fn verify_account(&self, uid: &str, code: &str) -> DomainResult<AccountVerification> {
        let outcome = self.verification.verify(uid, code).await?;

        let user = self
            .users
            .find_by_id(uid)
            .await?
            .ok_or_else(DomainError::user_not_found)?;

        let admin_notified = self.notify_admin(&user, outcome.verified_at).await;
        let welcome_email_sent = match self.deliver_welcome(&user).await {
            Ok(_) => true,
            Err(reason) => {
                tracing::warn!(
                    subject_id = uid,
                    error = %reason,
                    event = "welcome_delivery_failed",
                    "Welcome email not sent"
                );
                false
            }
        };

        let user = self
            .users
            .find_by_id(uid)
            .await?
            .ok_or_else(DomainError::user_not_found)?;

        Ok(AccountVerification {
            user,
            verified_at: outcome.verified_at,
            welcome_email_sent,
            admin_notified,
        })
    }

    /// Send the welcome email to a verified account
    ///
    /// # Returns
    ///
    /// * `Ok(sent_at)` - Email delivered and recorded on the account
    /// * `Err(VerificationError::EmailNotVerified)` - The account is not verified yet
    /// * `Err(VerificationError::DeliveryFailed)` - The transport refused the message
    pub async fn send_welcome_email(&self, uid: &str) -> DomainResult<DateTime<Utc>> {
        require("userId", uid).map_err(ValidationError::from)?;
        let user = self
            .users
            .find_by_id(uid)
            .await?
            .ok_or_else(DomainError::user_not_found)?;

        if !user.email_verified {
            return Err(VerificationError::EmailNotVerified.into());
        }

        self.deliver_welcome(&user)
            .await
            .map_err(|reason| DomainError::from(VerificationError::DeliveryFailed { reason }))
    }

    /// Account and verification state
    pub async fn registration_status(&self, uid: &str) -> DomainResult<RegistrationStatus> {
        let status = self.verification.verification_status(uid).await?;
        let user = self
            .users
            .find_by_id(uid)
            .await?
            .ok_or_else(DomainError::user_not_found)?;

        Ok(RegistrationStatus {
            user,
            verification: status.verification,
        })
    }

    async fn deliver_welcome(&self, user: &User) -> Result<DateTime<Utc>, String> {
        let rendered = self.renderer.render_welcome(user);
        self.notifier
            .send_email(&user.email, &rendered.subject, &rendered.html)
            .await?;

        let sent_at = self.verification.now();
        if let Err(e) = self.users.mark_welcome_email_sent(&user.id, sent_at).await {
            tracing::warn!(
                subject_id = %user.id,
                error = %e,
                event = "welcome_flag_not_saved",
                "Welcome email sent but flag not recorded"
            );
        }

        tracing::info!(
            subject_id = %user.id,
            event = "welcome_sent",
            "Welcome email sent"
        );
        Ok(sent_at)
    }

    async fn notify_admin(&self, user: &User, verified_at: DateTime<Utc>) -> bool {
        if self.admin_address.trim().is_empty() {
            return false;
        }

        let rendered = self.renderer.render_admin_new_user(user, verified_at);
        match self
            .notifier
            .send_email(&self.admin_address, &rendered.subject, &rendered.html)
            .await
        {
            Ok(_) => true,
            Err(reason) => {
                tracing::warn!(
                    subject_id = %user.id,
                    error = %reason,
                    event = "admin_notice_failed",
                    "New user notice not sent"
                );
                false
            }
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
