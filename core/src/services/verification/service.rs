//! Main verification service implementation

use chrono::{DateTime, Utc};
use gc_shared::email::mask_email;
use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, ValidationError, VerificationError};
use crate::repositories::{UserRepository, VerificationRepository};
use crate::services::account::AccountStatusProjector;
use crate::services::templates::MessageRenderer;

use super::clock::{Clock, SystemClock};
use super::code_generator::{CodeGenerator, CodeSource};
use super::config::VerificationServiceConfig;
use super::policy::AttemptPolicy;
use super::record_manager::RecordManager;
use super::traits::NotifierTrait;
use super::types::{IssueOutcome, VerificationStatus, VerificationView, VerifyOutcome};

/// Verification service driving the email verification lifecycle
///
/// States per subject: unissued, pending, verified or expired. Issuing a code
/// moves a subject to pending, resending replaces the pending code, and a
/// correct guess before expiry consumes it.
pub struct VerificationService<U: UserRepository, V: VerificationRepository, N: NotifierTrait> {
    /// User store, read for contact details and written on activation
    users: Arc<U>,
    /// Verification record lifecycle
    records: RecordManager<V>,
    /// Account activation
    projector: AccountStatusProjector<U>,
    /// Email delivery
    notifier: Arc<N>,
    /// Email templates
    renderer: Arc<dyn MessageRenderer>,
    /// Code generator
    codes: Arc<dyn CodeSource>,
    /// Time source
    clock: Arc<dyn Clock>,
    /// Attempt cap
    policy: AttemptPolicy,
}

impl<U: UserRepository, V: VerificationRepository, N: NotifierTrait> VerificationService<U, V, N> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `users` - User repository implementation
    /// * `verifications` - Verification record repository implementation
    /// * `notifier` - Email delivery implementation
    /// * `renderer` - Email templates
    /// * `config` - Service configuration
    pub fn new(
        users: Arc<U>,
        verifications: Arc<V>,
        notifier: Arc<N>,
        renderer: Arc<dyn MessageRenderer>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            projector: AccountStatusProjector::new(users.clone()),
            users,
            records: RecordManager::new(verifications),
            notifier,
            renderer,
            codes: Arc::new(CodeGenerator::new(config.code_length)),
            clock: Arc::new(SystemClock),
            policy: AttemptPolicy::new(config.max_attempts),
        }
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the code generator
    pub fn with_code_source(mut self, codes: Arc<dyn CodeSource>) -> Self {
        self.codes = codes;
        self
    }

    /// Current instant according to the service clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Issue a fresh code to a user and email it
    ///
    /// The record is persisted before the email is sent, so a delivery
    /// failure leaves a valid code in the store and the caller may resend.
    ///
    /// # Returns
    ///
    /// * `Ok(IssueOutcome)` - Code stored and handed to the transport
    /// * `Err(VerificationError::AlreadyVerified)` - The user is already verified
    /// * `Err(VerificationError::DeliveryFailed)` - The transport refused the message
    pub async fn issue_verification(&self, user: &User) -> DomainResult<IssueOutcome> {
        if user.email_verified {
            return Err(VerificationError::AlreadyVerified.into());
        }
        if user.email.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            }
            .into());
        }

        let now = self.clock.now();
        let code = self.codes.generate();
        let record = self.records.create(&user.id, &user.email, &code, now).await?;

        tracing::info!(
            subject_id = %user.id,
            email = %mask_email(&user.email),
            expires_at = %record.expires_at,
            event = "verification_issued",
            "Issued email verification code"
        );

        let rendered = self.renderer.render_verification(user, &code);
        let message_id = self
            .notifier
            .send_email(&user.email, &rendered.subject, &rendered.html)
            .await
            .map_err(|reason| {
                tracing::error!(
                    subject_id = %user.id,
                    error = %reason,
                    event = "verification_delivery_failed",
                    "Failed to send verification email"
                );
                VerificationError::DeliveryFailed { reason }
            })?;

        Ok(IssueOutcome {
            issued_at: record.issued_at,
            expires_at: record.expires_at,
            message_id,
        })
    }

    /// Load a user and issue a code to them
    pub async fn send_verification(&self, subject_id: &str) -> DomainResult<IssueOutcome> {
        let user = self.load_user(subject_id).await?;
        self.issue_verification(&user).await
    }

    /// Replace the pending code of a subject with a new one
    ///
    /// The previous code stops working and the attempt counter starts over.
    pub async fn resend_verification(&self, subject_id: &str) -> DomainResult<IssueOutcome> {
        let user = self.load_user(subject_id).await?;
        if user.email_verified {
            return Err(VerificationError::AlreadyVerified.into());
        }

        tracing::info!(
            subject_id = subject_id,
            event = "verification_resend",
            "Resending email verification code"
        );
        self.issue_verification(&user).await
    }

    /// Check a submitted code
    ///
    /// Checks run in order: record exists, not already consumed, not expired,
    /// attempt policy. The attempt is then counted whatever the outcome of the
    /// comparison. Expired and consumed records are left untouched.
    ///
    /// On success the account is activated, then the record consumed, then a
    /// confirmation email attempted. A failed confirmation is logged and does
    /// not undo the verification.
    pub async fn verify(&self, subject_id: &str, code: &str) -> DomainResult<VerifyOutcome> {
        if subject_id.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "userId".to_string(),
            }
            .into());
        }
        if code.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "code".to_string(),
            }
            .into());
        }

        let now = self.clock.now();
        let record = match self.records.fetch(subject_id).await {
            Ok(record) => record,
            Err(DomainError::NotFound { .. }) => {
                return Err(VerificationError::NoVerificationInProgress.into())
            }
            Err(e) => return Err(e),
        };

        if record.consumed {
            return Err(VerificationError::AlreadyVerified.into());
        }

        if self.records.is_expired(&record, now) {
            tracing::info!(
                subject_id = subject_id,
                expires_at = %record.expires_at,
                event = "verification_expired",
                "Verification code expired"
            );
            return Err(VerificationError::Expired.into());
        }

        if !self.policy.allows_attempt(record.attempt_count) {
            tracing::warn!(
                subject_id = subject_id,
                attempts = record.attempt_count,
                event = "verification_attempts_exhausted",
                "Verification attempt refused by policy"
            );
            return Err(VerificationError::TooManyAttempts {
                attempts: record.attempt_count,
            }
            .into());
        }

        let attempts = self.records.record_attempt(subject_id).await?;

        if !record.matches(code) {
            tracing::warn!(
                subject_id = subject_id,
                attempts = attempts,
                event = "verification_failed",
                "Incorrect verification code"
            );
            return Err(VerificationError::IncorrectCode { attempts }.into());
        }

        // A consumed record implies an active account
        self.projector.project_verified(subject_id, now).await?;
        self.records.mark_consumed(subject_id, now).await?;

        tracing::info!(
            subject_id = subject_id,
            attempts = attempts,
            event = "verification_succeeded",
            "Email verified"
        );

        let confirmation_sent = self.send_confirmation(subject_id, now).await;

        Ok(VerifyOutcome {
            verified_at: now,
            attempt_count: attempts,
            confirmation_sent,
        })
    }

    /// Verification state of a subject, never exposes the code
    pub async fn verification_status(&self, subject_id: &str) -> DomainResult<VerificationStatus> {
        let user = self.load_user(subject_id).await?;
        let now = self.clock.now();
        let verification = self
            .records
            .find(subject_id)
            .await?
            .map(|record| VerificationView::from_record(&record, now));

        Ok(VerificationStatus {
            email_verified: user.email_verified,
            email_verified_at: user.email_verified_at,
            verification,
        })
    }

    async fn load_user(&self, subject_id: &str) -> DomainResult<User> {
        if subject_id.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "userId".to_string(),
            }
            .into());
        }
        self.users
            .find_by_id(subject_id)
            .await?
            .ok_or_else(DomainError::user_not_found)
    }

    async fn send_confirmation(&self, subject_id: &str, verified_at: DateTime<Utc>) -> bool {
        let user = match self.users.find_by_id(subject_id).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                tracing::warn!(
                    subject_id = subject_id,
                    event = "confirmation_skipped",
                    "User vanished before confirmation email"
                );
                return false;
            }
            Err(e) => {
                tracing::warn!(
                    subject_id = subject_id,
                    error = %e,
                    event = "confirmation_skipped",
                    "Could not load user for confirmation email"
                );
                return false;
            }
        };

        let rendered = self.renderer.render_confirmation(&user, verified_at);
        match self
            .notifier
            .send_email(&user.email, &rendered.subject, &rendered.html)
            .await
        {
            Ok(_) => true,
            Err(reason) => {
                tracing::warn!(
                    subject_id = subject_id,
                    error = %reason,
                    event = "confirmation_delivery_failed",
                    "Confirmation email not sent"
                );
                false
            }
        }
    }
}
