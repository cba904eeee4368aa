//! Notification service implementation

use gc_shared::email::mask_email;
use gc_shared::validation::{require, require_email};
use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::domain::value_objects::RenderedEmail;
use crate::errors::{DomainError, DomainResult, ValidationError, VerificationError};
use crate::repositories::UserRepository;
use crate::services::templates::NoticeRenderer;
use crate::services::verification::{Clock, NotifierTrait, SystemClock};

use super::types::{
    ContactMessage, ContactOutcome, NoticeReceipt, OrderStatusNotice, OrderSummary, ReviewNotice,
};

/// Sends order, review and contact notices
///
/// Each operation validates its input, renders one template and hands it to
/// the notifier. Orders and reviews are not stored here: the caller sends
/// their details, only the customer is read from the user store.
pub struct NotificationService<U: UserRepository, N: NotifierTrait> {
    users: Arc<U>,
    notifier: Arc<N>,
    renderer: Arc<dyn NoticeRenderer>,
    clock: Arc<dyn Clock>,
    /// Recipient of back-office notices
    admin_address: String,
}

impl<U: UserRepository, N: NotifierTrait> NotificationService<U, N> {
    pub fn new(
        users: Arc<U>,
        notifier: Arc<N>,
        renderer: Arc<dyn NoticeRenderer>,
        admin_address: impl Into<String>,
    ) -> Self {
        Self {
            users,
            notifier,
            renderer,
            clock: Arc::new(SystemClock),
            admin_address: admin_address.into(),
        }
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Email the customer about a change in their order's status
    ///
    /// # Returns
    ///
    /// * `Ok(NoticeReceipt)` - Email handed to the transport
    /// * `Err(DomainError::NotFound)` - No account for `user_id`
    /// * `Err(VerificationError::DeliveryFailed)` - The transport refused the message
    pub async fn notify_order_status(&self, notice: OrderStatusNotice) -> DomainResult<NoticeReceipt> {
        require("orderId", &notice.order.order_id).map_err(ValidationError::from)?;
        require("userId", &notice.user_id).map_err(ValidationError::from)?;
        require("newStatus", notice.status.as_str()).map_err(ValidationError::from)?;

        let customer = self.customer(&notice.user_id).await?;
        let rendered = self.renderer.render_order_status(&customer, &notice);
        let receipt = self.deliver(&customer.email, rendered).await?;

        tracing::info!(
            subject_id = %customer.id,
            order_id = %notice.order.order_id,
            status = notice.status.as_str(),
            email = %mask_email(&customer.email),
            event = "order_status_notified",
            "Order status email sent"
        );
        Ok(receipt)
    }

    /// Tell the back office about a newly placed order
    pub async fn notify_new_order(&self, user_id: &str, order: OrderSummary) -> DomainResult<NoticeReceipt> {
        require("orderId", &order.order_id).map_err(ValidationError::from)?;
        require("userId", user_id).map_err(ValidationError::from)?;
        let admin = self.admin_recipient()?;

        let customer = self.customer(user_id).await?;
        let rendered = self.renderer.render_admin_new_order(&customer, &order);
        let receipt = self.deliver(admin, rendered).await?;

        tracing::info!(
            subject_id = %customer.id,
            order_id = %order.order_id,
            item_count = order.items.len(),
            event = "new_order_notified",
            "New order notice sent"
        );
        Ok(receipt)
    }

    /// Tell the back office about a newly posted review
    ///
    /// Ratings run from 0 to 5.
    pub async fn notify_new_review(&self, review: ReviewNotice) -> DomainResult<NoticeReceipt> {
        require("reviewId", &review.review_id).map_err(ValidationError::from)?;
        require("userId", &review.user_id).map_err(ValidationError::from)?;
        require("comment", &review.comment).map_err(ValidationError::from)?;
        if !(0.0..=5.0).contains(&review.rating) {
            return Err(DomainError::Validation {
                message: format!("rating {} is outside 0..=5", review.rating),
            });
        }
        let admin = self.admin_recipient()?;

        let author = self.customer(&review.user_id).await?;
        let rendered = self.renderer.render_admin_new_review(&author, &review);
        let receipt = self.deliver(admin, rendered).await?;

        tracing::info!(
            subject_id = %author.id,
            review_id = %review.review_id,
            rating = f64::from(review.rating),
            event = "new_review_notified",
            "New review notice sent"
        );
        Ok(receipt)
    }

    /// Forward a contact form message to the back office and acknowledge it
    ///
    /// The back-office copy must go out. The acknowledgement is best effort
    /// and reported in the outcome.
    pub async fn send_contact_message(&self, message: ContactMessage) -> DomainResult<ContactOutcome> {
        require("name", &message.name).map_err(ValidationError::from)?;
        require_email("email", &message.email).map_err(ValidationError::from)?;
        require("subject", &message.subject).map_err(ValidationError::from)?;
        require("message", &message.message).map_err(ValidationError::from)?;
        let admin = self.admin_recipient()?;

        let received_at = self.clock.now();
        let rendered = self.renderer.render_contact_admin(&message, received_at);
        let admin_receipt = self.deliver(admin, rendered).await?;

        let acknowledgement = self.renderer.render_contact_acknowledgement(&message);
        let acknowledgement_sent = match self
            .notifier
            .send_email(message.email.trim(), &acknowledgement.subject, &acknowledgement.html)
            .await
        {
            Ok(_) => true,
            Err(reason) => {
                tracing::warn!(
                    email = %mask_email(&message.email),
                    error = %reason,
                    event = "contact_acknowledgement_failed",
                    "Contact acknowledgement not sent"
                );
                false
            }
        };

        tracing::info!(
            email = %mask_email(&message.email),
            acknowledgement_sent,
            event = "contact_message_forwarded",
            "Contact message forwarded"
        );
        Ok(ContactOutcome {
            admin_receipt,
            acknowledgement_sent,
        })
    }

    async fn customer(&self, user_id: &str) -> DomainResult<User> {
        self.users
            .find_by_id(user_id.trim())
            .await?
            .ok_or_else(DomainError::user_not_found)
    }

    fn admin_recipient(&self) -> DomainResult<&str> {
        let admin = self.admin_address.trim();
        if admin.is_empty() {
            return Err(DomainError::Internal {
                message: "admin notification address is not configured".to_string(),
            });
        }
        Ok(admin)
    }

    async fn deliver(&self, to: &str, rendered: RenderedEmail) -> DomainResult<NoticeReceipt> {
        match self
            .notifier
            .send_email(to, &rendered.subject, &rendered.html)
            .await
        {
            Ok(message_id) => Ok(NoticeReceipt {
                message_id,
                sent_at: self.clock.now(),
            }),
            Err(reason) => {
                tracing::warn!(
                    email = %mask_email(to),
                    error = %reason,
                    event = "notice_delivery_failed",
                    "Notice not sent"
                );
                Err(VerificationError::DeliveryFailed { reason }.into())
            }
        }
    }
}
