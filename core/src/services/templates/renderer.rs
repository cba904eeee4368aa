//! Template rendering seam

use chrono::{DateTime, Utc};

use crate::domain::entities::user::User;
use crate::domain::value_objects::RenderedEmail;
use crate::services::notifications::{ContactMessage, OrderStatusNotice, OrderSummary, ReviewNotice};

/// Renders the transactional emails of the verification lifecycle
pub trait MessageRenderer: Send + Sync {
    /// Email carrying a freshly issued code
    fn render_verification(&self, user: &User, code: &str) -> RenderedEmail;

    /// Notice that the account is now active
    fn render_confirmation(&self, user: &User, verified_at: DateTime<Utc>) -> RenderedEmail;

    /// Welcome email sent once the account is verified
    fn render_welcome(&self, user: &User) -> RenderedEmail;

    /// Back-office notice about a newly verified account
    fn render_admin_new_user(&self, user: &User, verified_at: DateTime<Utc>) -> RenderedEmail;
}

/// Renders storefront notices about orders, reviews and contact messages
pub trait NoticeRenderer: Send + Sync {
    /// Customer email announcing an order status change
    fn render_order_status(&self, customer: &User, notice: &OrderStatusNotice) -> RenderedEmail;

    /// Back-office notice about a new order
    fn render_admin_new_order(&self, customer: &User, order: &OrderSummary) -> RenderedEmail;

    /// Back-office notice about a new review
    fn render_admin_new_review(&self, author: &User, review: &ReviewNotice) -> RenderedEmail;

    /// Back-office copy of a contact form message
    fn render_contact_admin(&self, message: &ContactMessage, received_at: DateTime<Utc>) -> RenderedEmail;

    /// Acknowledgement sent to whoever filled in the contact form
    fn render_contact_acknowledgement(&self, message: &ContactMessage) -> RenderedEmail;
}

/// Escape text for interpolation into HTML element content or attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Léa"), "Léa");
    }
}
