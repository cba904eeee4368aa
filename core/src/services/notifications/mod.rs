//! Storefront notices
//!
//! Order status updates for customers, plus back-office notices for new
//! orders, new reviews and contact form messages.

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::NotificationService;
pub use types::{
    ContactMessage, ContactOutcome, NoticeReceipt, OrderItem, OrderStatus, OrderStatusNotice,
    OrderSummary, ReviewNotice, ReviewTarget,
};
