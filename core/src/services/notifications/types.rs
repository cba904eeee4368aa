//! Inputs and results of storefront notices

use chrono::{DateTime, Utc};

/// Fulfilment state of an order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    /// Any status the storefront sends that has no dedicated email
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Other(status) => status,
        }
    }

    /// Label shown to French customers
    pub fn label_fr(&self) -> &str {
        match self {
            OrderStatus::Pending => "En attente",
            OrderStatus::Processing => "En cours de traitement",
            OrderStatus::Shipped => "Expédiée",
            OrderStatus::Delivered => "Livrée",
            OrderStatus::Cancelled => "Annulée",
            OrderStatus::Other(status) => status,
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => OrderStatus::Pending,
            "processing" => OrderStatus::Processing,
            "shipped" => OrderStatus::Shipped,
            "delivered" => OrderStatus::Delivered,
            "cancelled" | "canceled" => OrderStatus::Cancelled,
            _ => OrderStatus::Other(value.trim().to_string()),
        }
    }
}

/// Line of an order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Order details as sent by the storefront
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderSummary {
    pub order_id: String,
    /// Customer-facing number, when the storefront assigns one
    pub display_id: Option<String>,
    pub placed_at: Option<DateTime<Utc>>,
    pub items: Vec<OrderItem>,
    pub total: Option<f64>,
}

impl OrderSummary {
    /// Number quoted in subjects: the display id, else the first 8 characters of the id
    pub fn reference(&self) -> String {
        match self.display_id.as_deref().map(str::trim) {
            Some(display_id) if !display_id.is_empty() => display_id.to_string(),
            _ => self.order_id.trim().chars().take(8).collect(),
        }
    }

    /// Declared total, else the sum of the lines
    pub fn total(&self) -> f64 {
        self.total
            .unwrap_or_else(|| self.items.iter().map(OrderItem::line_total).sum())
    }
}

/// Status change to announce to the customer who placed the order
#[derive(Debug, Clone)]
pub struct OrderStatusNotice {
    pub user_id: String,
    pub order: OrderSummary,
    pub status: OrderStatus,
    pub tracking_number: Option<String>,
    pub cancel_reason: Option<String>,
}

/// What a review is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewTarget {
    Global,
    Product { name: String },
    Category { name: String },
}

/// Review posted by a customer
#[derive(Debug, Clone)]
pub struct ReviewNotice {
    pub review_id: String,
    pub user_id: String,
    /// Out of 5, halves allowed
    pub rating: f32,
    pub title: Option<String>,
    pub comment: String,
    pub target: ReviewTarget,
    pub created_at: Option<DateTime<Utc>>,
}

/// Message left through the contact form
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Delivery of a single notice
#[derive(Debug, Clone)]
pub struct NoticeReceipt {
    /// Transport message id
    pub message_id: String,
    pub sent_at: DateTime<Utc>,
}

/// Result of a contact form submission
#[derive(Debug, Clone)]
pub struct ContactOutcome {
    pub admin_receipt: NoticeReceipt,
    /// Whether the sender's acknowledgement went out
    pub acknowledgement_sent: bool,
}
