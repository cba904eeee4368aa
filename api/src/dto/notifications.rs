//! Order, review and contact endpoint bodies

use chrono::{DateTime, Utc};
use gc_core::services::notifications::{
    ContactMessage, NoticeReceipt, OrderItem, OrderStatus, OrderStatusNotice, OrderSummary,
    ReviewNotice, ReviewTarget,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Order line
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemBody {
    #[serde(default)]
    #[validate(length(min = 1, message = "item name is required"))]
    pub name: String,

    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "quantity must be positive"))]
    pub quantity: u32,

    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
}

fn default_quantity() -> u32 {
    1
}

impl From<OrderItemBody> for OrderItem {
    fn from(body: OrderItemBody) -> Self {
        OrderItem {
            name: body.name,
            quantity: body.quantity,
            unit_price: body.price,
        }
    }
}

/// Order fields shared by the order endpoints
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderBody {
    #[serde(default)]
    #[validate(length(min = 1, message = "orderId is required"))]
    pub order_id: String,

    pub display_id: Option<String>,

    #[serde(default, with = "gc_shared::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    #[validate(nested)]
    pub items: Vec<OrderItemBody>,

    #[validate(range(min = 0.0, message = "totalPrice must not be negative"))]
    pub total_price: Option<f64>,
}

impl From<OrderBody> for OrderSummary {
    fn from(body: OrderBody) -> Self {
        OrderSummary {
            order_id: body.order_id,
            display_id: body.display_id,
            placed_at: body.created_at,
            items: body.items.into_iter().map(OrderItem::from).collect(),
            total: body.total_price,
        }
    }
}

/// Body of order-status
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "newStatus is required"))]
    pub new_status: String,

    pub tracking_number: Option<String>,

    pub cancel_reason: Option<String>,

    #[serde(flatten)]
    #[validate(nested)]
    pub order: OrderBody,
}

impl From<OrderStatusRequest> for OrderStatusNotice {
    fn from(request: OrderStatusRequest) -> Self {
        OrderStatusNotice {
            status: OrderStatus::from(request.new_status.as_str()),
            user_id: request.user_id,
            order: request.order.into(),
            tracking_number: request.tracking_number,
            cancel_reason: request.cancel_reason,
        }
    }
}

/// Body of new-order
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    #[serde(flatten)]
    #[validate(nested)]
    pub order: OrderBody,
}

/// Body of notify-new-review
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewReviewRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "reviewId is required"))]
    pub review_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    #[validate(range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5"))]
    pub rating: f32,

    pub title: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "comment is required"))]
    pub comment: String,

    /// `product`, `category` or `global`
    pub review_type: Option<String>,

    pub product_name: Option<String>,

    pub category_name: Option<String>,

    #[serde(default, with = "gc_shared::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<NewReviewRequest> for ReviewNotice {
    fn from(request: NewReviewRequest) -> Self {
        let product_name = request.product_name.filter(|name| !name.trim().is_empty());
        let target = match (request.review_type.as_deref(), product_name) {
            (Some("product"), Some(name)) => ReviewTarget::Product { name },
            (Some("category"), _) => ReviewTarget::Category {
                name: request
                    .category_name
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or_else(|| "non spécifiée".to_string()),
            },
            _ => ReviewTarget::Global,
        };

        ReviewNotice {
            review_id: request.review_id,
            user_id: request.user_id,
            rating: request.rating,
            title: request.title,
            comment: request.comment,
            target,
            created_at: request.created_at,
        }
    }
}

/// Contact form fields
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactData {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "email is invalid"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

impl From<ContactData> for ContactMessage {
    fn from(data: ContactData) -> Self {
        ContactMessage {
            name: data.name,
            email: data.email,
            subject: data.subject,
            message: data.message,
        }
    }
}

/// Body of contact send
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[validate(nested)]
    pub contact_data: ContactData,
}

/// Result of a single notice
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeResponse {
    pub success: bool,
    pub message: String,
    pub message_id: String,
    pub sent_at: DateTime<Utc>,
}

impl NoticeResponse {
    pub fn new(receipt: NoticeReceipt, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            message_id: receipt.message_id,
            sent_at: receipt.sent_at,
        }
    }
}

/// Result of contact send
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub acknowledgement_sent: bool,
}
