//! Order, review and contact notice handlers

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use gc_core::repositories::{UserRepository, VerificationRepository};
use gc_core::services::verification::NotifierTrait;

use crate::app::AppState;
use crate::dto::notifications::{
    ContactRequest, ContactResponse, NewOrderRequest, NewReviewRequest, NoticeResponse,
    OrderStatusRequest,
};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::i18n::{request_language, Message};

/// Handler for POST /api/notifications/order-status
///
/// Emails the customer who placed the order.
///
/// # Request Body
///
/// ```json
/// { "orderId": "ord98765xyz", "userId": "uid-1", "newStatus": "shipped", "trackingNumber": "LP123FR" }
/// ```
pub async fn order_status<U, V, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, V, N>>,
    body: web::Json<OrderStatusRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    V: VerificationRepository + 'static,
    N: NotifierTrait + 'static,
{
    let lang = request_language(&req);
    if let Err(errors) = body.validate() {
        return validation_error_response(&errors, lang);
    }

    let request = body.into_inner();
    tracing::info!(
        order_id = %request.order.order_id,
        user_id = %request.user_id,
        status = %request.new_status,
        "Processing order status notice"
    );

    match state.notifications.notify_order_status(request.into()).await {
        Ok(receipt) => HttpResponse::Ok().json(NoticeResponse::new(
            receipt,
            Message::OrderStatusNotified.text(lang),
        )),
        Err(error) => domain_error_response(&error, lang),
    }
}

/// Handler for POST /api/notifications/new-order
pub async fn new_order<U, V, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, V, N>>,
    body: web::Json<NewOrderRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    V: VerificationRepository + 'static,
    N: NotifierTrait + 'static,
{
    let lang = request_language(&req);
    if let Err(errors) = body.validate() {
        return validation_error_response(&errors, lang);
    }

    let request = body.into_inner();
    match state
        .notifications
        .notify_new_order(&request.user_id, request.order.into())
        .await
    {
        Ok(receipt) => HttpResponse::Ok().json(NoticeResponse::new(
            receipt,
            Message::NewOrderNotified.text(lang),
        )),
        Err(error) => domain_error_response(&error, lang),
    }
}

/// Handler for POST /api/reviews/notify-new-review
pub async fn new_review<U, V, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, V, N>>,
    body: web::Json<NewReviewRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    V: VerificationRepository + 'static,
    N: NotifierTrait + 'static,
{
    let lang = request_language(&req);
    if let Err(errors) = body.validate() {
        return validation_error_response(&errors, lang);
    }

    match state.notifications.notify_new_review(body.into_inner().into()).await {
        Ok(receipt) => HttpResponse::Ok().json(NoticeResponse::new(
            receipt,
            Message::NewReviewNotified.text(lang),
        )),
        Err(error) => domain_error_response(&error, lang),
    }
}

/// Handler for POST /api/contact/send
///
/// # Request Body
///
/// ```json
/// { "contactData": { "name": "Max", "email": "max@example.fr", "subject": "Retour", "message": "..." } }
/// ```
pub async fn send_contact<U, V, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, V, N>>,
    body: web::Json<ContactRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    V: VerificationRepository + 'static,
    N: NotifierTrait + 'static,
{
    let lang = request_language(&req);
    if let Err(errors) = body.validate() {
        return validation_error_response(&errors, lang);
    }

    match state
        .notifications
        .send_contact_message(body.into_inner().contact_data.into())
        .await
    {
        Ok(outcome) => {
            let message = if outcome.acknowledgement_sent {
                Message::ContactMessageSent
            } else {
                Message::ContactAcknowledgementFailed
            };
            HttpResponse::Ok().json(ContactResponse {
                success: true,
                message: message.text(lang).to_string(),
                acknowledgement_sent: outcome.acknowledgement_sent,
            })
        }
        Err(error) => domain_error_response(&error, lang),
    }
}
