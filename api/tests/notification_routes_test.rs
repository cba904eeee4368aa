//! Order, review and contact endpoints over the in-memory store

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::{bearer, TestContext};
use gc_api::create_app;

#[actix_web::test]
async fn test_order_status_emails_customer() {
    let ctx = TestContext::new();
    ctx.seed_user("uid-1", "player@gamecash.fr").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/notifications/order-status")
        .insert_header(bearer())
        .set_json(json!({
            "orderId": "ord98765xyz",
            "userId": "uid-1",
            "newStatus": "shipped",
            "trackingNumber": "LP123FR",
            "createdAt": "2024-05-30T09:00:00.000Z",
            "items": [{"name": "Manette", "quantity": 2, "price": 24.5}]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body["messageId"].as_str().unwrap().starts_with("mock_"));

    let outbox = ctx.mail.outbox().await;
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].to, "player@gamecash.fr");
    assert_eq!(outbox[0].subject, "Votre commande #ord98765 a été expédiée");
    assert!(outbox[0].html.contains("LP123FR"));
    assert!(outbox[0].html.contains("30/05/2024"));
}

#[actix_web::test]
async fn test_order_status_for_unknown_customer() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/notifications/order-status")
        .insert_header(bearer())
        .set_json(json!({ "orderId": "ord-1", "userId": "ghost", "newStatus": "delivered" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(ctx.mail.message_count().await, 0);
}

#[actix_web::test]
async fn test_order_status_requires_fields() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/notifications/order-status")
        .insert_header(bearer())
        .set_json(json!({ "userId": "uid-1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");
    let fields = body["details"]["fields"].as_array().unwrap();
    assert!(fields.contains(&json!("new_status")));
}

#[actix_web::test]
async fn test_new_order_notifies_admin() {
    let ctx = TestContext::new();
    ctx.seed_user("uid-1", "player@gamecash.fr").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/notifications/new-order")
        .insert_header(bearer())
        .set_json(json!({
            "orderId": "ord98765xyz",
            "displayId": "GC-1042",
            "userId": "uid-1",
            "totalPrice": 49.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let outbox = ctx.mail.outbox().await;
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].to, "admin@gamecash.fr");
    assert_eq!(outbox[0].subject, "Nouvelle commande #GC-1042 de Léa");
}

#[actix_web::test]
async fn test_new_review_notifies_admin() {
    let ctx = TestContext::new();
    ctx.seed_user("uid-1", "player@gamecash.fr").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/reviews/notify-new-review")
        .insert_header(bearer())
        .insert_header(("Accept-Language", "fr-FR"))
        .set_json(json!({
            "reviewId": "rev-1",
            "userId": "uid-1",
            "rating": 4.5,
            "comment": "Livraison rapide",
            "reviewType": "product",
            "productName": "Manette"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Notification de nouvel avis envoyée");

    let outbox = ctx.mail.outbox().await;
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].to, "admin@gamecash.fr");
    assert_eq!(outbox[0].subject, "Nouvel avis sur le produit Manette de Léa");
}

#[actix_web::test]
async fn test_review_rating_out_of_range() {
    let ctx = TestContext::new();
    ctx.seed_user("uid-1", "player@gamecash.fr").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/reviews/notify-new-review")
        .insert_header(bearer())
        .set_json(json!({
            "reviewId": "rev-1",
            "userId": "uid-1",
            "rating": 7,
            "comment": "Top"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(ctx.mail.message_count().await, 0);
}

#[actix_web::test]
async fn test_contact_form_forwards_and_acknowledges() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/contact/send")
        .insert_header(bearer())
        .set_json(json!({
            "contactData": {
                "name": "Max",
                "email": "max@example.fr",
                "subject": "Retour produit",
                "message": "Ma manette ne s'allume plus"
            }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["acknowledgementSent"], true);

    let recipients: Vec<String> = ctx.mail.outbox().await.into_iter().map(|m| m.to).collect();
    assert_eq!(recipients, vec!["admin@gamecash.fr", "max@example.fr"]);
}

#[actix_web::test]
async fn test_contact_form_when_mail_is_down() {
    let ctx = TestContext::new();
    ctx.mail.set_simulate_failure(true);
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/contact/send")
        .insert_header(bearer())
        .set_json(json!({
            "contactData": {
                "name": "Max",
                "email": "max@example.fr",
                "subject": "Retour produit",
                "message": "Bonjour"
            }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "email_delivery_failed");
}

#[actix_web::test]
async fn test_notice_routes_require_api_key() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/contact/send")
        .set_json(json!({ "contactData": {} }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
