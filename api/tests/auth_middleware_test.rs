//! API key and routing behaviour of the assembled application

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use common::{bearer, TestContext};
use gc_api::create_app;

#[actix_web::test]
async fn test_health_is_open() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "gamecash-notifications");
    assert_eq!(body["store"], "memory");
}

#[actix_web::test]
async fn test_missing_api_key_is_rejected() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/verification/send-verification-email")
        .set_json(json!({ "userId": "uid-1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "unauthorized");
    assert_eq!(body["success"], false);
    assert_eq!(ctx.mail.message_count().await, 0);
}

#[actix_web::test]
async fn test_wrong_api_key_is_rejected_in_french() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri("/api/registration/status/uid-1")
        .insert_header(("Authorization", "Bearer not-the-key"))
        .insert_header(("Accept-Language", "fr-FR,fr;q=0.9"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Clé API manquante ou invalide");
}

#[actix_web::test]
async fn test_unknown_route_is_json_404() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/nowhere").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/verification/verify-code")
        .insert_header(bearer())
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");
}
