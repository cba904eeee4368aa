//! Verification endpoints over the in-memory store

mod common;

use actix_web::{http::StatusCode, test};
use chrono::Duration;
use serde_json::{json, Value};

use common::{bearer, start, TestContext, CODE};
use gc_api::create_app;

#[actix_web::test]
async fn test_send_then_verify_activates_account() {
    let ctx = TestContext::new();
    ctx.seed_user("uid-1", "player@gamecash.fr").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/verification/send-verification-email")
        .insert_header(bearer())
        .set_json(json!({ "userId": "uid-1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["expiresAt"], "2024-06-02T12:00:00Z");

    let outbox = ctx.mail.outbox().await;
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].to, "player@gamecash.fr");
    assert!(outbox[0].html.contains(CODE));

    let req = test::TestRequest::post()
        .uri("/api/verification/verify-code")
        .insert_header(bearer())
        .set_json(json!({ "userId": "uid-1", "code": CODE }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email verified successfully");

    // Confirmation notice follows the code email
    assert_eq!(ctx.mail.message_count().await, 2);

    let req = test::TestRequest::get()
        .uri("/api/verification/verification-status/uid-1")
        .insert_header(bearer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["emailVerified"], true);
    assert_eq!(body["verification"]["consumed"], true);
    assert_eq!(body["verification"]["attemptCount"], 1);
    assert!(body["verification"].get("code").is_none());
}

#[actix_web::test]
async fn test_wrong_code_reports_attempts() {
    let ctx = TestContext::new();
    ctx.seed_user("uid-1", "player@gamecash.fr").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/verification/send-verification-email")
        .insert_header(bearer())
        .set_json(json!({ "userId": "uid-1" }))
        .to_request();
    test::call_service(&app, req).await;

    for expected in 1..=2 {
        let req = test::TestRequest::post()
            .uri("/api/verification/verify-code")
            .insert_header(bearer())
            .set_json(json!({ "userId": "uid-1", "code": "999999" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_verification_code");
        assert_eq!(body["details"]["attempts"], expected);
    }
}

#[actix_web::test]
async fn test_expired_code_is_rejected() {
    let ctx = TestContext::new();
    ctx.seed_user("uid-1", "player@gamecash.fr").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/verification/send-verification-email")
        .insert_header(bearer())
        .set_json(json!({ "userId": "uid-1" }))
        .to_request();
    test::call_service(&app, req).await;

    ctx.clock.set(start() + Duration::hours(25));

    let req = test::TestRequest::post()
        .uri("/api/verification/verify-code")
        .insert_header(bearer())
        .insert_header(("Accept-Language", "fr"))
        .set_json(json!({ "userId": "uid-1", "code": CODE }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "verification_code_expired");
    assert_eq!(
        body["message"],
        "Le code de vérification a expiré. Veuillez en demander un nouveau"
    );
}

#[actix_web::test]
async fn test_verify_without_issued_code() {
    let ctx = TestContext::new();
    ctx.seed_user("uid-1", "player@gamecash.fr").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/verification/verify-code")
        .insert_header(bearer())
        .set_json(json!({ "userId": "uid-1", "code": CODE }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "no_verification_in_progress");
}

#[actix_web::test]
async fn test_missing_fields_list_every_field() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/verification/verify-code")
        .insert_header(bearer())
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["details"]["fields"], json!(["code", "user_id"]));
}

#[actix_web::test]
async fn test_send_to_unknown_user_is_404() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/verification/send-verification-email")
        .insert_header(bearer())
        .set_json(json!({ "userId": "ghost" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User not found");
}

#[actix_web::test]
async fn test_resend_after_verification_conflicts() {
    let ctx = TestContext::new();
    ctx.seed_user("uid-1", "player@gamecash.fr").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    for uri in ["/api/verification/send-verification-email", "/api/verification/verify-code"] {
        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header(bearer())
            .set_json(json!({ "userId": "uid-1", "code": CODE }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::post()
        .uri("/api/verification/resend-verification-email")
        .insert_header(bearer())
        .set_json(json!({ "userId": "uid-1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "email_already_verified");
}

#[actix_web::test]
async fn test_delivery_failure_is_service_unavailable() {
    let ctx = TestContext::new();
    ctx.seed_user("uid-1", "player@gamecash.fr").await;
    ctx.mail.set_simulate_failure(true);
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/verification/resend-verification-email")
        .insert_header(bearer())
        .set_json(json!({ "userId": "uid-1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    // The record was written before the send attempt
    let req = test::TestRequest::get()
        .uri("/api/verification/verification-status/uid-1")
        .insert_header(bearer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["verification"]["consumed"], false);
    assert_eq!(body["verification"]["attemptCount"], 0);
}
