//! Verification route handlers

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use gc_core::repositories::{UserRepository, VerificationRepository};
use gc_core::services::verification::NotifierTrait;

use crate::app::AppState;
use crate::dto::verification::{
    IssueResponse, SendVerificationRequest, VerificationStatusResponse, VerifyCodeRequest,
    VerifyCodeResponse,
};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::i18n::{request_language, Message};

/// Handler for POST /api/verification/send-verification-email
///
/// Issues a fresh code to the user's address, replacing any pending one.
///
/// # Request Body
///
/// ```json
/// { "userId": "uid-1" }
/// ```
pub async fn send_verification_email<U, V, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, V, N>>,
    body: web::Json<SendVerificationRequest>,
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

    match state.verification.send_verification(&body.user_id).await {
        Ok(outcome) => HttpResponse::Ok()
            .json(IssueResponse::new(&outcome, Message::VerificationSent.text(lang))),
        Err(error) => domain_error_response(&error, lang),
    }
}

/// Handler for POST /api/verification/resend-verification-email
///
/// Same as send, but refuses users whose email is already verified.
pub async fn resend_verification_email<U, V, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, V, N>>,
    body: web::Json<SendVerificationRequest>,
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

    match state.verification.resend_verification(&body.user_id).await {
        Ok(outcome) => HttpResponse::Ok()
            .json(IssueResponse::new(&outcome, Message::VerificationResent.text(lang))),
        Err(error) => domain_error_response(&error, lang),
    }
}

/// Handler for POST /api/verification/verify-code
///
/// # Request Body
///
/// ```json
/// { "userId": "uid-1", "code": "012345" }
/// ```
pub async fn verify_code<U, V, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, V, N>>,
    body: web::Json<VerifyCodeRequest>,
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

    match state.verification.verify(&body.user_id, &body.code).await {
        Ok(outcome) => HttpResponse::Ok().json(VerifyCodeResponse {
            success: true,
            message: Message::EmailVerified.text(lang).to_string(),
            verified_at: outcome.verified_at,
        }),
        Err(error) => domain_error_response(&error, lang),
    }
}

/// Handler for GET /api/verification/verification-status/{user_id}
pub async fn verification_status<U, V, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, V, N>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    V: VerificationRepository + 'static,
    N: NotifierTrait + 'static,
{
    let lang = request_language(&req);
    let user_id = path.into_inner();

    match state.verification.verification_status(&user_id).await {
        Ok(status) => HttpResponse::Ok().json(VerificationStatusResponse::new(user_id, status)),
        Err(error) => domain_error_response(&error, lang),
    }
}
