//! Registration route handlers

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use gc_core::repositories::{UserRepository, VerificationRepository};
use gc_core::services::verification::NotifierTrait;
use gc_shared::email::mask_email;

use crate::app::AppState;
use crate::dto::registration::{
    RegisterRequest, RegisterResponse, RegistrationStatusResponse, UserSummary,
    VerifyAccountRequest, VerifyAccountResponse, WelcomeEmailRequest, WelcomeEmailResponse,
};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::i18n::{request_language, Message};

/// Handler for POST /api/registration/register
///
/// Answers 201 for a new account and 200 when an unverified account was
/// sent a fresh code instead.
///
/// # Request Body
///
/// ```json
/// { "userData": { "uid": "uid-1", "email": "player@gamecash.fr", "displayName": "Léa" } }
/// ```
pub async fn register<U, V, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, V, N>>,
    body: web::Json<RegisterRequest>,
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
        user_id = %request.user_data.uid,
        email = %mask_email(&request.user_data.email),
        "Processing registration"
    );

    match state.registration.register_user(request.user_data.into()).await {
        Ok(outcome) => {
            let message = if !outcome.verification_sent {
                Message::RegisteredDeliveryFailed
            } else if outcome.created {
                Message::AccountRegistered
            } else {
                Message::AccountPendingResent
            };
            let response = RegisterResponse::new(&outcome, message.text(lang));

            if outcome.created {
                HttpResponse::Created().json(response)
            } else {
                HttpResponse::Ok().json(response)
            }
        }
        Err(error) => domain_error_response(&error, lang),
    }
}

/// Handler for POST /api/registration/verify-account
pub async fn verify_account<U, V, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, V, N>>,
    body: web::Json<VerifyAccountRequest>,
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
        .registration
        .verify_account(&body.user_id, &body.verification_code)
        .await
    {
        Ok(verification) => HttpResponse::Ok().json(VerifyAccountResponse {
            success: true,
            message: Message::AccountVerified.text(lang).to_string(),
            user: UserSummary::from(&verification.user),
            welcome_email_sent: verification.welcome_email_sent,
        }),
        Err(error) => domain_error_response(&error, lang),
    }
}

/// Handler for POST /api/registration/send-welcome-email
pub async fn send_welcome_email<U, V, N>(
    req: HttpRequest,
    state: web::Data<AppState<U, V, N>>,
    body: web::Json<WelcomeEmailRequest>,
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

    match state.registration.send_welcome_email(&body.user_id).await {
        Ok(sent_at) => HttpResponse::Ok().json(WelcomeEmailResponse {
            success: true,
            message: Message::WelcomeEmailSent.text(lang).to_string(),
            sent_at,
        }),
        Err(error) => domain_error_response(&error, lang),
    }
}

/// Handler for GET /api/registration/status/{user_id}
pub async fn registration_status<U, V, N>(
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

    match state.registration.registration_status(&path.into_inner()).await {
        Ok(status) => HttpResponse::Ok().json(RegistrationStatusResponse {
            success: true,
            user: UserSummary::from(&status.user),
            verification: status.verification,
        }),
        Err(error) => domain_error_response(&error, lang),
    }
}
