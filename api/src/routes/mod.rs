//! Route handlers
//!
//! - `health`: liveness and store connectivity
//! - `verification`: issue, resend and check email verification codes
//! - `registration`: account sign-up built on the verification flow
//! - `notifications`: order status, new order, review and contact notices

pub mod health;
pub mod notifications;
pub mod registration;
pub mod verification;

use actix_web::web;

use gc_core::repositories::{UserRepository, VerificationRepository};
use gc_core::services::verification::NotifierTrait;

/// Register the `/api` routes
pub fn configure<U, V, N>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    V: VerificationRepository + 'static,
    N: NotifierTrait + 'static,
{
    cfg.service(
        web::scope("/verification")
            .route(
                "/send-verification-email",
                web::post().to(verification::send_verification_email::<U, V, N>),
            )
            .route("/verify-code", web::post().to(verification::verify_code::<U, V, N>))
            .route(
                "/resend-verification-email",
                web::post().to(verification::resend_verification_email::<U, V, N>),
            )
            .route(
                "/verification-status/{user_id}",
                web::get().to(verification::verification_status::<U, V, N>),
            ),
    )
    .service(
        web::scope("/registration")
            .route("/register", web::post().to(registration::register::<U, V, N>))
            .route(
                "/verify-account",
                web::post().to(registration::verify_account::<U, V, N>),
            )
            .route(
                "/send-welcome-email",
                web::post().to(registration::send_welcome_email::<U, V, N>),
            )
            .route(
                "/status/{user_id}",
                web::get().to(registration::registration_status::<U, V, N>),
            ),
    )
    .service(
        web::scope("/notifications")
            .route(
                "/order-status",
                web::post().to(notifications::order_status::<U, V, N>),
            )
            .route("/new-order", web::post().to(notifications::new_order::<U, V, N>)),
    )
    .service(
        web::scope("/reviews").route(
            "/notify-new-review",
            web::post().to(notifications::new_review::<U, V, N>),
        ),
    )
    .service(
        web::scope("/contact")
            .route("/send", web::post().to(notifications::send_contact::<U, V, N>)),
    );
}
