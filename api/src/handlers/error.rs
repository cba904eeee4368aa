//! Mapping of domain and request errors to HTTP responses

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use gc_core::errors::{DomainError, ValidationError, VerificationError};
use gc_shared::{error_codes, ErrorResponse, Language};
use validator::ValidationErrors;

use crate::i18n::{request_language, Message};

fn respond(status: StatusCode, body: ErrorResponse) -> HttpResponse {
    HttpResponse::build(status).json(body)
}

/// Convert a domain error to its HTTP response
pub fn domain_error_response(error: &DomainError, lang: Language) -> HttpResponse {
    match error {
        DomainError::Verification(error) => verification_error_response(error, lang),
        DomainError::ValidationErr(ValidationError::RequiredField { field }) => respond(
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(error_codes::VALIDATION_ERROR, Message::RequiredField.text(lang))
                .add_detail("field", field),
        ),
        DomainError::ValidationErr(ValidationError::InvalidEmail) => respond(
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(error_codes::VALIDATION_ERROR, Message::InvalidEmail.text(lang))
                .add_detail("field", "email"),
        ),
        DomainError::Validation { message } => {
            tracing::debug!(message = %message, "Validation error");
            respond(
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(error_codes::VALIDATION_ERROR, Message::InvalidRequest.text(lang)),
            )
        }
        DomainError::NotFound { resource } => {
            let message = if resource == "User" {
                Message::UserNotFound
            } else {
                Message::NotFound
            };
            respond(
                StatusCode::NOT_FOUND,
                ErrorResponse::new(error_codes::NOT_FOUND, message.text(lang)),
            )
        }
        DomainError::Internal { message } => {
            tracing::error!(message = %message, "Internal error");
            respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(error_codes::INTERNAL_ERROR, Message::Internal.text(lang)),
            )
        }
    }
}

fn verification_error_response(error: &VerificationError, lang: Language) -> HttpResponse {
    match error {
        VerificationError::NoVerificationInProgress => respond(
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(
                error_codes::NO_VERIFICATION_IN_PROGRESS,
                Message::NoVerificationInProgress.text(lang),
            ),
        ),
        VerificationError::Expired => respond(
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(
                error_codes::VERIFICATION_CODE_EXPIRED,
                Message::CodeExpired.text(lang),
            ),
        ),
        VerificationError::IncorrectCode { attempts } => respond(
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(
                error_codes::VERIFICATION_CODE_INVALID,
                Message::IncorrectCode.text(lang),
            )
            .add_detail("attempts", attempts),
        ),
        VerificationError::TooManyAttempts { attempts } => respond(
            StatusCode::TOO_MANY_REQUESTS,
            ErrorResponse::new(error_codes::TOO_MANY_ATTEMPTS, Message::TooManyAttempts.text(lang))
                .add_detail("attempts", attempts),
        ),
        VerificationError::AlreadyVerified => respond(
            StatusCode::CONFLICT,
            ErrorResponse::new(error_codes::ALREADY_VERIFIED, Message::AlreadyVerified.text(lang)),
        ),
        VerificationError::UserAlreadyRegistered => respond(
            StatusCode::CONFLICT,
            ErrorResponse::new(
                error_codes::USER_ALREADY_REGISTERED,
                Message::AlreadyRegistered.text(lang),
            ),
        ),
        VerificationError::EmailNotVerified => respond(
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(
                error_codes::EMAIL_NOT_VERIFIED,
                Message::EmailNotVerified.text(lang),
            ),
        ),
        VerificationError::DeliveryFailed { reason } => {
            tracing::warn!(reason = %reason, "Email delivery failed");
            respond(
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new(error_codes::DELIVERY_FAILED, Message::DeliveryFailed.text(lang)),
            )
        }
    }
}

/// 400 listing each invalid field
pub fn validation_error_response(errors: &ValidationErrors, lang: Language) -> HttpResponse {
    let mut body =
        ErrorResponse::new(error_codes::VALIDATION_ERROR, Message::InvalidRequest.text(lang));

    let mut fields: Vec<String> = errors
        .errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    body = body.add_detail("fields", fields);

    respond(StatusCode::BAD_REQUEST, body)
}

/// Unreadable JSON bodies answer with the standard error body
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let lang = request_language(req);
    tracing::debug!(error = %err, "Rejected JSON payload");
    let response = respond(
        StatusCode::BAD_REQUEST,
        ErrorResponse::new(error_codes::VALIDATION_ERROR, Message::InvalidRequest.text(lang)),
    );
    actix_web::error::InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_rt::test]
    async fn test_incorrect_code_carries_attempts() {
        let error = DomainError::from(VerificationError::IncorrectCode { attempts: 3 });
        let response = domain_error_response(&error, Language::English);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "invalid_verification_code");
        assert_eq!(body["details"]["attempts"], 3);
        assert_eq!(body["success"], false);
    }

    #[actix_rt::test]
    async fn test_status_codes() {
        let cases = vec![
            (DomainError::from(VerificationError::NoVerificationInProgress), StatusCode::BAD_REQUEST),
            (DomainError::from(VerificationError::Expired), StatusCode::BAD_REQUEST),
            (DomainError::from(VerificationError::TooManyAttempts { attempts: 5 }), StatusCode::TOO_MANY_REQUESTS),
            (DomainError::from(VerificationError::AlreadyVerified), StatusCode::CONFLICT),
            (DomainError::from(VerificationError::UserAlreadyRegistered), StatusCode::CONFLICT),
            (DomainError::from(VerificationError::EmailNotVerified), StatusCode::BAD_REQUEST),
            (
                DomainError::from(VerificationError::DeliveryFailed { reason: "smtp down".to_string() }),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (DomainError::user_not_found(), StatusCode::NOT_FOUND),
            (DomainError::Internal { message: "boom".to_string() }, StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::from(ValidationError::InvalidEmail), StatusCode::BAD_REQUEST),
        ];

        for (error, status) in cases {
            assert_eq!(domain_error_response(&error, Language::English).status(), status, "{:?}", error);
        }
    }

    #[actix_rt::test]
    async fn test_french_message() {
        let error = DomainError::from(VerificationError::Expired);
        let body = body_json(domain_error_response(&error, Language::French)).await;
        assert_eq!(body["error"], "verification_code_expired");
        assert_eq!(
            body["message"],
            "Le code de vérification a expiré. Veuillez en demander un nouveau"
        );
    }

    #[actix_rt::test]
    async fn test_internal_error_hides_details() {
        let error = DomainError::Internal { message: "redis connection refused".to_string() };
        let body = body_json(domain_error_response(&error, Language::English)).await;
        assert_eq!(body["message"], "An internal error occurred");
        assert!(!body.to_string().contains("redis"));
    }
}
