//! API key middleware protecting the `/api` scope.
//!
//! Callers present the shared key as `Authorization: Bearer <api_key>`.
//! When no key is configured every request passes.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, HttpResponse,
};
use constant_time_eq::constant_time_eq;
use futures_util::future::LocalBoxFuture;
use gc_shared::{error_codes, AuthConfig, ErrorResponse};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use crate::i18n::{request_language, Message};

/// API key middleware factory
#[derive(Clone)]
pub struct ApiKeyAuth {
    api_key: Arc<str>,
}

impl ApiKeyAuth {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            api_key: Arc::from(config.api_key.trim()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ApiKeyAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ApiKeyAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiKeyAuthMiddleware {
            service: Rc::new(service),
            api_key: self.api_key.clone(),
        }))
    }
}

/// API key middleware service
pub struct ApiKeyAuthMiddleware<S> {
    service: Rc<S>,
    api_key: Arc<str>,
}

impl<S, B> Service<ServiceRequest> for ApiKeyAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let api_key = self.api_key.clone();

        Box::pin(async move {
            if !api_key.is_empty() && !is_authorized(&req, &api_key) {
                let lang = request_language(req.request());

                tracing::warn!(
                    event = "unauthorized_request",
                    path = %req.path(),
                    "Rejected request without a valid API key"
                );

                let response = HttpResponse::Unauthorized().json(ErrorResponse::new(
                    error_codes::UNAUTHORIZED,
                    Message::Unauthorized.text(lang),
                ));
                return Ok(req.into_response(response).map_into_right_body());
            }

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

fn is_authorized(req: &ServiceRequest, api_key: &str) -> bool {
    extract_bearer_token(req)
        .map(|token| constant_time_eq(token.as_bytes(), api_key.as_bytes()))
        .unwrap_or(false)
}
