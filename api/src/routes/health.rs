use actix_web::{web, HttpResponse};

use gc_core::repositories::{UserRepository, VerificationRepository};
use gc_core::services::verification::NotifierTrait;

use crate::app::AppState;

/// Handler for GET /health
///
/// Reports 503 when the document store does not answer.
pub async fn health_check<U, V, N>(state: web::Data<AppState<U, V, N>>) -> HttpResponse
where
    U: UserRepository + 'static,
    V: VerificationRepository + 'static,
    N: NotifierTrait + 'static,
{
    let store_healthy = match state.store.health_check().await {
        Ok(healthy) => healthy,
        Err(e) => {
            tracing::error!(error = %e, "Document store health check failed");
            false
        }
    };

    let body = serde_json::json!({
        "status": if store_healthy { "healthy" } else { "degraded" },
        "service": "gamecash-notifications",
        "version": env!("CARGO_PKG_VERSION"),
        "store": state.store.backend_name(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    if store_healthy {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
