//! CORS middleware configuration for cross-origin requests.

use actix_cors::Cors;
use actix_web::http::header;
use gc_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration.
///
/// A `*` entry in `allowed_origins` accepts any origin; otherwise only the
/// listed origins are accepted.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(config.allowed_methods.iter().map(String::as_str))
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_TYPE,
        ])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        tracing::info!("CORS accepts any origin");
        return cors.allow_any_origin();
    }

    for origin in config.allowed_origins.iter().map(|s| s.trim()) {
        if !origin.is_empty() {
            tracing::info!(origin = %origin, "Adding allowed origin");
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    fn app_config(origins: &[&str]) -> CorsConfig {
        CorsConfig {
            allowed_origins: origins.iter().map(|s| s.to_string()).collect(),
            ..CorsConfig::default()
        }
    }

    #[actix_rt::test]
    async fn test_listed_origin_is_allowed() {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&app_config(&["https://gamecash.fr"])))
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://gamecash.fr"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://gamecash.fr"
        );
    }

    #[actix_rt::test]
    async fn test_development_config_allows_any_origin() {
        let app = test::init_service(
            App::new()
                .wrap(create_cors(&CorsConfig::development()))
                .route("/", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
