//! Application state and factory
//!
//! Wires the verification, registration and notification services into
//! shared state and builds the actix-web application around them.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpRequest, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use gc_core::repositories::{UserRepository, VerificationRepository};
use gc_core::services::notifications::NotificationService;
use gc_core::services::registration::RegistrationService;
use gc_core::services::templates::GameCashTemplates;
use gc_core::services::verification::{NotifierTrait, VerificationService, VerificationServiceConfig};
use gc_infra::{
    DocumentStore, DocumentUserRepository, DocumentVerificationRepository, InfrastructureServices,
    MailNotifier,
};
use gc_shared::{error_codes, AppConfig, ErrorResponse};

use crate::handlers::json_error_handler;
use crate::i18n::{request_language, Message};
use crate::middleware::{create_cors, ApiKeyAuth};
use crate::routes;

/// Application state that holds shared services
pub struct AppState<U, V, N>
where
    U: UserRepository,
    V: VerificationRepository,
    N: NotifierTrait,
{
    pub verification: Arc<VerificationService<U, V, N>>,
    pub registration: Arc<RegistrationService<U, V, N>>,
    pub notifications: Arc<NotificationService<U, N>>,
    pub store: Arc<dyn DocumentStore>,
}

/// State over the configured document store and mail provider
pub type LiveAppState = AppState<DocumentUserRepository, DocumentVerificationRepository, MailNotifier>;

impl<U, V, N> AppState<U, V, N>
where
    U: UserRepository,
    V: VerificationRepository,
    N: NotifierTrait,
{
    /// Build the remaining services around an existing verification service
    pub fn new(
        users: Arc<U>,
        verification: VerificationService<U, V, N>,
        notifier: Arc<N>,
        templates: Arc<GameCashTemplates>,
        store: Arc<dyn DocumentStore>,
        config: &AppConfig,
    ) -> Self {
        let verification = Arc::new(verification);
        let registration = Arc::new(RegistrationService::new(
            users.clone(),
            verification.clone(),
            notifier.clone(),
            templates.clone(),
            config.mail.admin_recipient(),
        ));
        let notifications = Arc::new(NotificationService::new(
            users,
            notifier,
            templates,
            config.mail.admin_recipient(),
        ));

        Self {
            verification,
            registration,
            notifications,
            store,
        }
    }
}

impl LiveAppState {
    /// Wire services over initialized infrastructure
    pub fn from_infrastructure(infra: &InfrastructureServices, config: &AppConfig) -> Self {
        let templates = Arc::new(GameCashTemplates::new(&config.mail.website_url));

        let verification = VerificationService::new(
            infra.users.clone(),
            infra.verifications.clone(),
            infra.notifier.clone(),
            templates.clone(),
            VerificationServiceConfig::from(&config.verification),
        );

        Self::new(
            infra.users.clone(),
            verification,
            infra.notifier.clone(),
            templates,
            infra.store.clone(),
            config,
        )
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, V, N>(
    state: web::Data<AppState<U, V, N>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    V: VerificationRepository + 'static,
    N: NotifierTrait + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(state)
        .app_data(json_config)
        .wrap(create_cors(&config.cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(routes::health::health_check::<U, V, N>))
        .service(
            web::scope("/api")
                .wrap(ApiKeyAuth::new(&config.auth))
                .configure(routes::configure::<U, V, N>),
        )
        .default_service(web::route().to(not_found))
}

async fn not_found(req: HttpRequest) -> HttpResponse {
    let lang = request_language(&req);
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        Message::NotFound.text(lang),
    ))
}
