//! Shared wiring for route tests: in-memory store, mock mail, pinned code

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use chrono::{DateTime, TimeZone, Utc};

use gc_api::{AppState, LiveAppState};
use gc_core::domain::entities::User;
use gc_core::repositories::UserRepository;
use gc_core::services::templates::GameCashTemplates;
use gc_core::services::verification::{
    CodeSource, ManualClock, VerificationService, VerificationServiceConfig,
};
use gc_infra::{DocumentStore, InMemoryDocumentStore, InfrastructureServices, MailNotifier, MockMailService};
use gc_shared::{AppConfig, AuthConfig};

pub const API_KEY: &str = "test-api-key";
pub const CODE: &str = "012345";

pub struct FixedCode(pub &'static str);

impl CodeSource for FixedCode {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub struct TestContext {
    pub state: web::Data<LiveAppState>,
    pub config: AppConfig,
    pub infra: InfrastructureServices,
    pub mail: MockMailService,
    pub clock: Arc<ManualClock>,
}

impl TestContext {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth = AuthConfig::new(API_KEY);
        config.mail.admin_address = "admin@gamecash.fr".to_string();

        let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
        let mail = MockMailService::new();
        let infra = InfrastructureServices::new(store, MailNotifier::new(Arc::new(mail.clone())));
        let clock = Arc::new(ManualClock::new(start()));

        let templates = Arc::new(GameCashTemplates::new(&config.mail.website_url));
        let verification = VerificationService::new(
            infra.users.clone(),
            infra.verifications.clone(),
            infra.notifier.clone(),
            templates.clone(),
            VerificationServiceConfig::from(&config.verification),
        )
        .with_clock(clock.clone())
        .with_code_source(Arc::new(FixedCode(CODE)));

        let state = web::Data::new(AppState::new(
            infra.users.clone(),
            verification,
            infra.notifier.clone(),
            templates,
            infra.store.clone(),
            &config,
        ));

        Self {
            state,
            config,
            infra,
            mail,
            clock,
        }
    }

    /// Store a pending account directly
    pub async fn seed_user(&self, uid: &str, email: &str) -> User {
        let user = User::new(uid, email, Some("Léa".to_string()), None, start());
        self.infra.users.create(user).await.unwrap()
    }
}

pub fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", API_KEY))
}
