use actix_web::{web, HttpServer};
use std::time::Duration;

use gc_api::{create_app, telemetry::init_tracing, LiveAppState};
use gc_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    tracing::info!(
        environment = %config.environment,
        store = ?config.store.backend,
        mail = ?config.mail.provider,
        "Starting GameCash notification server"
    );

    let infra = gc_infra::initialize(&config).await?;
    let state = web::Data::new(LiveAppState::from_infrastructure(&infra, &config));

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &app_config))
        .keep_alive(Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    tracing::info!("Server stopped");
    Ok(())
}
