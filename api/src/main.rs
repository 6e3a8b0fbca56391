use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use mc_api::app::{create_app, HttpSettings};
use mc_api::config;
use mc_api::routes::AppState;
use mc_core::VerificationService;
use mc_infra::{DatabasePool, HttpBackofficeClient, PgAttemptRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load();
    config::init_tracing(&config.logging);

    tracing::info!(
        environment = config.environment.as_str(),
        "Starting membership check service"
    );

    std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    if !config.backoffice.has_api_key() {
        // Requests are answered with 500 until the key is provided
        tracing::warn!("BACKOFFICE_API_KEY is not set");
    }

    let pool = DatabasePool::new(&config.database)
        .await
        .context("failed to connect to the attempt log database")?;
    if !pool
        .health_check()
        .await
        .context("attempt log database health check failed")?
    {
        anyhow::bail!("attempt log database returned an unexpected health check result");
    }
    tracing::info!("{}", pool.get_statistics());

    let attempts = Arc::new(PgAttemptRepository::new(pool.get_pool().clone()));
    let backoffice = Arc::new(
        HttpBackofficeClient::new(&config.backoffice)
            .context("failed to build the backoffice client")?,
    );

    let state = web::Data::new(AppState::new(VerificationService::new(
        attempts,
        backoffice,
        config.rate_limit.clone(),
    )));

    let settings = HttpSettings {
        environment: config.environment,
        cors: config.cors.clone(),
        max_payload_size: config.server.max_payload_size,
    };

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(state.clone(), &settings));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {bind_address}"))?
        .run()
        .await?;

    pool.close().await;
    Ok(())
}
