//! # Forum Server
//!
//! Entry point: GraphQL over Actix-web, backed by in-memory or PostgreSQL storage.

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use clap::Parser;
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod schema;
mod state;
mod telemetry;

use config::AppConfig;
use schema::build_schema;
use state::AppState;
use telemetry::init_telemetry;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::parse();
    init_telemetry(&config.telemetry());

    tracing::info!(
        "Starting Forum Server on {}:{} with {} storage",
        config.host,
        config.port,
        config.storage
    );

    let state = AppState::from_config(&config)
        .await
        .context("failed to initialize storage")?;
    let schema = build_schema(state.storage.clone());

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(schema.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?
    .run()
    .await
    .context("server terminated unexpectedly")?;

    tracing::info!("Server stopped");
    Ok(())
}
