/// Main application entry point
mod catalog;
mod config;
mod domain;
mod errors;
mod generator;
mod handlers;
mod routes;
mod services;
mod utils;

use crate::catalog::DatabaseRegistry;
use crate::config::AppConfig;
use crate::handlers::AppState;
use crate::routes::build_router;
use crate::services::SearchService;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded successfully");

    // Build the immutable source registry
    let registry = Arc::new(DatabaseRegistry::seeded());
    info!("Catalog registry built with {} sources", registry.all().len());

    // Initialize services
    let search_service = Arc::new(SearchService::new(
        registry.clone(),
        config.simulate_latency,
    ));

    // Initialize application state
    let state = AppState {
        search_service,
        default_limit: config.default_limit,
    };

    // Build router
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("biodb_search service listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
