//! # Exchange Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the store adapter
//! - Create the exchange service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exchange_hex::{
    ExchangeService,
    inbound::{CorsSettings, HttpServer},
};
use exchange_repo::build_store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,exchange_app=debug,exchange_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting exchange server on port {}", config.port);
    tracing::info!("Using database: {}", config.database_url);
    tracing::info!("Reference currency: {}", config.reference_currency);

    // Build store (handles connection and migration)
    let store = build_store(&config.database_url).await?;

    // Create the exchange service
    let service = ExchangeService::with_reference_currency(store, config.reference_currency);

    // Create and run the HTTP server
    let cors = CorsSettings {
        allow_origin: config.cors_allow_origin,
        allow_headers: config.cors_allow_headers,
        allow_methods: config.cors_allow_methods,
    };
    let server = HttpServer::with_cors(service, cors);
    let addr = format!("{}:{}", config.host, config.port);

    server.run(&addr).await?;

    Ok(())
}
