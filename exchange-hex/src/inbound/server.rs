//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method},
    routing::{get, options, patch, post},
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use exchange_types::ExchangeStore;

use super::handlers::{self, AppState};
use crate::ExchangeService;
use crate::openapi::ApiDoc;

/// CORS header configuration, mirrored from the environment.
///
/// Values are comma-separated lists; `*` allows anything. Entries that do
/// not parse as header values are skipped.
#[derive(Debug, Clone)]
pub struct CorsSettings {
    pub allow_origin: String,
    pub allow_headers: String,
    pub allow_methods: String,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allow_origin: "*".to_string(),
            allow_headers: "*".to_string(),
            allow_methods: "GET, POST, PATCH, OPTIONS".to_string(),
        }
    }
}

/// HTTP Server for the exchange API.
pub struct HttpServer<S: ExchangeStore> {
    state: Arc<AppState<S>>,
    cors: CorsSettings,
}

impl<S: ExchangeStore> HttpServer<S> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: ExchangeService<S>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            cors: CorsSettings::default(),
        }
    }

    /// Creates a new HTTP server with custom CORS settings.
    pub fn with_cors(service: ExchangeService<S>, cors: CorsSettings) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            cors,
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .route("/health", get(handlers::health))
            .route("/currencies", get(handlers::list_currencies::<S>))
            .route("/currencies", post(handlers::create_currency::<S>))
            .route("/currency/{code}", get(handlers::get_currency::<S>))
            .route("/exchangeRates", get(handlers::list_rates::<S>))
            .route("/exchangeRates", post(handlers::create_rate::<S>))
            .route("/exchangeRate/{pair}", get(handlers::get_rate::<S>))
            .route("/exchangeRate/{pair}", patch(handlers::update_rate::<S>))
            .route("/exchangeRate/{pair}", options(handlers::rate_preflight))
            .route("/exchange", get(handlers::convert::<S>))
            .layer(self.cors_layer())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }

    fn cors_layer(&self) -> CorsLayer {
        let origin = if self.cors.allow_origin == "*" {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(
                self.cors
                    .allow_origin
                    .split(',')
                    .filter_map(|s| s.trim().parse::<HeaderValue>().ok()),
            )
        };

        let headers = if self.cors.allow_headers == "*" {
            AllowHeaders::any()
        } else {
            AllowHeaders::list(
                self.cors
                    .allow_headers
                    .split(',')
                    .filter_map(|s| s.trim().parse::<HeaderName>().ok()),
            )
        };

        let methods = if self.cors.allow_methods == "*" {
            AllowMethods::any()
        } else {
            AllowMethods::list(
                self.cors
                    .allow_methods
                    .split(',')
                    .filter_map(|s| s.trim().parse::<Method>().ok()),
            )
        };

        CorsLayer::new()
            .allow_origin(origin)
            .allow_headers(headers)
            .allow_methods(methods)
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
