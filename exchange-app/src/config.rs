//! Configuration loading from environment.

use std::env;

/// Application configuration.
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub reference_currency: String,
    pub cors_allow_origin: String,
    pub cors_allow_headers: String,
    pub cors_allow_methods: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let reference_currency =
            env::var("REFERENCE_CURRENCY").unwrap_or_else(|_| "USD".to_string());

        let cors_allow_origin = env::var("CORS_ALLOW_ORIGIN").unwrap_or_else(|_| "*".to_string());
        let cors_allow_headers = env::var("CORS_ALLOW_HEADERS").unwrap_or_else(|_| "*".to_string());
        let cors_allow_methods = env::var("CORS_ALLOW_METHODS")
            .unwrap_or_else(|_| "GET, POST, PATCH, OPTIONS".to_string());

        Ok(Self {
            host,
            port,
            database_url,
            reference_currency,
            cors_allow_origin,
            cors_allow_headers,
            cors_allow_methods,
        })
    }
}
