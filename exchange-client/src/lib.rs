//! # Exchange Client SDK
//!
//! A typed Rust client for the Currency Exchange API.

use exchange_types::{
    Conversion, CreateCurrencyRequest, CreateExchangeRateRequest, Currency, ExchangeRate,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Currency Exchange API client.
pub struct ExchangeClient {
    base_url: String,
    http: Client,
}

impl ExchangeClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Lists all registered currencies.
    pub async fn list_currencies(&self) -> Result<Vec<Currency>, ClientError> {
        self.get("/currencies").await
    }

    /// Gets a currency by its code. Codes are matched case-sensitively.
    pub async fn get_currency(&self, code: &str) -> Result<Currency, ClientError> {
        self.get(&format!("/currency/{code}")).await
    }

    /// Registers a new currency.
    pub async fn create_currency(
        &self,
        code: &str,
        name: &str,
        sign: &str,
    ) -> Result<Currency, ClientError> {
        let req = CreateCurrencyRequest {
            code: code.to_string(),
            name: name.to_string(),
            sign: sign.to_string(),
        };
        self.post_form("/currencies", &req).await
    }

    /// Lists all exchange rates.
    pub async fn list_rates(&self) -> Result<Vec<ExchangeRate>, ClientError> {
        self.get("/exchangeRates").await
    }

    /// Gets the directly stored rate for a currency pair.
    pub async fn get_rate(&self, base: &str, target: &str) -> Result<ExchangeRate, ClientError> {
        self.get(&format!("/exchangeRate/{base}{target}")).await
    }

    /// Registers a new exchange rate for a currency pair.
    pub async fn create_rate(
        &self,
        base: &str,
        target: &str,
        rate: f64,
    ) -> Result<ExchangeRate, ClientError> {
        let req = CreateExchangeRateRequest {
            base_currency_code: base.to_string(),
            target_currency_code: target.to_string(),
            rate,
        };
        self.post_form("/exchangeRates", &req).await
    }

    /// Updates the stored rate for an existing currency pair.
    pub async fn update_rate(
        &self,
        base: &str,
        target: &str,
        rate: f64,
    ) -> Result<ExchangeRate, ClientError> {
        self.patch_form(&format!("/exchangeRate/{base}{target}"), &[("rate", rate)])
            .await
    }

    /// Converts an amount between two currencies.
    pub async fn convert(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<Conversion, ClientError> {
        let resp = self
            .http
            .get(format!("{}/exchange", self.base_url))
            .query(&[("from", from), ("to", to)])
            .query(&[("amount", amount)])
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn post_form<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .form(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn patch_form<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .patch(format!("{}{}", self.base_url, path))
            .form(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
