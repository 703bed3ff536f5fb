//! HTTP request handlers.
//!
//! Write endpoints take `application/x-www-form-urlencoded` bodies with all
//! fields optional, so a missing field can be reported by name instead of
//! through a generic deserialization failure.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use exchange_types::{AppError, CreateCurrencyRequest, CreateExchangeRateRequest, ExchangeStore};

use crate::ExchangeService;
use crate::messages;

/// Application state shared across handlers.
pub struct AppState<S: ExchangeStore> {
    pub service: ExchangeService<S>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Internal(detail) => {
                // The detail stays in the log; clients get a fixed message.
                tracing::error!("internal error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    messages::SERVER_ERROR.to_string(),
                )
            }
        };

        let body = serde_json::json!({ "message": message });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Currencies
// ─────────────────────────────────────────────────────────────────────────────

/// Form payload for registering a currency.
#[derive(Debug, Deserialize)]
pub struct CurrencyForm {
    pub name: Option<String>,
    pub code: Option<String>,
    pub sign: Option<String>,
}

/// List all currencies.
#[tracing::instrument(skip(state))]
pub async fn list_currencies<S: ExchangeStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError> {
    let currencies = state.service.list_currencies().await?;
    Ok(Json(currencies))
}

/// Register a new currency.
#[tracing::instrument(skip(state))]
pub async fn create_currency<S: ExchangeStore>(
    State(state): State<Arc<AppState<S>>>,
    Form(form): Form<CurrencyForm>,
) -> Result<impl IntoResponse, ApiError> {
    let name = require_field(form.name, "name")?;
    let code = require_field(form.code, "code")?;
    let sign = require_field(form.sign, "sign")?;

    let currency = state
        .service
        .create_currency(CreateCurrencyRequest { code, name, sign })
        .await?;
    Ok((StatusCode::CREATED, Json(currency)))
}

/// Get a currency by its code.
#[tracing::instrument(skip(state))]
pub async fn get_currency<S: ExchangeStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let currency = state.service.get_currency(&code).await?;
    Ok(Json(currency))
}

// ─────────────────────────────────────────────────────────────────────────────
// Exchange rates
// ─────────────────────────────────────────────────────────────────────────────

/// Form payload for storing a rate.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateForm {
    pub base_currency_code: Option<String>,
    pub target_currency_code: Option<String>,
    pub rate: Option<String>,
}

/// Form payload for updating a rate.
#[derive(Debug, Deserialize)]
pub struct UpdateRateForm {
    pub rate: Option<String>,
}

/// List all stored exchange rates.
#[tracing::instrument(skip(state))]
pub async fn list_rates<S: ExchangeStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<impl IntoResponse, ApiError> {
    let rates = state.service.list_rates().await?;
    Ok(Json(rates))
}

/// Store a rate for an ordered currency pair.
#[tracing::instrument(skip(state))]
pub async fn create_rate<S: ExchangeStore>(
    State(state): State<Arc<AppState<S>>>,
    Form(form): Form<RateForm>,
) -> Result<impl IntoResponse, ApiError> {
    let base_currency_code = require_field(form.base_currency_code, "baseCurrencyCode")?;
    let target_currency_code = require_field(form.target_currency_code, "targetCurrencyCode")?;
    let rate = parse_positive_field(form.rate, "rate")?;

    let created = state
        .service
        .create_rate(CreateExchangeRateRequest {
            base_currency_code,
            target_currency_code,
            rate,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get the stored rate for a pair path segment.
#[tracing::instrument(skip(state), fields(pair = %pair))]
pub async fn get_rate<S: ExchangeStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(pair): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let (base_code, target_code) = split_pair(&pair)?;

    let rate = state.service.get_rate(&base_code, &target_code).await?;
    Ok(Json(rate))
}

/// Update the stored rate for a pair path segment.
///
/// Validation order is part of the surface: the pair segment is parsed, both
/// currencies are resolved, and only then is the rate value checked. A
/// request with an unknown currency and a bad rate reports the 404.
#[tracing::instrument(skip(state), fields(pair = %pair))]
pub async fn update_rate<S: ExchangeStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(pair): Path<String>,
    Form(form): Form<UpdateRateForm>,
) -> Result<impl IntoResponse, ApiError> {
    let (base_code, target_code) = split_pair(&pair)?;

    let (base, target) = state
        .service
        .pair_currencies(&base_code, &target_code)
        .await?;
    let rate = parse_positive_field(form.rate, "rate")?;

    let updated = state.service.update_rate(base.id, target.id, rate).await?;
    Ok(Json(updated))
}

/// Preflight acknowledgement kept for clients of the original service.
pub async fn rate_preflight() -> impl IntoResponse {
    StatusCode::OK
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters for a conversion request.
#[derive(Debug, Deserialize)]
pub struct ExchangeParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
}

/// Convert an amount between two currencies.
#[tracing::instrument(skip(state))]
pub async fn convert<S: ExchangeStore>(
    State(state): State<Arc<AppState<S>>>,
    Query(params): Query<ExchangeParams>,
) -> Result<impl IntoResponse, ApiError> {
    let from = require_field(params.from, "from")?;
    let to = require_field(params.to, "to")?;
    let amount = parse_positive_field(params.amount, "amount")?;

    let conversion = state.service.convert(&from, &to, amount).await?;
    Ok(Json(conversion))
}

// ─────────────────────────────────────────────────────────────────────────────
// Input helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Treats an absent or empty value as a missing field.
fn require_field(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(messages::field_missing(field)).into()),
    }
}

/// Parses a value that must be a float greater than zero, distinguishing a
/// missing value from an invalid one.
fn parse_positive_field(value: Option<String>, field: &str) -> Result<f64, ApiError> {
    let raw = match value {
        Some(v) if !v.is_empty() => v,
        _ => return Err(AppError::BadRequest(messages::field_missing(field)).into()),
    };

    match raw.parse::<f64>() {
        Ok(parsed) if parsed > 0.0 => Ok(parsed),
        _ => Err(AppError::BadRequest(messages::field_invalid(field)).into()),
    }
}

/// Splits a pair path segment into uppercase base and target codes.
///
/// The segment must be exactly six characters, split three and three. The
/// malformed-pair message matches the original service.
fn split_pair(pair: &str) -> Result<(String, String), ApiError> {
    if pair.is_empty() {
        return Err(AppError::BadRequest(messages::PAIR_CODES_MISSING.into()).into());
    }

    let chars: Vec<char> = pair.to_uppercase().chars().collect();
    if chars.len() != 6 {
        return Err(AppError::BadRequest(messages::PAIR_CURRENCIES_MISSING.into()).into());
    }

    let base = chars[..3].iter().collect();
    let target = chars[3..].iter().collect();
    Ok((base, target))
}
