//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use exchange_types::{
    Conversion, CreateCurrencyRequest, CreateExchangeRateRequest, Currency, CurrencyId,
    ExchangeRate, RateId,
};
use utoipa::OpenApi;

/// Form body for updating a stored rate.
#[derive(utoipa::ToSchema)]
struct UpdateRateRequest {
    /// New positive rate value
    #[schema(example = 0.91)]
    rate: f64,
}

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = inline(serde_json::Value), example = json!({"status": "ok"}))
    )
)]
async fn health() {}

/// List all currencies
#[utoipa::path(
    get,
    path = "/currencies",
    tag = "currencies",
    responses(
        (status = 200, description = "List of currencies", body = Vec<Currency>)
    )
)]
async fn list_currencies() {}

/// Register a new currency
#[utoipa::path(
    post,
    path = "/currencies",
    tag = "currencies",
    request_body(
        content = CreateCurrencyRequest,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 201, description = "Currency created", body = Currency),
        (status = 400, description = "Missing form field"),
        (status = 409, description = "A currency with this code already exists")
    )
)]
async fn create_currency() {}

/// Get a currency by code
#[utoipa::path(
    get,
    path = "/currency/{code}",
    tag = "currencies",
    params(
        ("code" = String, Path, description = "Currency code, case-sensitive")
    ),
    responses(
        (status = 200, description = "Currency details", body = Currency),
        (status = 404, description = "Currency not found")
    )
)]
async fn get_currency() {}

/// List all stored exchange rates
#[utoipa::path(
    get,
    path = "/exchangeRates",
    tag = "rates",
    responses(
        (status = 200, description = "List of exchange rates", body = Vec<ExchangeRate>)
    )
)]
async fn list_rates() {}

/// Store a rate for an ordered currency pair
#[utoipa::path(
    post,
    path = "/exchangeRates",
    tag = "rates",
    request_body(
        content = CreateExchangeRateRequest,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 201, description = "Rate created", body = ExchangeRate),
        (status = 400, description = "Missing or invalid form field"),
        (status = 404, description = "One or both currencies of the pair do not exist"),
        (status = 409, description = "A currency pair with this code already exists")
    )
)]
async fn create_rate() {}

/// Get the stored rate for a currency pair
#[utoipa::path(
    get,
    path = "/exchangeRate/{pair}",
    tag = "rates",
    params(
        ("pair" = String, Path, description = "Six-character pair, e.g. USDEUR")
    ),
    responses(
        (status = 200, description = "Stored rate for the pair", body = ExchangeRate),
        (status = 400, description = "Malformed pair segment"),
        (status = 404, description = "Currency or pair unknown")
    )
)]
async fn get_rate() {}

/// Update the stored rate for a currency pair
#[utoipa::path(
    patch,
    path = "/exchangeRate/{pair}",
    tag = "rates",
    params(
        ("pair" = String, Path, description = "Six-character pair, e.g. USDEUR")
    ),
    request_body(
        content = UpdateRateRequest,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 200, description = "Updated rate", body = ExchangeRate),
        (status = 400, description = "Malformed pair segment or invalid rate"),
        (status = 404, description = "Currency or pair unknown")
    )
)]
async fn update_rate() {}

/// Convert an amount between two currencies
#[utoipa::path(
    get,
    path = "/exchange",
    tag = "exchange",
    params(
        ("from" = String, Query, description = "Source currency code"),
        ("to" = String, Query, description = "Target currency code"),
        ("amount" = f64, Query, description = "Amount to convert, must be positive")
    ),
    responses(
        (status = 200, description = "Conversion result", body = Conversion),
        (status = 400, description = "Missing or invalid query parameter"),
        (status = 404, description = "Unknown currency or unresolvable pair")
    )
)]
async fn convert() {}

/// OpenAPI documentation for the Currency Exchange API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currency Exchange Service API",
        version = "1.0.0",
        description = "Currency reference data, exchange rates, and amount conversion.\n\nWrite endpoints accept `application/x-www-form-urlencoded` bodies. Conversion resolves rates through a direct lookup, the reversed pair, or a cross rate via the reference currency.",
        license(name = "MIT"),
    ),
    paths(
        health,
        list_currencies,
        create_currency,
        get_currency,
        list_rates,
        create_rate,
        get_rate,
        update_rate,
        convert,
    ),
    components(
        schemas(
            Currency,
            CurrencyId,
            ExchangeRate,
            RateId,
            Conversion,
            CreateCurrencyRequest,
            CreateExchangeRateRequest,
            UpdateRateRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "currencies", description = "Currency reference data"),
        (name = "rates", description = "Stored exchange rate management"),
        (name = "exchange", description = "Amount conversion"),
    )
)]
pub struct ApiDoc;
