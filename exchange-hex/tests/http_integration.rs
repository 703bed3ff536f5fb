//! Integration tests for the HTTP surface.
//!
//! These tests drive the full router against an in-memory SQLite store and
//! assert status codes, JSON payloads, and error messages end to end.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use exchange_hex::{ExchangeService, inbound::HttpServer};
use exchange_repo::SqliteStore;

/// Helper to build a router over a fresh in-memory store.
async fn test_app() -> Router {
    let store = SqliteStore::new("sqlite::memory:").await.unwrap();
    let service = ExchangeService::new(store);
    HttpServer::new(service).router()
}

/// Helper to run one request and decode the response body.
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn form(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn seed_currency(app: &Router, code: &str, name: &str, sign: &str) {
    let body = format!("name={name}&code={code}&sign={sign}");
    let (status, _) = send(app, form(Method::POST, "/currencies", &body)).await;
    assert_eq!(status, StatusCode::CREATED);
}

async fn seed_rate(app: &Router, base: &str, target: &str, rate: f64) {
    let body = format!("baseCurrencyCode={base}&targetCurrencyCode={target}&rate={rate}");
    let (status, _) = send(app, form(Method::POST, "/exchangeRates", &body)).await;
    assert_eq!(status, StatusCode::CREATED);
}

// ─────────────────────────────────────────────────────────────────────────────
// Health and documentation
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_health() {
    let app = test_app().await;

    let (status, json) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app().await;

    let (status, json) = send(&app, get("/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["info"]["title"], "Currency Exchange Service API");
}

// ─────────────────────────────────────────────────────────────────────────────
// Currencies
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_and_get_currency() {
    let app = test_app().await;

    let (status, created) = send(
        &app,
        form(Method::POST, "/currencies", "name=US Dollar&code=USD&sign=$"),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["code"], "USD");
    assert_eq!(created["name"], "US Dollar");
    assert_eq!(created["sign"], "$");
    assert!(created["id"].as_i64().unwrap() > 0);

    let (status, fetched) = send(&app, get("/currency/USD")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_list_currencies() {
    let app = test_app().await;
    seed_currency(&app, "USD", "US Dollar", "$").await;
    seed_currency(&app, "EUR", "Euro", "€").await;

    let (status, json) = send(&app, get("/currencies")).await;

    assert_eq!(status, StatusCode::OK);
    let currencies = json.as_array().unwrap();
    assert_eq!(currencies.len(), 2);
    assert_eq!(currencies[0]["code"], "USD");
    assert_eq!(currencies[1]["code"], "EUR");
}

#[tokio::test]
async fn test_create_currency_missing_field() {
    let app = test_app().await;

    let (status, json) = send(
        &app,
        form(Method::POST, "/currencies", "name=Euro&code=EUR"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Missing required field: sign");
}

#[tokio::test]
async fn test_create_currency_duplicate_code() {
    let app = test_app().await;
    seed_currency(&app, "USD", "US Dollar", "$").await;

    let (status, json) = send(
        &app,
        form(Method::POST, "/currencies", "name=US Dollar&code=USD&sign=$"),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "A currency with this code already exists");
}

#[tokio::test]
async fn test_get_currency_not_found() {
    let app = test_app().await;

    let (status, json) = send(&app, get("/currency/JPY")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Currency not found");
}

#[tokio::test]
async fn test_get_currency_is_case_sensitive() {
    let app = test_app().await;
    seed_currency(&app, "USD", "US Dollar", "$").await;

    let (status, _) = send(&app, get("/currency/usd")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ─────────────────────────────────────────────────────────────────────────────
// Exchange rates
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_rate() {
    let app = test_app().await;
    seed_currency(&app, "USD", "US Dollar", "$").await;
    seed_currency(&app, "EUR", "Euro", "€").await;

    let (status, json) = send(
        &app,
        form(
            Method::POST,
            "/exchangeRates",
            "baseCurrencyCode=USD&targetCurrencyCode=EUR&rate=0.92",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(json["id"].as_i64().unwrap() > 0);
    assert_eq!(json["baseCurrency"]["code"], "USD");
    assert_eq!(json["targetCurrency"]["code"], "EUR");
    assert_eq!(json["rate"], 0.92);
}

#[tokio::test]
async fn test_list_rates() {
    let app = test_app().await;
    seed_currency(&app, "USD", "US Dollar", "$").await;
    seed_currency(&app, "EUR", "Euro", "€").await;
    seed_rate(&app, "USD", "EUR", 0.92).await;

    let (status, json) = send(&app, get("/exchangeRates")).await;

    assert_eq!(status, StatusCode::OK);
    let rates = json.as_array().unwrap();
    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0]["baseCurrency"]["code"], "USD");
}

#[tokio::test]
async fn test_create_rate_unknown_currency() {
    let app = test_app().await;
    seed_currency(&app, "USD", "US Dollar", "$").await;

    let (status, json) = send(
        &app,
        form(
            Method::POST,
            "/exchangeRates",
            "baseCurrencyCode=USD&targetCurrencyCode=JPY&rate=150.0",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json["message"],
        "One or both currencies of the pair do not exist"
    );
}

#[tokio::test]
async fn test_create_rate_missing_rate_field() {
    let app = test_app().await;

    let (status, json) = send(
        &app,
        form(
            Method::POST,
            "/exchangeRates",
            "baseCurrencyCode=USD&targetCurrencyCode=EUR",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Missing required field: rate");
}

#[tokio::test]
async fn test_create_rate_invalid_rate_field() {
    let app = test_app().await;

    for body in [
        "baseCurrencyCode=USD&targetCurrencyCode=EUR&rate=abc",
        "baseCurrencyCode=USD&targetCurrencyCode=EUR&rate=-1.5",
        "baseCurrencyCode=USD&targetCurrencyCode=EUR&rate=0",
    ] {
        let (status, json) = send(&app, form(Method::POST, "/exchangeRates", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(json["message"], "Invalid value for field rate");
    }
}

#[tokio::test]
async fn test_create_rate_duplicate_pair() {
    let app = test_app().await;
    seed_currency(&app, "USD", "US Dollar", "$").await;
    seed_currency(&app, "EUR", "Euro", "€").await;
    seed_rate(&app, "USD", "EUR", 0.92).await;

    let (status, json) = send(
        &app,
        form(
            Method::POST,
            "/exchangeRates",
            "baseCurrencyCode=USD&targetCurrencyCode=EUR&rate=0.95",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        json["message"],
        "A currency pair with this code already exists"
    );
}

#[tokio::test]
async fn test_get_rate_by_pair() {
    let app = test_app().await;
    seed_currency(&app, "USD", "US Dollar", "$").await;
    seed_currency(&app, "EUR", "Euro", "€").await;
    seed_rate(&app, "USD", "EUR", 0.92).await;

    let (status, json) = send(&app, get("/exchangeRate/USDEUR")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["baseCurrency"]["code"], "USD");
    assert_eq!(json["targetCurrency"]["code"], "EUR");
    assert_eq!(json["rate"], 0.92);
}

#[tokio::test]
async fn test_get_rate_pair_is_uppercased() {
    let app = test_app().await;
    seed_currency(&app, "USD", "US Dollar", "$").await;
    seed_currency(&app, "EUR", "Euro", "€").await;
    seed_rate(&app, "USD", "EUR", 0.92).await;

    let (status, json) = send(&app, get("/exchangeRate/usdeur")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["rate"], 0.92);
}

#[tokio::test]
async fn test_get_rate_malformed_pair() {
    let app = test_app().await;

    let (status, json) = send(&app, get("/exchangeRate/USD")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["message"],
        "One or both currencies of the pair do not exist"
    );
}

#[tokio::test]
async fn test_get_rate_unknown_currency() {
    let app = test_app().await;
    seed_currency(&app, "USD", "US Dollar", "$").await;

    let (status, json) = send(&app, get("/exchangeRate/USDJPY")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Exchange rate for the pair not found");
}

#[tokio::test]
async fn test_get_rate_missing_pair() {
    let app = test_app().await;
    seed_currency(&app, "USD", "US Dollar", "$").await;
    seed_currency(&app, "EUR", "Euro", "€").await;

    let (status, json) = send(&app, get("/exchangeRate/USDEUR")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Currency pair not found");
}

#[tokio::test]
async fn test_update_rate() {
    let app = test_app().await;
    seed_currency(&app, "USD", "US Dollar", "$").await;
    seed_currency(&app, "EUR", "Euro", "€").await;
    seed_rate(&app, "USD", "EUR", 0.92).await;

    let (status, json) = send(
        &app,
        form(Method::PATCH, "/exchangeRate/USDEUR", "rate=0.89"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["rate"], 0.89);
    assert_eq!(json["baseCurrency"]["code"], "USD");

    let (_, fetched) = send(&app, get("/exchangeRate/USDEUR")).await;
    assert_eq!(fetched["rate"], 0.89);
}

#[tokio::test]
async fn test_update_rate_unknown_currency_wins_over_invalid_rate() {
    let app = test_app().await;
    seed_currency(&app, "USD", "US Dollar", "$").await;

    // Currency resolution comes before rate validation, so the unknown
    // currency reports 404 even though the rate value is also bad.
    let (status, json) = send(
        &app,
        form(Method::PATCH, "/exchangeRate/USDJPY", "rate=abc"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json["message"],
        "One or both currencies of the pair do not exist"
    );
}

#[tokio::test]
async fn test_update_rate_invalid_rate() {
    let app = test_app().await;
    seed_currency(&app, "USD", "US Dollar", "$").await;
    seed_currency(&app, "EUR", "Euro", "€").await;
    seed_rate(&app, "USD", "EUR", 0.92).await;

    let (status, json) = send(
        &app,
        form(Method::PATCH, "/exchangeRate/USDEUR", "rate=abc"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Invalid value for field rate");
}

#[tokio::test]
async fn test_update_rate_missing_pair() {
    let app = test_app().await;
    seed_currency(&app, "USD", "US Dollar", "$").await;
    seed_currency(&app, "EUR", "Euro", "€").await;

    let (status, json) = send(
        &app,
        form(Method::PATCH, "/exchangeRate/USDEUR", "rate=0.89"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Currency pair not found");
}

#[tokio::test]
async fn test_options_on_pair_route() {
    let app = test_app().await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/exchangeRate/USDEUR")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, Value::Null);
}

#[tokio::test]
async fn test_method_not_allowed() {
    let app = test_app().await;

    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/currencies")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_exchange_direct() {
    let app = test_app().await;
    seed_currency(&app, "EUR", "Euro", "€").await;
    seed_currency(&app, "USD", "US Dollar", "$").await;
    seed_rate(&app, "EUR", "USD", 1.08).await;

    let (status, json) = send(&app, get("/exchange?from=EUR&to=USD&amount=100")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["baseCurrency"]["code"], "EUR");
    assert_eq!(json["targetCurrency"]["code"], "USD");
    assert_eq!(json["rate"], 1.08);
    assert_eq!(json["amount"], 100.0);
    assert_eq!(json["convertedAmount"], 108.0);
}

#[tokio::test]
async fn test_exchange_reverse() {
    let app = test_app().await;
    seed_currency(&app, "USD", "US Dollar", "$").await;
    seed_currency(&app, "EUR", "Euro", "€").await;
    seed_rate(&app, "USD", "EUR", 0.92).await;

    // Only USD->EUR is stored; the reverse record satisfies EUR->USD.
    let (status, json) = send(&app, get("/exchange?from=EUR&to=USD&amount=50")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["rate"], 0.92);
    assert_eq!(json["convertedAmount"], 54.35);
}

#[tokio::test]
async fn test_exchange_cross() {
    let app = test_app().await;
    seed_currency(&app, "USD", "US Dollar", "$").await;
    seed_currency(&app, "GBP", "Pound Sterling", "£").await;
    seed_currency(&app, "JPY", "Japanese Yen", "¥").await;
    seed_rate(&app, "USD", "GBP", 2.0).await;
    seed_rate(&app, "USD", "JPY", 6.0).await;

    let (status, json) = send(&app, get("/exchange?from=GBP&to=JPY&amount=10")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["rate"], 3.0);
    assert_eq!(json["convertedAmount"], 30.0);
}

#[tokio::test]
async fn test_exchange_missing_param() {
    let app = test_app().await;

    let (status, json) = send(&app, get("/exchange?from=EUR&amount=100")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Missing required field: to");
}

#[tokio::test]
async fn test_exchange_invalid_amount() {
    let app = test_app().await;
    seed_currency(&app, "USD", "US Dollar", "$").await;
    seed_currency(&app, "EUR", "Euro", "€").await;

    for uri in [
        "/exchange?from=USD&to=EUR&amount=abc",
        "/exchange?from=USD&to=EUR&amount=0",
        "/exchange?from=USD&to=EUR&amount=-5",
    ] {
        let (status, json) = send(&app, get(uri)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {uri}");
        assert_eq!(json["message"], "Invalid value for field amount");
    }
}

#[tokio::test]
async fn test_exchange_unknown_currency() {
    let app = test_app().await;
    seed_currency(&app, "USD", "US Dollar", "$").await;

    let (status, json) = send(&app, get("/exchange?from=USD&to=JPY&amount=10")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json["message"],
        "One or both currencies of the pair do not exist"
    );
}

#[tokio::test]
async fn test_exchange_unresolvable_pair() {
    let app = test_app().await;
    seed_currency(&app, "GBP", "Pound Sterling", "£").await;
    seed_currency(&app, "JPY", "Japanese Yen", "¥").await;

    // No rates and no reference currency either.
    let (status, json) = send(&app, get("/exchange?from=GBP&to=JPY&amount=10")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Currency pair not found");
}
