//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─────────────────────────────────────────────────────────────────────────────
// Currency DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to register a new currency.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCurrencyRequest {
    /// Short uppercase currency code
    #[schema(example = "EUR")]
    pub code: String,
    /// Human-readable name
    #[schema(example = "Euro")]
    pub name: String,
    /// Display symbol
    #[schema(example = "€")]
    pub sign: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Exchange rate DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to store a rate for an ordered currency pair.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExchangeRateRequest {
    /// Code of the currency the rate converts from
    #[schema(example = "USD")]
    pub base_currency_code: String,
    /// Code of the currency the rate converts to
    #[schema(example = "EUR")]
    pub target_currency_code: String,
    /// Units of target currency per one unit of base currency
    #[schema(example = 0.92)]
    pub rate: f64,
}
