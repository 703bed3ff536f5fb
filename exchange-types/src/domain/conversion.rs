//! Conversion arithmetic shared by the resolution core.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::currency::Currency;

/// How a rate was resolved for a currency pair.
///
/// Not part of the wire format; callers use it to decide display direction
/// and tests use it to pin down which lookup won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateStrategy {
    /// A stored (base, target) rate was used as-is.
    Direct,
    /// The stored (target, base) rate was used; conversion divides by it.
    Reverse,
    /// Derived from two reference-currency rates.
    Cross,
}

impl std::fmt::Display for RateStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RateStrategy::Direct => "direct",
            RateStrategy::Reverse => "reverse",
            RateStrategy::Cross => "cross",
        };
        write!(f, "{name}")
    }
}

/// Rounds a monetary value to two decimals, half away from zero.
///
/// Any non-positive input collapses to exactly 0.
pub fn round_amount(value: f64) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }

    (value * 100.0).round() / 100.0
}

/// Applies a resolved rate to an amount.
///
/// The rate is rounded first so the quoted rate and the converted amount
/// always agree; a reverse-resolved rate divides, direct and cross multiply,
/// and the result is rounded with the same policy. Non-positive amounts or
/// rates yield 0.
pub fn convert_amount(amount: f64, rate: f64, strategy: RateStrategy) -> f64 {
    let rate = round_amount(rate);

    if amount <= 0.0 || rate <= 0.0 {
        return 0.0;
    }

    let converted = match strategy {
        RateStrategy::Reverse => amount / rate,
        RateStrategy::Direct | RateStrategy::Cross => amount * rate,
    };

    round_amount(converted)
}

/// The outcome of converting an amount between two currencies.
///
/// Ephemeral: produced per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    /// Currency converted from
    pub base_currency: Currency,
    /// Currency converted to
    pub target_currency: Currency,
    /// The resolved rate, rounded to two decimals
    #[schema(example = 1.08)]
    pub rate: f64,
    /// The requested amount
    #[schema(example = 100.0)]
    pub amount: f64,
    /// `amount` converted with the rounded rate
    #[schema(example = 108.0)]
    pub converted_amount: f64,
}
