//! Exchange rate records.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::currency::Currency;

/// Unique identifier for an ExchangeRate record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct RateId(i64);

impl RateId {
    /// Creates a RateId from a raw store identifier.
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored exchange rate for an ordered currency pair.
///
/// At most one record exists per ordered (base, target) pair; the opposite
/// direction is a distinct record. The stored value keeps full precision -
/// rounding happens at resolution time, not here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRate {
    /// Unique identifier
    pub id: RateId,
    /// Currency the rate converts from
    pub base_currency: Currency,
    /// Currency the rate converts to
    pub target_currency: Currency,
    /// Units of target currency per one unit of base currency
    #[schema(example = 0.92)]
    pub rate: f64,
}

impl ExchangeRate {
    /// Creates a rate record with all fields specified (for database reconstruction).
    pub fn from_parts(
        id: RateId,
        base_currency: Currency,
        target_currency: Currency,
        rate: f64,
    ) -> Self {
        Self {
            id,
            base_currency,
            target_currency,
            rate,
        }
    }
}
