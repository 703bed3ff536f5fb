//! Currency reference data.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a Currency.
///
/// Store-assigned and stable; never derived from the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct CurrencyId(i64);

impl CurrencyId {
    /// Creates a CurrencyId from a raw store identifier.
    pub fn from_i64(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CurrencyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A currency known to the system.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Currency {
    /// Unique identifier
    pub id: CurrencyId,
    /// Short uppercase code, unique across the store
    #[schema(example = "USD")]
    pub code: String,
    /// Human-readable name; serialized as `name` on the wire
    #[serde(rename = "name")]
    #[schema(example = "US Dollar")]
    pub full_name: String,
    /// Display symbol
    #[schema(example = "$")]
    pub sign: String,
}

impl Currency {
    /// Creates a currency with all fields specified (for database reconstruction).
    pub fn from_parts(id: CurrencyId, code: String, full_name: String, sign: String) -> Self {
        Self {
            id,
            code,
            full_name,
            sign,
        }
    }
}
