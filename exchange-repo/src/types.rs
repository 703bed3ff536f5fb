//! Database row structs for the SQLite adapter.

use sqlx::FromRow;

use exchange_types::{Currency, CurrencyId, ExchangeRate, RateId};

// ─────────────────────────────────────────────────────────────────────────────
// Database row structs (derive FromRow for automatic mapping)
// ─────────────────────────────────────────────────────────────────────────────

/// Currency row from database.
#[derive(FromRow)]
pub struct DbCurrency {
    pub id: i64,
    pub code: String,
    pub full_name: String,
    pub sign: String,
}

impl DbCurrency {
    pub fn into_domain(self) -> Currency {
        Currency::from_parts(
            CurrencyId::from_i64(self.id),
            self.code,
            self.full_name,
            self.sign,
        )
    }
}

/// Exchange-rate row joined with both of its currencies.
///
/// Field names line up with the column aliases of the rate SELECTs.
#[derive(FromRow)]
pub struct DbExchangeRate {
    pub id: i64,
    pub rate: f64,
    pub base_id: i64,
    pub base_code: String,
    pub base_full_name: String,
    pub base_sign: String,
    pub target_id: i64,
    pub target_code: String,
    pub target_full_name: String,
    pub target_sign: String,
}

impl DbExchangeRate {
    pub fn into_domain(self) -> ExchangeRate {
        ExchangeRate::from_parts(
            RateId::from_i64(self.id),
            Currency::from_parts(
                CurrencyId::from_i64(self.base_id),
                self.base_code,
                self.base_full_name,
                self.base_sign,
            ),
            Currency::from_parts(
                CurrencyId::from_i64(self.target_id),
                self.target_code,
                self.target_full_name,
                self.target_sign,
            ),
            self.rate,
        )
    }
}
