//! Store port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (SQLite today, any relational store tomorrow) implement this trait.

use crate::domain::{Currency, CurrencyId, ExchangeRate, RateId};
use crate::dto::CreateCurrencyRequest;
use crate::error::StoreError;

/// The main store port for currency and rate data.
///
/// Finders return `Ok(None)` for "no matching record" so callers can tell an
/// expected miss from a store failure. Rate resolution depends on that
/// distinction: it falls through to a weaker strategy on a miss and aborts
/// on any error.
#[async_trait::async_trait]
pub trait ExchangeStore: Send + Sync + 'static {
    // ─────────────────────────────────────────────────────────────────────────────
    // Currency Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Lists all currencies.
    async fn list_currencies(&self) -> Result<Vec<Currency>, StoreError>;

    /// Finds a currency by code. Lookup is case-sensitive.
    async fn find_currency_by_code(&self, code: &str) -> Result<Option<Currency>, StoreError>;

    /// Creates a new currency. Fails with `Conflict` when the code is taken.
    async fn create_currency(&self, req: CreateCurrencyRequest) -> Result<Currency, StoreError>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Exchange Rate Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Lists all stored rates with both currencies populated.
    async fn list_rates(&self) -> Result<Vec<ExchangeRate>, StoreError>;

    /// Finds the rate stored for the ordered (base, target) pair.
    async fn find_rate(
        &self,
        base_currency_id: CurrencyId,
        target_currency_id: CurrencyId,
    ) -> Result<Option<ExchangeRate>, StoreError>;

    /// Stores a rate for the ordered (base, target) pair.
    /// Fails with `Conflict` when the pair already has a rate.
    async fn create_rate(
        &self,
        base_currency_id: CurrencyId,
        target_currency_id: CurrencyId,
        rate: f64,
    ) -> Result<ExchangeRate, StoreError>;

    /// Replaces the rate value of an existing record.
    async fn update_rate(&self, id: RateId, rate: f64) -> Result<(), StoreError>;
}
