//! Exchange Application Service
//!
//! Orchestrates currency and rate operations through the store port.
//! Contains NO infrastructure logic - pure business orchestration.

use exchange_types::{
    AppError, Conversion, CreateCurrencyRequest, CreateExchangeRateRequest, Currency, CurrencyId,
    ExchangeRate, ExchangeStore, RateStrategy, StoreError, convert_amount, round_amount,
};

use crate::messages;

/// Reference currency used to derive cross rates when no direct or reverse
/// record exists.
pub const DEFAULT_REFERENCE_CURRENCY: &str = "USD";

/// Application service for exchange operations.
///
/// Generic over `S: ExchangeStore` - the adapter is injected at compile time.
/// This enables:
/// - Swapping stores without code changes
/// - Testing with an in-memory store
/// - Compile-time checks for port implementation
pub struct ExchangeService<S: ExchangeStore> {
    store: S,
    reference_currency: String,
}

impl<S: ExchangeStore> ExchangeService<S> {
    /// Creates a new exchange service with the given store.
    pub fn new(store: S) -> Self {
        Self::with_reference_currency(store, DEFAULT_REFERENCE_CURRENCY)
    }

    /// Creates a new exchange service with a custom reference currency code.
    pub fn with_reference_currency(store: S, reference_currency: impl Into<String>) -> Self {
        Self {
            store,
            reference_currency: reference_currency.into(),
        }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Currency Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Lists all registered currencies.
    pub async fn list_currencies(&self) -> Result<Vec<Currency>, AppError> {
        self.store.list_currencies().await.map_err(Into::into)
    }

    /// Gets a currency by its code. Lookups are case-sensitive.
    pub async fn get_currency(&self, code: &str) -> Result<Currency, AppError> {
        self.store
            .find_currency_by_code(code)
            .await
            .map_err(Into::into)
            .and_then(|opt| {
                opt.ok_or_else(|| AppError::NotFound(messages::CURRENCY_NOT_FOUND.into()))
            })
    }

    /// Registers a new currency.
    pub async fn create_currency(&self, req: CreateCurrencyRequest) -> Result<Currency, AppError> {
        if req.code.trim().is_empty() {
            return Err(AppError::BadRequest("Currency code cannot be empty".into()));
        }
        if req.name.trim().is_empty() {
            return Err(AppError::BadRequest("Currency name cannot be empty".into()));
        }
        if req.sign.trim().is_empty() {
            return Err(AppError::BadRequest("Currency sign cannot be empty".into()));
        }

        self.store.create_currency(req).await.map_err(|e| match e {
            StoreError::Conflict(_) => AppError::Conflict(messages::CURRENCY_EXISTS.into()),
            other => other.into(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Exchange Rate Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Lists all stored exchange rates.
    pub async fn list_rates(&self) -> Result<Vec<ExchangeRate>, AppError> {
        self.store.list_rates().await.map_err(Into::into)
    }

    /// Gets the stored rate for an ordered pair. Direct lookup only; the
    /// fallback chain applies to conversion, not to this admin read.
    pub async fn get_rate(
        &self,
        base_code: &str,
        target_code: &str,
    ) -> Result<ExchangeRate, AppError> {
        let (base, target) = self
            .lookup_pair(base_code, target_code, messages::RATE_NOT_FOUND)
            .await?;

        self.store
            .find_rate(base.id, target.id)
            .await
            .map_err(Into::into)
            .and_then(|opt| opt.ok_or_else(|| AppError::NotFound(messages::PAIR_NOT_FOUND.into())))
    }

    /// Stores a rate for an ordered currency pair.
    pub async fn create_rate(
        &self,
        req: CreateExchangeRateRequest,
    ) -> Result<ExchangeRate, AppError> {
        if req.base_currency_code.trim().is_empty() || req.target_currency_code.trim().is_empty() {
            return Err(AppError::BadRequest("Currency codes cannot be empty".into()));
        }
        if req.rate <= 0.0 {
            return Err(AppError::BadRequest("Rate must be positive".into()));
        }

        let (base, target) = self
            .pair_currencies(&req.base_currency_code, &req.target_currency_code)
            .await?;

        self.store
            .create_rate(base.id, target.id, req.rate)
            .await
            .map_err(|e| match e {
                StoreError::Conflict(_) => AppError::Conflict(messages::PAIR_EXISTS.into()),
                other => other.into(),
            })
    }

    /// Resolves both pair codes to stored currencies.
    pub async fn pair_currencies(
        &self,
        base_code: &str,
        target_code: &str,
    ) -> Result<(Currency, Currency), AppError> {
        self.lookup_pair(base_code, target_code, messages::PAIR_CURRENCIES_MISSING)
            .await
    }

    /// Updates the stored rate between two already-resolved currencies and
    /// returns the updated record.
    pub async fn update_rate(
        &self,
        base_id: CurrencyId,
        target_id: CurrencyId,
        rate: f64,
    ) -> Result<ExchangeRate, AppError> {
        if rate <= 0.0 {
            return Err(AppError::BadRequest("Rate must be positive".into()));
        }

        let existing = self
            .store
            .find_rate(base_id, target_id)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound(messages::PAIR_NOT_FOUND.into()))?;

        self.store.update_rate(existing.id, rate).await?;

        Ok(ExchangeRate { rate, ..existing })
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    /// Converts an amount between two currencies, resolving the rate through
    /// the direct, reverse, cross fallback chain.
    pub async fn convert(
        &self,
        from_code: &str,
        to_code: &str,
        amount: f64,
    ) -> Result<Conversion, AppError> {
        if amount <= 0.0 {
            return Err(AppError::BadRequest("Amount must be positive".into()));
        }

        let (base, target) = self
            .lookup_pair(from_code, to_code, messages::PAIR_CURRENCIES_MISSING)
            .await?;

        let (rate, strategy) = self.resolve_rate(base.id, target.id).await?;

        Ok(Conversion {
            base_currency: base,
            target_currency: target,
            rate: round_amount(rate),
            amount,
            converted_amount: convert_amount(amount, rate, strategy),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Rate resolution
    // ─────────────────────────────────────────────────────────────────────────────

    /// Resolves an effective rate for a pair, trying direct, then reverse,
    /// then cross via the reference currency. A store failure at any stage
    /// aborts immediately; only a clean miss falls through.
    async fn resolve_rate(
        &self,
        base_id: CurrencyId,
        target_id: CurrencyId,
    ) -> Result<(f64, RateStrategy), AppError> {
        if let Some(direct) = self
            .store
            .find_rate(base_id, target_id)
            .await
            .map_err(AppError::from)?
        {
            return Ok((direct.rate, RateStrategy::Direct));
        }

        if let Some(reverse) = self
            .store
            .find_rate(target_id, base_id)
            .await
            .map_err(AppError::from)?
        {
            // The stored rate is kept as-is; conversion divides by it.
            return Ok((reverse.rate, RateStrategy::Reverse));
        }

        self.cross_rate(base_id, target_id)
            .await?
            .map(|rate| (rate, RateStrategy::Cross))
            .ok_or_else(|| AppError::NotFound(messages::PAIR_NOT_FOUND.into()))
    }

    /// Derives a rate through the reference currency. `None` when the
    /// reference currency or either of its legs is missing.
    async fn cross_rate(
        &self,
        base_id: CurrencyId,
        target_id: CurrencyId,
    ) -> Result<Option<f64>, AppError> {
        let reference = match self
            .store
            .find_currency_by_code(&self.reference_currency)
            .await
            .map_err(AppError::from)?
        {
            Some(currency) => currency,
            None => return Ok(None),
        };

        let to_base = match self
            .store
            .find_rate(reference.id, base_id)
            .await
            .map_err(AppError::from)?
        {
            Some(rate) => rate,
            None => return Ok(None),
        };

        let to_target = match self
            .store
            .find_rate(reference.id, target_id)
            .await
            .map_err(AppError::from)?
        {
            Some(rate) => rate,
            None => return Ok(None),
        };

        Ok(Some(to_target.rate / to_base.rate))
    }

    /// Resolves both codes sequentially, failing with the given message on
    /// the first miss.
    async fn lookup_pair(
        &self,
        base_code: &str,
        target_code: &str,
        missing_message: &str,
    ) -> Result<(Currency, Currency), AppError> {
        let base = self
            .store
            .find_currency_by_code(base_code)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound(missing_message.to_string()))?;

        let target = self
            .store
            .find_currency_by_code(target_code)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| AppError::NotFound(missing_message.to_string()))?;

        Ok((base, target))
    }
}
