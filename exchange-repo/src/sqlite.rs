//! SQLite store adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use exchange_types::{
    CreateCurrencyRequest, Currency, CurrencyId, ExchangeRate, ExchangeStore, RateId, StoreError,
};

use crate::types::{DbCurrency, DbExchangeRate};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Store
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite store implementation.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a new SQLite store with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePool::connect_with(options).await?;

        // Run migration from migration file
        let ddl = include_str!("../migrations/0001_create_tables.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Maps an insert failure, keeping UNIQUE violations distinguishable.
fn map_insert_err(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return StoreError::Conflict(db.message().to_string());
        }
    }

    StoreError::Database(e.to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Store implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl ExchangeStore for SqliteStore {
    async fn list_currencies(&self) -> Result<Vec<Currency>, StoreError> {
        let rows: Vec<DbCurrency> =
            sqlx::query_as(r#"SELECT id, code, full_name, sign FROM currencies ORDER BY id"#)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(DbCurrency::into_domain).collect())
    }

    async fn find_currency_by_code(&self, code: &str) -> Result<Option<Currency>, StoreError> {
        let row: Option<DbCurrency> =
            sqlx::query_as(r#"SELECT id, code, full_name, sign FROM currencies WHERE code = ?"#)
                .bind(code)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(row.map(DbCurrency::into_domain))
    }

    async fn create_currency(&self, req: CreateCurrencyRequest) -> Result<Currency, StoreError> {
        let result =
            sqlx::query(r#"INSERT INTO currencies (code, full_name, sign) VALUES (?, ?, ?)"#)
                .bind(&req.code)
                .bind(&req.name)
                .bind(&req.sign)
                .execute(&self.pool)
                .await
                .map_err(map_insert_err)?;

        Ok(Currency::from_parts(
            CurrencyId::from_i64(result.last_insert_rowid()),
            req.code,
            req.name,
            req.sign,
        ))
    }

    async fn list_rates(&self) -> Result<Vec<ExchangeRate>, StoreError> {
        let rows: Vec<DbExchangeRate> = sqlx::query_as(
            r#"SELECT er.id, er.rate,
                   base.id AS base_id,
                   base.code AS base_code,
                   base.full_name AS base_full_name,
                   base.sign AS base_sign,
                   target.id AS target_id,
                   target.code AS target_code,
                   target.full_name AS target_full_name,
                   target.sign AS target_sign
               FROM exchange_rates er
               JOIN currencies base ON base.id = er.base_currency_id
               JOIN currencies target ON target.id = er.target_currency_id
               ORDER BY er.id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(DbExchangeRate::into_domain).collect())
    }

    async fn find_rate(
        &self,
        base_currency_id: CurrencyId,
        target_currency_id: CurrencyId,
    ) -> Result<Option<ExchangeRate>, StoreError> {
        let row: Option<DbExchangeRate> = sqlx::query_as(
            r#"SELECT er.id, er.rate,
                   base.id AS base_id,
                   base.code AS base_code,
                   base.full_name AS base_full_name,
                   base.sign AS base_sign,
                   target.id AS target_id,
                   target.code AS target_code,
                   target.full_name AS target_full_name,
                   target.sign AS target_sign
               FROM exchange_rates er
               JOIN currencies base ON base.id = er.base_currency_id
               JOIN currencies target ON target.id = er.target_currency_id
               WHERE er.base_currency_id = ? AND er.target_currency_id = ?"#,
        )
        .bind(base_currency_id.as_i64())
        .bind(target_currency_id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(row.map(DbExchangeRate::into_domain))
    }

    async fn create_rate(
        &self,
        base_currency_id: CurrencyId,
        target_currency_id: CurrencyId,
        rate: f64,
    ) -> Result<ExchangeRate, StoreError> {
        let result = sqlx::query(
            r#"INSERT INTO exchange_rates (base_currency_id, target_currency_id, rate)
               VALUES (?, ?, ?)"#,
        )
        .bind(base_currency_id.as_i64())
        .bind(target_currency_id.as_i64())
        .bind(rate)
        .execute(&self.pool)
        .await
        .map_err(map_insert_err)?;

        // Re-read through the join so the caller gets both currencies populated.
        let row: DbExchangeRate = sqlx::query_as(
            r#"SELECT er.id, er.rate,
                   base.id AS base_id,
                   base.code AS base_code,
                   base.full_name AS base_full_name,
                   base.sign AS base_sign,
                   target.id AS target_id,
                   target.code AS target_code,
                   target.full_name AS target_full_name,
                   target.sign AS target_sign
               FROM exchange_rates er
               JOIN currencies base ON base.id = er.base_currency_id
               JOIN currencies target ON target.id = er.target_currency_id
               WHERE er.id = ?"#,
        )
        .bind(result.last_insert_rowid())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(row.into_domain())
    }

    async fn update_rate(&self, id: RateId, rate: f64) -> Result<(), StoreError> {
        let result = sqlx::query(r#"UPDATE exchange_rates SET rate = ? WHERE id = ?"#)
            .bind(rate)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
