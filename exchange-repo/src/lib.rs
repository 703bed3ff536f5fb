//! # Exchange Repository
//!
//! Concrete store implementations (adapters) for the exchange service.
//! This crate provides database adapters that implement the `ExchangeStore` port.

#[cfg(not(feature = "sqlite"))]
compile_error!("Enable the `sqlite` feature to build this crate.");

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "sqlite")]
mod types;


#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

/// Build and initialize a store from a database URL.
///
/// This function:
/// 1. Connects to the database (creating the file if missing)
/// 2. Runs migrations to create tables
/// 3. Returns a ready-to-use store
///
/// # Examples
///
/// ```ignore
/// let store = build_store("sqlite://exchange.db").await?;
/// ```
#[cfg(feature = "sqlite")]
pub async fn build_store(database_url: &str) -> anyhow::Result<SqliteStore> {
    SqliteStore::new(database_url).await
}
