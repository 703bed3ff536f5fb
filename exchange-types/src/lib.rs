//! # Exchange Types
//!
//! Domain types and port traits for the currency exchange service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Currency, ExchangeRate, Conversion)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Store and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Conversion, Currency, CurrencyId, ExchangeRate, RateId, RateStrategy, convert_amount,
    round_amount,
};
pub use dto::*;
pub use error::{AppError, StoreError};
pub use ports::ExchangeStore;
