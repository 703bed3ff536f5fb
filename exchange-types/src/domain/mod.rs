//! Domain models for the exchange service.

pub mod conversion;
pub mod currency;
pub mod rate;

pub use conversion::{Conversion, RateStrategy, convert_amount, round_amount};
pub use currency::{Currency, CurrencyId};
pub use rate::{ExchangeRate, RateId};
