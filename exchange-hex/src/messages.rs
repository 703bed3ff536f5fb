//! Client-facing response messages.
//!
//! Fixed strings keep the HTTP surface stable for existing consumers; the
//! pair-route messages intentionally differ between the read and update
//! paths (see the handlers).

pub const SERVER_ERROR: &str = "Server error";

pub const CURRENCY_NOT_FOUND: &str = "Currency not found";
pub const CURRENCY_EXISTS: &str = "A currency with this code already exists";

pub const PAIR_EXISTS: &str = "A currency pair with this code already exists";
pub const PAIR_CURRENCIES_MISSING: &str = "One or both currencies of the pair do not exist";
pub const PAIR_CODES_MISSING: &str = "Currency pair codes are missing from the path";
pub const RATE_NOT_FOUND: &str = "Exchange rate for the pair not found";
pub const PAIR_NOT_FOUND: &str = "Currency pair not found";

/// Message for a required form field that was not supplied.
pub fn field_missing(field: &str) -> String {
    format!("Missing required field: {field}")
}

/// Message for a form field that failed validation.
pub fn field_invalid(field: &str) -> String {
    format!("Invalid value for field {field}")
}
