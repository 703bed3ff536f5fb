//! # Exchange Hex
//!
//! Application service layer and HTTP adapter for the currency exchange
//! service.
//!
//! ## Architecture
//!
//! - `service` - Application service (rate resolution and admin operations)
//! - `inbound` - HTTP adapter (Axum server)
//!
//! The service is generic over `S: ExchangeStore`, allowing different store
//! implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;

mod messages;


pub use service::ExchangeService;
