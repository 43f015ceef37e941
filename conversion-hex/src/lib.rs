//! # Conversion Hex
//!
//! Application service layer and HTTP adapter for the conversion service.
//!
//! ## Architecture
//!
//! - `service/` - Conversion workflow (validate, price, compute, store)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served at `/api-docs/openapi.json`
//!
//! The service is generic over `R: ConversionRepository` and
//! `P: ExchangeRateProvider`; both are constructed by the caller and
//! passed in explicitly.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::ConversionService;
