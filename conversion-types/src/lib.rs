//! # Conversion Types
//!
//! Domain types and port traits for the currency conversion service.
//! This crate has ZERO external IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, ConversionRecord)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `validation/` - Request validation returning every violated rule
//! - `error/` - Repository and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;
pub mod validation;

// Re-export commonly used types
pub use domain::{ConversionId, ConversionRecord, CurrencyCode, NewConversion};
pub use dto::*;
pub use error::{AppError, RepoError};
pub use ports::{ConversionRepository, ExchangeRateProvider, ProviderError, RateQuote};
pub use validation::{FieldViolation, ValidConversionRequest, ValidationErrors};
