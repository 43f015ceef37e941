//! Domain models for the conversion service.

pub mod conversion;
pub mod currency;

pub use conversion::{ConversionId, ConversionRecord, NewConversion};
pub use currency::CurrencyCode;
