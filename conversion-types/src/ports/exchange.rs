//! Exchange rate provider port.
//!
//! This trait defines the interface for exchange rate services.
//! Implementations can be HTTP clients, fixed-rate tables, test stubs, etc.

use crate::domain::CurrencyCode;

/// Base amount a quote is priced for.
pub const DEFAULT_AMOUNT: f64 = 1.0;

/// Error type for exchange rate lookups.
///
/// Callers treat every variant the same way: the lookup failed and the
/// conversion is aborted.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Rate provider request failed: {0}")]
    Request(String),

    #[error("Rate provider returned HTTP {0}")]
    Status(u16),

    #[error("Rate provider returned invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Currency rate not found for {target} (base {source_currency})")]
    RateNotFound {
        source_currency: CurrencyCode,
        target: CurrencyCode,
    },
}

/// A priced quote for one unit of the source currency.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    pub source_currency: CurrencyCode,
    pub target_currency: CurrencyCode,
    pub amount: f64,
    pub exchange_rate: f64,
    pub converted_amount: f64,
}

impl RateQuote {
    /// Builds a quote for the default base amount of 1.0.
    pub fn unit(source_currency: CurrencyCode, target_currency: CurrencyCode, rate: f64) -> Self {
        Self {
            source_currency,
            target_currency,
            amount: DEFAULT_AMOUNT,
            exchange_rate: rate,
            converted_amount: DEFAULT_AMOUNT * rate,
        }
    }
}

/// Port trait for exchange rate providers.
#[async_trait::async_trait]
pub trait ExchangeRateProvider: Send + Sync + 'static {
    /// Fetches the current rate from `source` to `target`.
    /// One call is one lookup; implementations do not cache or retry.
    async fn fetch_rate(
        &self,
        source: &CurrencyCode,
        target: &CurrencyCode,
    ) -> Result<RateQuote, ProviderError>;
}
