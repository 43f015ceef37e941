//! Hardcoded exchange rates for development and testing.

use async_trait::async_trait;
use conversion_types::{CurrencyCode, ExchangeRateProvider, ProviderError, RateQuote};

/// Defines the USD value of one unit of each supported currency.
///
/// # Syntax
/// ```ignore
/// define_fixed_rates! {
///     CODE => to_usd_rate,
/// }
/// ```
macro_rules! define_fixed_rates {
    ($($code:ident => $to_usd:expr),* $(,)?) => {
        fn base_to_usd_rate(code: &str) -> Option<f64> {
            match code {
                $(stringify!($code) => Some($to_usd),)*
                _ => None,
            }
        }

        /// Currency codes the fixed table can price.
        pub const SUPPORTED_CODES: &[&str] = &[$(stringify!($code)),*];
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS - Add new currencies here!
// ─────────────────────────────────────────────────────────────────────────────

define_fixed_rates! {
    USD => 1.0,
    EUR => 1.087,
    GBP => 1.266,
    INR => 0.01203,
}

/// Provider answering from the hardcoded table above.
///
/// Rates are cross rates through USD: `from_usd / to_usd`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRateProvider;

impl FixedRateProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn supported_codes(&self) -> &'static [&'static str] {
        SUPPORTED_CODES
    }

    fn rate(source: &CurrencyCode, target: &CurrencyCode) -> Option<f64> {
        if source == target {
            return Some(1.0);
        }
        let from = base_to_usd_rate(source.as_str())?;
        let to = base_to_usd_rate(target.as_str())?;
        Some(from / to)
    }
}

#[async_trait]
impl ExchangeRateProvider for FixedRateProvider {
    async fn fetch_rate(
        &self,
        source: &CurrencyCode,
        target: &CurrencyCode,
    ) -> Result<RateQuote, ProviderError> {
        let rate = Self::rate(source, target).ok_or_else(|| ProviderError::RateNotFound {
            source_currency: source.clone(),
            target: target.clone(),
        })?;
        Ok(RateQuote::unit(source.clone(), target.clone(), rate))
    }
}
