//! Rate provider selection.

use async_trait::async_trait;
use conversion_types::{CurrencyCode, ExchangeRateProvider, ProviderError, RateQuote};
use exchange_rates::{FixedRateProvider, FreeCurrencyClient};

use crate::config::RatesConfig;

/// The provider chosen at startup.
pub enum RateSource {
    Live(FreeCurrencyClient),
    Fixed(FixedRateProvider),
}

impl RateSource {
    /// Uses the live API when a key is configured, the hardcoded table otherwise.
    pub fn from_config(config: &RatesConfig) -> anyhow::Result<Self> {
        match &config.api_key {
            Some(key) => {
                let client = FreeCurrencyClient::new(config.api_url.as_str(), key.as_str())?;
                tracing::info!("Using exchange rate provider at {}", client.base_url());
                Ok(Self::Live(client))
            }
            None => {
                let fixed = FixedRateProvider::new();
                tracing::warn!(
                    "FREECURRENCY_APIKEY not set, using hardcoded rates for {:?}",
                    fixed.supported_codes()
                );
                Ok(Self::Fixed(fixed))
            }
        }
    }
}

#[async_trait]
impl ExchangeRateProvider for RateSource {
    async fn fetch_rate(
        &self,
        source: &CurrencyCode,
        target: &CurrencyCode,
    ) -> Result<RateQuote, ProviderError> {
        match self {
            Self::Live(client) => client.fetch_rate(source, target).await,
            Self::Fixed(fixed) => fixed.fetch_rate(source, target).await,
        }
    }
}
