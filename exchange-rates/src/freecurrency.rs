//! FreeCurrencyAPI client.

use std::time::Duration;

use async_trait::async_trait;
use conversion_types::{CurrencyCode, ExchangeRateProvider, ProviderError, RateQuote};
use serde_json::Value;

/// Public `latest` endpoint of FreeCurrencyAPI.
pub const DEFAULT_BASE_URL: &str = "https://api.freecurrencyapi.com/v1/latest";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the FreeCurrencyAPI `latest` endpoint.
///
/// Request shape: `GET <base_url>?apikey=<key>&base_currency=<source>&currencies=<target>`,
/// response shape: `{ "data": { "<target>": <rate> } }`.
pub struct FreeCurrencyClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FreeCurrencyClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Extracts `data.<target>` from a response body.
fn parse_rate(
    body: &str,
    source: &CurrencyCode,
    target: &CurrencyCode,
) -> Result<f64, ProviderError> {
    let root: Value =
        serde_json::from_str(body).map_err(|e| ProviderError::InvalidJson(e.to_string()))?;

    root.get("data")
        .and_then(|data| data.get(target.as_str()))
        .and_then(Value::as_f64)
        .ok_or_else(|| ProviderError::RateNotFound {
            source_currency: source.clone(),
            target: target.clone(),
        })
}

#[async_trait]
impl ExchangeRateProvider for FreeCurrencyClient {
    #[tracing::instrument(skip_all, fields(source = %source, target = %target))]
    async fn fetch_rate(
        &self,
        source: &CurrencyCode,
        target: &CurrencyCode,
    ) -> Result<RateQuote, ProviderError> {
        // Errors are stripped of the URL so the api key never reaches logs.
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("base_currency", source.as_str()),
                ("currencies", target.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Rate provider rejected request");
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Request(e.without_url().to_string()))?;

        let rate = parse_rate(&body, source, target).inspect_err(|e| {
            tracing::warn!(error = %e, "Failed to parse rate provider response");
        })?;

        tracing::debug!(rate, "Fetched exchange rate");
        Ok(RateQuote::unit(source.clone(), target.clone(), rate))
    }
}
