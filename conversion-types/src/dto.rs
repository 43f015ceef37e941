//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to convert a currency pair and record the result.
///
/// Every field is optional on the wire so that missing values are reported
/// by validation, keyed by field, instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversionRequest {
    /// ISO 4217 code of the currency to convert from
    #[schema(example = "USD")]
    #[serde(default)]
    pub source_currency: Option<String>,
    /// ISO 4217 code of the currency to convert to
    #[schema(example = "EUR")]
    #[serde(default)]
    pub target_currency: Option<String>,
    /// Amount to convert. Defaults to 1.0.
    #[schema(example = 1.0)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl CreateConversionRequest {
    pub fn new(source_currency: impl Into<String>, target_currency: impl Into<String>) -> Self {
        Self {
            source_currency: Some(source_currency.into()),
            target_currency: Some(target_currency.into()),
            amount: None,
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }
}
