//! Conversion record domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::currency::CurrencyCode;

/// Unique identifier for a ConversionRecord, assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversionId(Uuid);

impl ConversionId {
    /// Creates a new random ConversionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a ConversionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ConversionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ConversionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ConversionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A conversion that has been priced but not yet stored.
///
/// `converted_amount` is computed here exactly once; there is no way to set
/// it independently of `amount` and `exchange_rate`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewConversion {
    source_currency: CurrencyCode,
    target_currency: CurrencyCode,
    amount: f64,
    exchange_rate: f64,
    converted_amount: f64,
}

impl NewConversion {
    pub fn new(
        source_currency: CurrencyCode,
        target_currency: CurrencyCode,
        amount: f64,
        exchange_rate: f64,
    ) -> Self {
        Self {
            source_currency,
            target_currency,
            amount,
            exchange_rate,
            converted_amount: amount * exchange_rate,
        }
    }

    pub fn source_currency(&self) -> &CurrencyCode {
        &self.source_currency
    }

    pub fn target_currency(&self) -> &CurrencyCode {
        &self.target_currency
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn exchange_rate(&self) -> f64 {
        self.exchange_rate
    }

    pub fn converted_amount(&self) -> f64 {
        self.converted_amount
    }

    /// Attaches the store-assigned id.
    pub fn into_record(self, id: ConversionId) -> ConversionRecord {
        ConversionRecord {
            id,
            source_currency: self.source_currency,
            target_currency: self.target_currency,
            amount: self.amount,
            exchange_rate: self.exchange_rate,
            converted_amount: self.converted_amount,
        }
    }
}

/// A persisted currency conversion.
///
/// Records are immutable once created - the service offers create, read
/// and delete only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRecord {
    /// Store-assigned identifier
    #[schema(value_type = String, example = "3f2b8c1e-4f7a-4d2b-9a77-0c1d2e3f4a5b")]
    id: ConversionId,
    /// Currency converted from
    #[schema(value_type = String, example = "USD")]
    source_currency: CurrencyCode,
    /// Currency converted to
    #[schema(value_type = String, example = "EUR")]
    target_currency: CurrencyCode,
    /// Quantity of the source currency
    #[schema(example = 1.0)]
    amount: f64,
    /// Units of target currency per unit of source currency
    #[schema(example = 0.92)]
    exchange_rate: f64,
    /// `amount * exchangeRate`
    #[schema(example = 0.92)]
    converted_amount: f64,
}

impl ConversionRecord {
    /// Reconstructs a record from stored fields.
    pub fn from_parts(
        id: ConversionId,
        source_currency: CurrencyCode,
        target_currency: CurrencyCode,
        amount: f64,
        exchange_rate: f64,
        converted_amount: f64,
    ) -> Self {
        Self {
            id,
            source_currency,
            target_currency,
            amount,
            exchange_rate,
            converted_amount,
        }
    }

    pub fn id(&self) -> ConversionId {
        self.id
    }

    pub fn source_currency(&self) -> &CurrencyCode {
        &self.source_currency
    }

    pub fn target_currency(&self) -> &CurrencyCode {
        &self.target_currency
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn exchange_rate(&self) -> f64 {
        self.exchange_rate
    }

    pub fn converted_amount(&self) -> f64 {
        self.converted_amount
    }
}
