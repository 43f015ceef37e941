//! Persisted document shape and row mapping shared by both backends.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

use conversion_types::{ConversionId, ConversionRecord, CurrencyCode, NewConversion, RepoError};

/// Name of the collection (table) holding conversion documents.
pub const COLLECTION: &str = "conversion";

/// Body of a stored conversion. The id lives in its own column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionDocument {
    pub source_currency: String,
    pub target_currency: String,
    pub amount: f64,
    pub exchange_rate: f64,
    pub converted_amount: f64,
}

impl From<&NewConversion> for ConversionDocument {
    fn from(conversion: &NewConversion) -> Self {
        Self {
            source_currency: conversion.source_currency().to_string(),
            target_currency: conversion.target_currency().to_string(),
            amount: conversion.amount(),
            exchange_rate: conversion.exchange_rate(),
            converted_amount: conversion.converted_amount(),
        }
    }
}

fn parse_code(raw: &str, field: &str) -> Result<CurrencyCode, RepoError> {
    CurrencyCode::parse(raw)
        .ok_or_else(|| RepoError::Serialization(format!("Stored document has blank {field}")))
}

/// Conversion row from database.
#[derive(FromRow)]
pub struct DbConversion {
    pub id: String,
    pub document: Json<ConversionDocument>,
}

impl DbConversion {
    pub fn into_domain(self) -> Result<ConversionRecord, RepoError> {
        let id: ConversionId = self
            .id
            .parse()
            .map_err(|e| RepoError::Serialization(format!("Invalid stored id {}: {}", self.id, e)))?;
        let doc = self.document.0;

        Ok(ConversionRecord::from_parts(
            id,
            parse_code(&doc.source_currency, "sourceCurrency")?,
            parse_code(&doc.target_currency, "targetCurrency")?,
            doc.amount,
            doc.exchange_rate,
            doc.converted_amount,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_wire_names() {
        let conversion = NewConversion::new(
            CurrencyCode::parse("USD").unwrap(),
            CurrencyCode::parse("EUR").unwrap(),
            1.0,
            0.92,
        );
        let json = serde_json::to_value(ConversionDocument::from(&conversion)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "sourceCurrency": "USD",
                "targetCurrency": "EUR",
                "amount": 1.0,
                "exchangeRate": 0.92,
                "convertedAmount": 0.92,
            })
        );
    }

    #[test]
    fn test_row_with_bad_id_is_rejected() {
        let row = DbConversion {
            id: "nope".into(),
            document: Json(ConversionDocument {
                source_currency: "USD".into(),
                target_currency: "EUR".into(),
                amount: 1.0,
                exchange_rate: 0.92,
                converted_amount: 0.92,
            }),
        };

        assert!(matches!(row.into_domain(), Err(RepoError::Serialization(_))));
    }
}
