//! Explicit request validation.
//!
//! Validation collects every violated rule rather than stopping at the first,
//! so a single 400 response can report all bad fields.

use crate::domain::CurrencyCode;
use crate::dto::CreateConversionRequest;

pub const SOURCE_CURRENCY_REQUIRED: &str = "Choose Source Currency";
pub const TARGET_CURRENCY_REQUIRED: &str = "Choose Target Currency";
pub const AMOUNT_NOT_POSITIVE: &str = "Amount must be greater than 0";
pub const AMOUNT_TOO_LARGE: &str = "Amount is too large to convert at the current rate";

/// A single violated constraint, keyed by the wire field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

/// All constraint violations found in a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation failed: {}", summary(.violations))]
pub struct ValidationErrors {
    pub violations: Vec<FieldViolation>,
}

fn summary(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    /// A single violation on one field.
    pub fn single(field: &'static str, message: &'static str) -> Self {
        Self {
            violations: vec![FieldViolation { field, message }],
        }
    }

    /// Returns the message for a field, if that field was rejected.
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.violations
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.message)
    }
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidConversionRequest {
    pub source_currency: CurrencyCode,
    pub target_currency: CurrencyCode,
    pub amount: Option<f64>,
}

impl CreateConversionRequest {
    /// Checks currency codes are present and non-blank and that a supplied
    /// amount is a finite positive number.
    pub fn validate(&self) -> Result<ValidConversionRequest, ValidationErrors> {
        let mut violations = Vec::new();

        let source = self.source_currency.as_deref().and_then(CurrencyCode::parse);
        if source.is_none() {
            violations.push(FieldViolation {
                field: "sourceCurrency",
                message: SOURCE_CURRENCY_REQUIRED,
            });
        }

        let target = self.target_currency.as_deref().and_then(CurrencyCode::parse);
        if target.is_none() {
            violations.push(FieldViolation {
                field: "targetCurrency",
                message: TARGET_CURRENCY_REQUIRED,
            });
        }

        if let Some(amount) = self.amount {
            if !amount.is_finite() || amount <= 0.0 {
                violations.push(FieldViolation {
                    field: "amount",
                    message: AMOUNT_NOT_POSITIVE,
                });
            }
        }

        match (source, target) {
            (Some(source_currency), Some(target_currency)) if violations.is_empty() => {
                Ok(ValidConversionRequest {
                    source_currency,
                    target_currency,
                    amount: self.amount,
                })
            }
            _ => Err(ValidationErrors { violations }),
        }
    }
}

/// Rejects an amount whose converted value would not be a finite number.
///
/// Runs once the rate is known; a non-finite product cannot be stored or
/// serialized.
pub fn ensure_convertible(amount: f64, exchange_rate: f64) -> Result<(), ValidationErrors> {
    if (amount * exchange_rate).is_finite() {
        Ok(())
    } else {
        Err(ValidationErrors::single("amount", AMOUNT_TOO_LARGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let valid = CreateConversionRequest::new("usd", "EUR").validate().unwrap();
        assert_eq!(valid.source_currency.as_str(), "USD");
        assert_eq!(valid.target_currency.as_str(), "EUR");
        assert_eq!(valid.amount, None);
    }

    #[test]
    fn test_blank_currencies_reported_together() {
        let err = CreateConversionRequest::new(" ", "").validate().unwrap_err();
        assert_eq!(err.violations.len(), 2);
        assert_eq!(err.message_for("sourceCurrency"), Some(SOURCE_CURRENCY_REQUIRED));
        assert_eq!(err.message_for("targetCurrency"), Some(TARGET_CURRENCY_REQUIRED));
    }

    #[test]
    fn test_missing_currency() {
        let req = CreateConversionRequest {
            source_currency: Some("USD".into()),
            ..Default::default()
        };
        let err = req.validate().unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.message_for("targetCurrency"), Some(TARGET_CURRENCY_REQUIRED));
    }

    #[test]
    fn test_non_positive_amount() {
        for amount in [0.0, -3.0, f64::NAN] {
            let err = CreateConversionRequest::new("USD", "EUR")
                .with_amount(amount)
                .validate()
                .unwrap_err();
            assert_eq!(err.message_for("amount"), Some(AMOUNT_NOT_POSITIVE));
        }
    }

    #[test]
    fn test_overflowing_product_rejected() {
        assert!(ensure_convertible(1234.56, 83.12).is_ok());
        assert!(ensure_convertible(f64::MAX, 1.0).is_ok());

        let err = ensure_convertible(1e308, 83.12).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.message_for("amount"), Some(AMOUNT_TOO_LARGE));
    }

    #[test]
    fn test_display_lists_fields() {
        let err = CreateConversionRequest::default().validate().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("sourceCurrency"));
        assert!(msg.contains("targetCurrency"));
    }
}
