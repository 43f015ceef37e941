//! Conversion Application Service
//!
//! Orchestrates the rate provider and repository ports.
//! Contains NO infrastructure logic - pure business orchestration.

use conversion_types::{
    AppError, ConversionId, ConversionRecord, ConversionRepository, CreateConversionRequest,
    ExchangeRateProvider, NewConversion, validation::ensure_convertible,
};

/// Application service for currency conversions.
///
/// Generic over the repository and rate provider - both adapters are
/// injected at construction time.
pub struct ConversionService<R: ConversionRepository, P: ExchangeRateProvider> {
    repo: R,
    rates: P,
}

impl<R: ConversionRepository, P: ExchangeRateProvider> ConversionService<R, P> {
    /// Creates a new conversion service.
    pub fn new(repo: R, rates: P) -> Self {
        Self { repo, rates }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Returns a reference to the underlying rate provider.
    pub fn rates(&self) -> &P {
        &self.rates
    }

    /// Prices a currency pair and stores the result.
    ///
    /// Steps run strictly in order and any failure aborts the whole call:
    /// 1. validate the request (no network call on failure)
    /// 2. fetch the rate (errors propagate unchanged, no retry)
    /// 3. compute `convertedAmount = amount * exchangeRate`, rejecting an
    ///    amount whose product overflows
    /// 4. insert and return the stored record
    pub async fn convert_and_save(
        &self,
        req: CreateConversionRequest,
    ) -> Result<ConversionRecord, AppError> {
        let req = req.validate()?;

        let quote = self
            .rates
            .fetch_rate(&req.source_currency, &req.target_currency)
            .await
            .inspect_err(|e| {
                tracing::warn!(
                    source = %req.source_currency,
                    target = %req.target_currency,
                    error = %e,
                    "Exchange rate lookup failed"
                );
            })?;

        let amount = req.amount.unwrap_or(quote.amount);
        ensure_convertible(amount, quote.exchange_rate)?;
        let conversion = NewConversion::new(
            req.source_currency,
            req.target_currency,
            amount,
            quote.exchange_rate,
        );

        let record = self.repo.insert(conversion).await?;
        tracing::info!(
            id = %record.id(),
            source = %record.source_currency(),
            target = %record.target_currency(),
            rate = record.exchange_rate(),
            "Conversion recorded"
        );
        Ok(record)
    }

    /// Lists all stored conversions.
    pub async fn list_conversions(&self) -> Result<Vec<ConversionRecord>, AppError> {
        self.repo.find_all().await.map_err(Into::into)
    }

    /// Gets a conversion by ID. A missing record is `Ok(None)`.
    pub async fn get_conversion(
        &self,
        id: ConversionId,
    ) -> Result<Option<ConversionRecord>, AppError> {
        self.repo.find_by_id(id).await.map_err(Into::into)
    }

    /// Deletes a conversion by ID. Unknown ids are not an error.
    pub async fn delete_conversion(&self, id: ConversionId) -> Result<(), AppError> {
        self.repo.delete_by_id(id).await.map_err(Into::into)
    }
}
