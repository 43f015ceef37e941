//! Exchange rate providers.
//!
//! Two adapters for the [`ExchangeRateProvider`] port:
//!
//! - [`FreeCurrencyClient`] issues one GET per lookup against the
//!   FreeCurrencyAPI `latest` endpoint and reads `data.<target>`.
//! - [`FixedRateProvider`] answers from a hardcoded USD-relative table for
//!   development and testing when no API key is configured.
//!
//! # Example
//! ```no_run
//! use conversion_types::{CurrencyCode, ExchangeRateProvider};
//! use exchange_rates::FreeCurrencyClient;
//!
//! # async fn run() -> Result<(), conversion_types::ProviderError> {
//! let client = FreeCurrencyClient::new(
//!     "https://api.freecurrencyapi.com/v1/latest",
//!     "YOUR_API_KEY",
//! )?;
//! let usd = CurrencyCode::parse("USD").unwrap();
//! let eur = CurrencyCode::parse("EUR").unwrap();
//! let quote = client.fetch_rate(&usd, &eur).await?;
//! println!("1 USD = {} EUR", quote.exchange_rate);
//! # Ok(())
//! # }
//! ```
//!
//! [`ExchangeRateProvider`]: conversion_types::ExchangeRateProvider

mod fixed;
mod freecurrency;

pub use fixed::FixedRateProvider;
pub use freecurrency::{DEFAULT_BASE_URL, FreeCurrencyClient};
