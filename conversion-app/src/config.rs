//! Configuration loading from environment.

use std::env;

use exchange_rates::DEFAULT_BASE_URL;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub rates: RatesConfig,
}

/// Exchange rate provider settings.
pub struct RatesConfig {
    /// `None` selects the hardcoded development rates.
    pub api_key: Option<String>,
    pub api_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let api_key = env::var("FREECURRENCY_APIKEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let api_url =
            env::var("FREECURRENCY_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            port,
            database_url,
            rates: RatesConfig { api_key, api_url },
        })
    }
}
