//! # Conversion Client SDK
//!
//! A typed Rust client for the Conversion API.

use conversion_types::{ConversionId, ConversionRecord, CreateConversionRequest};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Conversion API client.
pub struct ConversionClient {
    base_url: String,
    http: Client,
}

impl ConversionClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Converts a currency pair and records the result.
    pub async fn create_conversion(
        &self,
        source_currency: &str,
        target_currency: &str,
        amount: Option<f64>,
    ) -> Result<ConversionRecord, ClientError> {
        let req = CreateConversionRequest {
            source_currency: Some(source_currency.to_string()),
            target_currency: Some(target_currency.to_string()),
            amount,
        };
        let resp = self
            .http
            .post(self.url("/api/conversion"))
            .json(&req)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Lists all recorded conversions.
    pub async fn list_conversions(&self) -> Result<Vec<ConversionRecord>, ClientError> {
        let resp = self.http.get(self.url("/api/conversion")).send().await?;
        self.handle_response(resp).await
    }

    /// Gets a conversion by ID. Returns `None` on 404.
    pub async fn get_conversion(
        &self,
        id: ConversionId,
    ) -> Result<Option<ConversionRecord>, ClientError> {
        let resp = self
            .http
            .get(self.url(&format!("/api/conversion/{}", id)))
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        self.handle_response(resp).await.map(Some)
    }

    /// Deletes a conversion by ID.
    pub async fn delete_conversion(&self, id: ConversionId) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/conversion/{}", id)))
            .send()
            .await?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::api_error(resp).await)
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        if resp.status().is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(Self::api_error(resp).await)
        }
    }

    async fn api_error(resp: reqwest::Response) -> ClientError {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                let error = v.get("error")?.as_str()?.to_string();
                match v.get("fields").and_then(|f| f.as_object()) {
                    Some(fields) if !fields.is_empty() => {
                        let details: Vec<String> = fields
                            .iter()
                            .map(|(k, v)| format!("{}: {}", k, v.as_str().unwrap_or_default()))
                            .collect();
                        Some(format!("{} ({})", error, details.join(", ")))
                    }
                    _ => Some(error),
                }
            })
            .unwrap_or(body);
        ClientError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
