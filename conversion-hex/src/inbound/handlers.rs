//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use conversion_types::{
    AppError, ConversionId, ConversionRepository, CreateConversionRequest, ExchangeRateProvider,
};

use crate::ConversionService;

/// Application state shared across handlers.
pub struct AppState<R: ConversionRepository, P: ExchangeRateProvider> {
    pub service: ConversionService<R, P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::Validation(errors) => {
                let fields: serde_json::Map<String, serde_json::Value> = errors
                    .violations
                    .iter()
                    .map(|v| (v.field.to_string(), v.message.into()))
                    .collect();

                let body = serde_json::json!({
                    "error": "Validation failed",
                    "code": StatusCode::BAD_REQUEST.as_u16(),
                    "fields": fields,
                });
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Provider(e) => {
                tracing::error!(error = %e, "Rate provider failure");
                (
                    StatusCode::BAD_GATEWAY,
                    format!("Failed to fetch currency conversion data: {}", e),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Convert a currency pair and record the result.
#[tracing::instrument(skip_all)]
pub async fn create_conversion<R: ConversionRepository, P: ExchangeRateProvider>(
    State(state): State<Arc<AppState<R, P>>>,
    payload: Result<Json<CreateConversionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let record = state.service.convert_and_save(req).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// List all conversions.
#[tracing::instrument(skip(state))]
pub async fn list_conversions<R: ConversionRepository, P: ExchangeRateProvider>(
    State(state): State<Arc<AppState<R, P>>>,
) -> Result<impl IntoResponse, ApiError> {
    let records = state.service.list_conversions().await?;
    Ok(Json(records))
}

/// Get conversion by ID. Unknown or malformed ids are a bodiless 404.
#[tracing::instrument(skip(state), fields(conversion_id = %id))]
pub async fn get_conversion<R: ConversionRepository, P: ExchangeRateProvider>(
    State(state): State<Arc<AppState<R, P>>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let Ok(conversion_id) = id.parse::<ConversionId>() else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    match state.service.get_conversion(conversion_id).await? {
        Some(record) => Ok(Json(record).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Delete conversion by ID. Always 204 on success, whether or not it existed.
#[tracing::instrument(skip(state), fields(conversion_id = %id))]
pub async fn delete_conversion<R: ConversionRepository, P: ExchangeRateProvider>(
    State(state): State<Arc<AppState<R, P>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    // A malformed id cannot name a stored record, so there is nothing to delete.
    if let Ok(conversion_id) = id.parse::<ConversionId>() {
        state.service.delete_conversion(conversion_id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_body() {
        let errors = CreateConversionRequest::default().validate().unwrap_err();
        let response = ApiError(AppError::Validation(errors)).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["code"], 400);
        assert_eq!(json["fields"]["sourceCurrency"], "Choose Source Currency");
        assert_eq!(json["fields"]["targetCurrency"], "Choose Target Currency");
    }

    #[tokio::test]
    async fn test_provider_error_is_bad_gateway() {
        let err = conversion_types::ProviderError::Status(503);
        let response = ApiError(AppError::Provider(err)).into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = body_json(response).await;
        assert_eq!(json["code"], 502);
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let err = AppError::Internal("Database error: no such table: conversion".into());
        let response = ApiError(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Internal server error");
        assert_eq!(json["code"], 500);
    }
}
