//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use axum::{Json, response::IntoResponse};
use conversion_types::{ConversionRecord, CreateConversionRequest};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Convert a currency pair and record the result
#[utoipa::path(
    post,
    path = "/api/conversion",
    tag = "conversions",
    request_body = CreateConversionRequest,
    responses(
        (status = 201, description = "Conversion recorded", body = ConversionRecord),
        (status = 400, description = "Validation failed", body = inline(serde_json::Value),
            example = json!({
                "error": "Validation failed",
                "code": 400,
                "fields": {"sourceCurrency": "Choose Source Currency"}
            })),
        (status = 502, description = "Exchange rate lookup failed")
    )
)]
async fn create_conversion() {}

/// List all conversions
#[utoipa::path(
    get,
    path = "/api/conversion",
    tag = "conversions",
    responses(
        (status = 200, description = "All recorded conversions", body = Vec<ConversionRecord>)
    )
)]
async fn list_conversions() {}

/// Get a conversion by ID
#[utoipa::path(
    get,
    path = "/api/conversion/{id}",
    tag = "conversions",
    params(
        ("id" = String, Path, description = "Conversion ID")
    ),
    responses(
        (status = 200, description = "Conversion details", body = ConversionRecord),
        (status = 404, description = "Conversion not found (empty body)")
    )
)]
async fn get_conversion() {}

/// Delete a conversion by ID
#[utoipa::path(
    delete,
    path = "/api/conversion/{id}",
    tag = "conversions",
    params(
        ("id" = String, Path, description = "Conversion ID")
    ),
    responses(
        (status = 204, description = "Conversion deleted, or did not exist")
    )
)]
async fn delete_conversion() {}

/// OpenAPI documentation for the Conversion API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currency Conversion Service API",
        version = "1.0.0",
        description = "Records currency conversions priced against a live exchange-rate provider.",
        license(name = "MIT"),
    ),
    paths(
        health,
        create_conversion,
        list_conversions,
        get_conversion,
        delete_conversion,
    ),
    components(schemas(CreateConversionRequest, ConversionRecord)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "conversions", description = "Create, read and delete conversion records"),
    )
)]
pub struct ApiDoc;

/// Serves the generated OpenAPI document as JSON.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
