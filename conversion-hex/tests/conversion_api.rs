//! HTTP-level tests for the conversion endpoints.
//!
//! Drives the full router against an in-memory SQLite store and a mocked
//! FreeCurrencyAPI server.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use conversion_hex::{ConversionService, inbound::HttpServer};
use conversion_repo::SqliteRepo;
use exchange_rates::FreeCurrencyClient;
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to build a router whose provider points at `provider_url`.
async fn create_app(provider_url: &str) -> Router {
    let repo = SqliteRepo::new("sqlite::memory:").await.unwrap();
    let rates = FreeCurrencyClient::new(provider_url, "test-key").unwrap();
    HttpServer::new(ConversionService::new(repo, rates)).router()
}

/// Helper to start a provider mock quoting USD -> EUR at 0.92.
async fn usd_eur_provider() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("base_currency", "USD"))
        .and(query_param("currencies", "EUR"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":{"EUR":0.92}}"#))
        .mount(&server)
        .await;
    server
}

fn post_conversion(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/conversion")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

async fn list_len(app: &Router) -> usize {
    let response = app
        .clone()
        .oneshot(request(Method::GET, "/api/conversion"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await.as_array().unwrap().len()
}

#[tokio::test]
async fn test_create_conversion_returns_priced_record() {
    let provider = usd_eur_provider().await;
    let app = create_app(&provider.uri()).await;

    let response = app
        .clone()
        .oneshot(post_conversion(
            r#"{"sourceCurrency": "USD", "targetCurrency": "EUR"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_string());
    assert_eq!(json["sourceCurrency"], "USD");
    assert_eq!(json["targetCurrency"], "EUR");
    assert_eq!(json["amount"], 1.0);
    assert_eq!(json["exchangeRate"], 0.92);
    assert_eq!(json["convertedAmount"], 0.92);
}

#[tokio::test]
async fn test_get_after_create() {
    let provider = usd_eur_provider().await;
    let app = create_app(&provider.uri()).await;

    let created = body_json(
        app.clone()
            .oneshot(post_conversion(
                r#"{"sourceCurrency": "USD", "targetCurrency": "EUR"}"#,
            ))
            .await
            .unwrap(),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(request(Method::GET, &format!("/api/conversion/{}", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
    assert_eq!(list_len(&app).await, 1);
}

#[tokio::test]
async fn test_validation_failure_returns_field_messages() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":{"EUR":0.92}}"#))
        .expect(0)
        .mount(&provider)
        .await;
    let app = create_app(&provider.uri()).await;

    let response = app
        .clone()
        .oneshot(post_conversion(
            r#"{"sourceCurrency": "  ", "targetCurrency": "EUR", "amount": -1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"]["sourceCurrency"], "Choose Source Currency");
    assert_eq!(json["fields"]["amount"], "Amount must be greater than 0");
    assert!(json["fields"].get("targetCurrency").is_none());
    assert_eq!(list_len(&app).await, 0);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let provider = usd_eur_provider().await;
    let app = create_app(&provider.uri()).await;

    let response = app
        .oneshot(post_conversion(r#"{"sourceCurrency": "USD", "#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], 400);
}

#[tokio::test]
async fn test_provider_failure_persists_nothing() {
    let provider = usd_eur_provider().await;
    let repo = SqliteRepo::new("sqlite::memory:").await.unwrap();
    let pool = repo.pool().clone();
    let app = HttpServer::new(ConversionService::new(
        repo,
        FreeCurrencyClient::new(provider.uri(), "test-key").unwrap(),
    ))
    .router();

    // One good record first so the list is non-empty.
    app.clone()
        .oneshot(post_conversion(
            r#"{"sourceCurrency": "USD", "targetCurrency": "EUR"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(list_len(&app).await, 1);

    // Same store, but the provider address refuses connections.
    let unreachable = HttpServer::new(ConversionService::new(
        SqliteRepo::from_pool(pool),
        FreeCurrencyClient::new("http://127.0.0.1:9/v1/latest", "test-key").unwrap(),
    ))
    .router();
    let response = unreachable
        .clone()
        .oneshot(post_conversion(
            r#"{"sourceCurrency": "USD", "targetCurrency": "EUR"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .starts_with("Failed to fetch currency conversion data")
    );
    assert_eq!(list_len(&app).await, 1);
    assert_eq!(list_len(&unreachable).await, 1);
}

#[tokio::test]
async fn test_overflowing_amount_is_rejected_and_list_stays_readable() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("currencies", "INR"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":{"INR":83.12}}"#))
        .mount(&provider)
        .await;
    let app = create_app(&provider.uri()).await;

    let ok = app
        .clone()
        .oneshot(post_conversion(
            r#"{"sourceCurrency": "USD", "targetCurrency": "INR"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(post_conversion(
            r#"{"sourceCurrency": "USD", "targetCurrency": "INR", "amount": 1e308}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["fields"]["amount"],
        "Amount is too large to convert at the current rate"
    );
    assert_eq!(list_len(&app).await, 1);
}

#[tokio::test]
async fn test_missing_rate_is_server_error() {
    let provider = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":{}}"#))
        .mount(&provider)
        .await;
    let app = create_app(&provider.uri()).await;

    let response = app
        .clone()
        .oneshot(post_conversion(
            r#"{"sourceCurrency": "USD", "targetCurrency": "EUR"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(list_len(&app).await, 0);
}

#[tokio::test]
async fn test_get_unknown_id_is_empty_404() {
    let provider = usd_eur_provider().await;
    let app = create_app(&provider.uri()).await;

    for uri in [
        "/api/conversion/3f2b8c1e-4f7a-4d2b-9a77-0c1d2e3f4a5b",
        "/api/conversion/not-an-id",
    ] {
        let response = app.clone().oneshot(request(Method::GET, uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_bytes(response).await.is_empty());
    }
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let provider = usd_eur_provider().await;
    let app = create_app(&provider.uri()).await;

    let created = body_json(
        app.clone()
            .oneshot(post_conversion(
                r#"{"sourceCurrency": "USD", "targetCurrency": "EUR"}"#,
            ))
            .await
            .unwrap(),
    )
    .await;
    let uri = format!("/api/conversion/{}", created["id"].as_str().unwrap());

    let first = app.clone().oneshot(request(Method::DELETE, &uri)).await.unwrap();
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = app.clone().oneshot(request(Method::DELETE, &uri)).await.unwrap();
    assert_eq!(second.status(), StatusCode::NO_CONTENT);

    let get = app.clone().oneshot(request(Method::GET, &uri)).await.unwrap();
    assert_eq!(get.status(), StatusCode::NOT_FOUND);
    assert_eq!(list_len(&app).await, 0);
}

#[tokio::test]
async fn test_health_and_openapi() {
    let provider = usd_eur_provider().await;
    let app = create_app(&provider.uri()).await;

    let health = app.clone().oneshot(request(Method::GET, "/health")).await.unwrap();
    assert_eq!(health.status(), StatusCode::OK);
    assert_eq!(body_json(health).await["status"], "healthy");

    let docs = app
        .oneshot(request(Method::GET, "/api-docs/openapi.json"))
        .await
        .unwrap();
    assert_eq!(docs.status(), StatusCode::OK);
    assert!(body_json(docs).await["paths"]["/api/conversion"].is_object());
}
