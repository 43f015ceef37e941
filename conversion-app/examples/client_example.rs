//! Client example demonstrating the conversion flow against a running server.
//!
//! Run with: cargo run -p conversion-app --example client_example --no-default-features --features sqlite

use conversion_client::ConversionClient;
use conversion_hex::{ConversionService, inbound::HttpServer};
use conversion_repo::build_repo;
use exchange_rates::FixedRateProvider;
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Bind an available port and keep the listener for the server
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;

    // In-memory SQLite and hardcoded rates: no external services needed
    let repo = build_repo("sqlite::memory:").await?;
    let service = ConversionService::new(repo, FixedRateProvider::new());
    let router = HttpServer::new(service).router();

    println!("🚀 Starting server on {addr}...");
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router.into_make_service()).await {
            eprintln!("server error: {e}");
        }
    });

    let client = ConversionClient::new(format!("http://{addr}"));

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: full conversion flow
    // ─────────────────────────────────────────────────────────────────────────

    println!("✅ Server health: {}", client.health().await?);

    let usd_eur = client.create_conversion("USD", "EUR", None).await?;
    println!(
        "✅ Converted {} {} -> {} {} (rate {})",
        usd_eur.amount(),
        usd_eur.source_currency(),
        usd_eur.converted_amount(),
        usd_eur.target_currency(),
        usd_eur.exchange_rate()
    );

    let gbp_inr = client.create_conversion("gbp", "inr", Some(250.0)).await?;
    println!(
        "✅ Converted {} {} -> {:.2} {}",
        gbp_inr.amount(),
        gbp_inr.source_currency(),
        gbp_inr.converted_amount(),
        gbp_inr.target_currency()
    );

    // Validation failure is reported per field
    let invalid = client.create_conversion("", "EUR", Some(-5.0)).await;
    println!("✅ Rejected invalid request: {}", invalid.unwrap_err());

    let all = client.list_conversions().await?;
    println!("✅ Stored conversions: {}", all.len());

    let fetched = client.get_conversion(usd_eur.id()).await?;
    println!("✅ Fetched by id: {}", fetched.is_some());

    client.delete_conversion(usd_eur.id()).await?;
    client.delete_conversion(usd_eur.id()).await?;
    println!(
        "✅ Deleted twice, now present: {}",
        client.get_conversion(usd_eur.id()).await?.is_some()
    );

    println!("🎉 Done");
    Ok(())
}
