//! Client example demonstrating full exchange flows against a running server.
//!
//! Run with: cargo run -p exchange-app --example client_example

use exchange_client::ExchangeClient;
use exchange_hex::{ExchangeService, inbound::HttpServer};
use exchange_repo::build_store;
use exchange_types::Currency;
use std::net::SocketAddr;
use tempfile::tempdir;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Find an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let port = addr.port();
    drop(listener);

    // Use a temp file-backed SQLite DB
    let tmp = tempdir()?;
    let db_path = tmp.path().join("exchange.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    println!("🚀 Starting server on port {port}...");
    println!("   Database: {db_url}");

    // Build store (handles connection and migration)
    let store = build_store(&db_url).await?;

    // Start server in background
    let service = ExchangeService::new(store);
    let server = HttpServer::new(service);
    let router = server.router();

    let server_addr = format!("127.0.0.1:{port}");
    tokio::spawn(async move {
        axum::serve(
            TcpListener::bind(&server_addr).await.unwrap(),
            router.into_make_service(),
        )
        .await
        .unwrap();
    });

    // Wait for server to start
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;

    // Create client
    let base_url = format!("http://127.0.0.1:{port}");
    let client = ExchangeClient::new(&base_url);

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: Full exchange flow
    // ─────────────────────────────────────────────────────────────────────────

    // Health check
    let healthy = client.health().await?;
    println!("✅ Server healthy: {healthy}");

    // Register currencies
    let usd = client.create_currency("USD", "US Dollar", "$").await?;
    println!("✅ Created currency: {} (id={})", usd.code, usd.id);

    let eur = client.create_currency("EUR", "Euro", "€").await?;
    println!("✅ Created currency: {} (id={})", eur.code, eur.id);

    let gbp = client.create_currency("GBP", "Pound Sterling", "£").await?;
    println!("✅ Created currency: {} (id={})", gbp.code, gbp.id);

    // Register rates against the dollar
    let rate = client.create_rate("USD", "EUR", 0.92).await?;
    println!(
        "✅ Created rate {} -> {}: {}",
        rate.base_currency.code, rate.target_currency.code, rate.rate
    );

    let rate = client.create_rate("USD", "GBP", 0.79).await?;
    println!(
        "✅ Created rate {} -> {}: {}",
        rate.base_currency.code, rate.target_currency.code, rate.rate
    );

    // Direct conversion uses the stored USD -> EUR record
    let conversion = client.convert("USD", "EUR", 100.0).await?;
    println!(
        "✅ Converted 100 USD -> {} EUR (rate {})",
        conversion.converted_amount, conversion.rate
    );

    // Reverse conversion divides by the same record
    let conversion = client.convert("EUR", "USD", 50.0).await?;
    println!(
        "✅ Converted 50 EUR -> {} USD (rate {})",
        conversion.converted_amount, conversion.rate
    );

    // Cross conversion goes through the reference currency
    let conversion = client.convert("EUR", "GBP", 25.0).await?;
    println!(
        "✅ Converted 25 EUR -> {} GBP (rate {})",
        conversion.converted_amount, conversion.rate
    );

    // Correct a rate
    let updated = client.update_rate("USD", "EUR", 0.94).await?;
    println!("✅ Updated rate USD -> EUR: {}", updated.rate);

    // List all currencies
    let currencies: Vec<Currency> = client.list_currencies().await?;
    println!("\n📋 All currencies:");
    for currency in currencies {
        println!(
            "   - {} {} ({})",
            currency.sign, currency.code, currency.full_name
        );
    }

    // List all rates
    let rates = client.list_rates().await?;
    println!("\n📋 All exchange rates:");
    for rate in rates {
        println!(
            "   - {} -> {}: {}",
            rate.base_currency.code, rate.target_currency.code, rate.rate
        );
    }

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
