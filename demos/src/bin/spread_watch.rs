//! Demo 2: Spread Watch
//!
//! Polls the order book of one market and prints the top of book.
//!
//! Run: cargo run --bin spread_watch -- BTC-ETH

use bittrex_rest::{BittrexRestClient, ClientConfig, Credentials, OrderBookType};
use colored::*;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const POLL_INTERVAL: Duration = Duration::from_secs(5);
const DEPTH: u32 = 5;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let market = std::env::args().nth(1).unwrap_or_else(|| "BTC-LTC".to_string());

    println!("{}", "═".repeat(60).cyan());
    println!("{}", format!("  SPREAD WATCH: {market}").cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let credentials = Credentials::from_env().or_else(|_| Credentials::new("public", "public"))?;
    let client = BittrexRestClient::with_config(credentials, ClientConfig::from_env()?)?;

    let mut interval = tokio::time::interval(POLL_INTERVAL);
    loop {
        tokio::select! {
            _ = interval.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                println!("\n{} Stopped", "✓".green());
                return Ok(());
            }
        }

        match client.order_book(&market, OrderBookType::Both, DEPTH).await {
            Ok(book) => {
                let bid = book.best_bid().map(|p| p.to_string()).unwrap_or_else(|| "-".into());
                let ask = book.best_ask().map(|p| p.to_string()).unwrap_or_else(|| "-".into());
                let spread = book.spread().map(|s| s.to_string()).unwrap_or_else(|| "-".into());
                println!(
                    "  {} {:<14} {} {:<14} {} {}",
                    "BID:".yellow(),
                    bid,
                    "ASK:".yellow(),
                    ask,
                    "SPREAD:".green(),
                    spread
                );
            }
            Err(e) if e.is_transport() => {
                println!("  {} network error, retrying: {}", "!".yellow(), e);
            }
            Err(e) => return Err(e.into()),
        }
    }
}
