//! Demo 1: Market Overview
//!
//! Prints the 24h summary of the busiest BTC markets.
//!
//! Run: cargo run --bin market_overview

use bittrex_rest::{BittrexRestClient, ClientConfig, Credentials};
use colored::*;
use tracing_subscriber::EnvFilter;

const TOP_N: usize = 15;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(64).cyan());
    println!("{}", "  BITTREX MARKET OVERVIEW".cyan().bold());
    println!("{}", "═".repeat(64).cyan());
    println!();

    // Public data only needs a signature, not a real key
    let credentials = Credentials::from_env().or_else(|_| Credentials::new("public", "public"))?;
    let client = BittrexRestClient::with_config(credentials, ClientConfig::from_env()?)?;

    let mut summaries: Vec<_> = client
        .public()
        .market_summaries()
        .await?
        .into_iter()
        .filter(|s| s.market_name.starts_with("BTC-"))
        .collect();
    summaries.sort_by(|a, b| b.base_volume.cmp(&a.base_volume));

    println!(
        "  {:<12} {:>16} {:>16} {:>10}",
        "MARKET".yellow(),
        "LAST".yellow(),
        "VOLUME (BTC)".yellow(),
        "24H".yellow()
    );

    for summary in summaries.iter().take(TOP_N) {
        let change = match summary.change_percent() {
            Some(pct) if pct.is_sign_negative() => format!("{:.2}%", pct).red(),
            Some(pct) => format!("+{:.2}%", pct).green(),
            None => "n/a".dimmed(),
        };
        println!(
            "  {:<12} {:>16.8} {:>16.3} {:>10}",
            summary.market_name, summary.last, summary.base_volume, change
        );
    }

    println!();
    println!(
        "{} {} BTC markets, top {} by volume",
        "✓".green(),
        summaries.len(),
        TOP_N.min(summaries.len())
    );

    Ok(())
}
