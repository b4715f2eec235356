//! Demo 3: Account Balances
//!
//! Lists non-zero balances and open orders.
//! Requires BITTREX_API_KEY and BITTREX_API_SECRET.
//!
//! Run: cargo run --bin account_balances

use bittrex_rest::BittrexRestClient;
use colored::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = BittrexRestClient::from_env()?;

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  ACCOUNT BALANCES".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let balances = match client.balances().await {
        Ok(balances) => balances,
        Err(e) if e.api_code().is_some_and(|c| c.is_auth_failure()) => {
            println!("{} API key rejected: {}", "✗".red(), e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "  {:<8} {:>20} {:>20} {:>20}",
        "CCY".yellow(),
        "BALANCE".yellow(),
        "AVAILABLE".yellow(),
        "RESERVED".yellow()
    );
    for balance in balances.iter().filter(|b| !b.is_empty()) {
        println!(
            "  {:<8} {:>20} {:>20} {:>20}",
            balance.currency,
            balance.balance,
            balance.available,
            balance.reserved()
        );
    }

    let orders = client.market().open_orders(None).await?;
    println!();
    println!("{} {} open order(s)", "✓".green(), orders.len());
    for order in &orders {
        println!(
            "  {} {:?} {} @ {} (filled {})",
            order.exchange,
            order.order_type,
            order.quantity,
            order.limit,
            order.filled()
        );
    }

    Ok(())
}
