//! REST API client for the Bittrex v1.1 exchange API
//!
//! This crate provides a typed client for Bittrex market data, trading and
//! account operations.
//!
//! # Features
//!
//! - **Public**: Markets, currencies, ticker, summaries, order book, trade history
//! - **Market**: Limit buy/sell, cancel, open orders
//! - **Account**: Balances, deposit address, withdraw, order lookup and history
//!
//! # How a call works
//!
//! Every operation shapes its arguments into a [`RequestSpec`] and hands it
//! to [`BittrexRestClient::call`], which
//!
//! 1. builds the URL, adding `apikey` and `nonce` for private methods,
//! 2. signs the full URL with HMAC-SHA512 (`apisign` header),
//! 3. issues a GET through the configured [`HttpExecutor`],
//! 4. unwraps the `{success, message, result}` envelope.
//!
//! Failures come back as [`RestError::Transport`] (network or unparsable
//! body) or [`RestError::Api`] (the exchange said `success: false`). There
//! is no retry, caching or rate limiting.
//!
//! # Example
//!
//! ```no_run
//! use bittrex_rest::{BittrexRestClient, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let client = BittrexRestClient::new(creds)?;
//!
//!     let ticker = client.ticker("BTC-LTC").await?;
//!     println!("BTC-LTC last: {}", ticker.last);
//!
//!     for balance in client.balances().await? {
//!         println!("{}: {}", balance.currency, balance.available);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod envelope;
pub mod error;
pub mod transport;

// Re-export main types
pub use client::{BittrexRestClient, ClientConfig, BASE_URL};
pub use envelope::ResponseEnvelope;
pub use error::{RestError, RestResult};
pub use transport::{HttpExecutor, HttpResponse, ReqwestExecutor, TransportError};

#[cfg(any(test, feature = "test-utils"))]
pub use transport::{MockExecutor, RecordedRequest};

pub use bittrex_auth::{
    Credentials, FixedNonce, IncrementingNonce, NonceSource, QueryParams, RequestSpec,
    SignedRequest, UnixSecondsNonce,
};
pub use bittrex_types::*;
