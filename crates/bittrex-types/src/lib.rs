//! Shared types for the Bittrex v1.1 REST API
//!
//! This crate holds the serde models every endpoint result decodes into,
//! plus the small enums and error-code classification used by the client.
//! It has no networking dependencies and can be used on its own, e.g. to
//! decode captured responses.
//!
//! # Key Types
//!
//! - [`Market`], [`Currency`], [`Ticker`], [`MarketSummary`] - market metadata and quotes
//! - [`OrderBook`], [`OrderBookEntry`], [`MarketTrade`] - depth and trade history
//! - [`OpenOrder`], [`Order`], [`OrderHistoryEntry`], [`OrderUuid`] - orders
//! - [`Balance`], [`DepositAddress`], [`Withdrawal`], [`Deposit`] - account data
//! - [`OrderBookType`], [`OrderType`], [`TradeSide`] - enums
//! - [`ApiErrorCode`] - classification of exchange failure messages

pub mod account;
pub mod enums;
pub mod error_codes;
pub mod market;
pub mod order;

pub use account::*;
pub use enums::*;
pub use error_codes::*;
pub use market::*;
pub use order::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
