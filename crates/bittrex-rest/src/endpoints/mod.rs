//! API endpoint implementations
//!
//! Endpoints are grouped the way Bittrex groups its method paths:
//! `public/*`, `market/*` and `account/*`.

pub mod account;
pub mod market;
pub mod public;

pub use account::AccountEndpoints;
pub use market::MarketEndpoints;
pub use public::PublicEndpoints;
