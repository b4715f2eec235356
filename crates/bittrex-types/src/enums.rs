//! Order book type, order type and trade side enums

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side(s) of the book `public/getorderbook` should return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderBookType {
    /// Both sides, returned as `{buy, sell}`
    #[default]
    Both,
    /// Bids only, returned as a bare list
    Buy,
    /// Asks only, returned as a bare list
    Sell,
}

impl OrderBookType {
    /// Returns the value used for the `type` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for OrderBookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order type as reported on open orders and order history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Limit buy
    LimitBuy,
    /// Limit sell
    LimitSell,
}

impl OrderType {
    /// Returns the trade side of this order type
    pub fn side(&self) -> TradeSide {
        match self {
            Self::LimitBuy => TradeSide::Buy,
            Self::LimitSell => TradeSide::Sell,
        }
    }
}

/// Side of a public trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    /// Buy
    Buy,
    /// Sell
    Sell,
}

impl TradeSide {
    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}
