//! Public market data models

use crate::enums::TradeSide;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A trading market as listed by `public/getmarkets`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Market {
    /// Traded currency (e.g. "LTC")
    pub market_currency: String,
    /// Quote currency (e.g. "BTC")
    pub base_currency: String,
    /// Traded currency full name
    pub market_currency_long: String,
    /// Quote currency full name
    pub base_currency_long: String,
    /// Minimum order quantity
    pub min_trade_size: Decimal,
    /// Market name in `BASE-MARKET` form (e.g. "BTC-LTC")
    pub market_name: String,
    /// Whether trading is enabled
    pub is_active: bool,
    /// Listing time
    pub created: NaiveDateTime,
    /// Exchange notice for this market
    #[serde(default)]
    pub notice: Option<String>,
    /// Sponsored flag
    #[serde(default)]
    pub is_sponsored: Option<bool>,
    /// Logo URL
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// A supported currency as listed by `public/getcurrencies`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Currency {
    /// Ticker symbol
    pub currency: String,
    /// Full name
    pub currency_long: String,
    /// Confirmations required before a deposit is credited
    pub min_confirmation: u32,
    /// Withdrawal fee
    pub tx_fee: Decimal,
    /// Whether the wallet is enabled
    pub is_active: bool,
    /// Coin family (e.g. "BITCOIN", "ETH_CONTRACT")
    pub coin_type: String,
    /// Shared deposit address for memo-based coins
    #[serde(default)]
    pub base_address: Option<String>,
    /// Exchange notice for this currency
    #[serde(default)]
    pub notice: Option<String>,
}

/// Current tick values from `public/getticker`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ticker {
    /// Best bid
    pub bid: Decimal,
    /// Best ask
    pub ask: Decimal,
    /// Last trade price
    pub last: Decimal,
}

impl Ticker {
    /// Ask minus bid
    pub fn spread(&self) -> Decimal {
        self.ask - self.bid
    }

    /// Midpoint between bid and ask
    pub fn mid(&self) -> Decimal {
        (self.ask + self.bid) / Decimal::TWO
    }
}

/// 24 hour summary of a market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketSummary {
    /// Market name
    pub market_name: String,
    /// 24h high
    pub high: Decimal,
    /// 24h low
    pub low: Decimal,
    /// 24h volume in the traded currency
    pub volume: Decimal,
    /// Last trade price
    pub last: Decimal,
    /// 24h volume in the quote currency
    pub base_volume: Decimal,
    /// Time of the summary
    pub time_stamp: NaiveDateTime,
    /// Best bid
    pub bid: Decimal,
    /// Best ask
    pub ask: Decimal,
    /// Number of open buy orders
    pub open_buy_orders: u32,
    /// Number of open sell orders
    pub open_sell_orders: u32,
    /// Last price 24h ago
    pub prev_day: Decimal,
    /// Listing time
    pub created: NaiveDateTime,
}

impl MarketSummary {
    /// Absolute price change over the last 24h
    pub fn change(&self) -> Decimal {
        self.last - self.prev_day
    }

    /// Relative price change over the last 24h in percent, `None` if there
    /// was no previous price
    pub fn change_percent(&self) -> Option<Decimal> {
        if self.prev_day.is_zero() {
            return None;
        }
        Some(self.change() / self.prev_day * Decimal::ONE_HUNDRED)
    }
}

/// One price level of the order book
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderBookEntry {
    /// Quantity at this rate
    pub quantity: Decimal,
    /// Price
    pub rate: Decimal,
}

/// Order book snapshot
///
/// When only one side was requested the other side is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    /// Bids, best first
    #[serde(default)]
    pub buy: Vec<OrderBookEntry>,
    /// Asks, best first
    #[serde(default)]
    pub sell: Vec<OrderBookEntry>,
}

impl OrderBook {
    /// Best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.buy.first().map(|level| level.rate)
    }

    /// Best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.sell.first().map(|level| level.rate)
    }

    /// Best ask minus best bid
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

/// A public trade from `public/getmarkethistory`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketTrade {
    /// Trade id
    pub id: u64,
    /// Execution time
    pub time_stamp: NaiveDateTime,
    /// Quantity
    pub quantity: Decimal,
    /// Price
    pub price: Decimal,
    /// Quantity times price
    pub total: Decimal,
    /// "FILL" or "PARTIAL_FILL"
    pub fill_type: String,
    /// Taker side
    pub order_type: TradeSide,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_ticker() {
        let ticker: Ticker =
            serde_json::from_str(r#"{"Bid":2.05670368,"Ask":3.35579531,"Last":3.35579531}"#)
                .unwrap();
        assert_eq!(ticker.bid, dec!(2.05670368));
        assert_eq!(ticker.spread(), dec!(1.29909163));
    }

    #[test]
    fn test_parse_market_with_nulls() {
        let json = r#"{
            "MarketCurrency": "LTC",
            "BaseCurrency": "BTC",
            "MarketCurrencyLong": "Litecoin",
            "BaseCurrencyLong": "Bitcoin",
            "MinTradeSize": 0.01,
            "MarketName": "BTC-LTC",
            "IsActive": true,
            "Created": "2014-02-13T00:00:00",
            "Notice": null,
            "IsSponsored": null,
            "LogoUrl": null
        }"#;
        let market: Market = serde_json::from_str(json).unwrap();
        assert_eq!(market.market_name, "BTC-LTC");
        assert_eq!(market.min_trade_size, dec!(0.01));
        assert!(market.notice.is_none());
    }

    #[test]
    fn test_order_book_spread() {
        let book = OrderBook {
            buy: vec![OrderBookEntry { quantity: dec!(1), rate: dec!(0.0101) }],
            sell: vec![OrderBookEntry { quantity: dec!(2), rate: dec!(0.0103) }],
        };
        assert_eq!(book.spread(), Some(dec!(0.0002)));

        let one_sided = OrderBook { buy: book.buy.clone(), sell: vec![] };
        assert_eq!(one_sided.best_ask(), None);
        assert_eq!(one_sided.spread(), None);
    }

    #[test]
    fn test_summary_change_percent_without_prev_day() {
        let summary = MarketSummary {
            market_name: "BTC-NEW".into(),
            high: dec!(1),
            low: dec!(1),
            volume: dec!(0),
            last: dec!(1),
            base_volume: dec!(0),
            time_stamp: NaiveDateTime::default(),
            bid: dec!(1),
            ask: dec!(1),
            open_buy_orders: 0,
            open_sell_orders: 0,
            prev_day: dec!(0),
            created: NaiveDateTime::default(),
        };
        assert_eq!(summary.change_percent(), None);
    }
}
