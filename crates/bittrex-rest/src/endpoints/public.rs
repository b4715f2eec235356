//! Public market data endpoints
//!
//! These endpoints don't carry `apikey`/`nonce`, but are still signed.

use crate::client::BittrexRestClient;
use crate::error::RestResult;
use crate::transport::HttpExecutor;
use bittrex_auth::RequestSpec;
use bittrex_types::{
    Currency, Market, MarketSummary, MarketTrade, OrderBook, OrderBookEntry, OrderBookType,
    Ticker,
};
use tracing::instrument;

/// Default number of order book levels per side
pub const DEFAULT_ORDER_BOOK_DEPTH: u32 = 20;

/// Public market data endpoints
pub struct PublicEndpoints<'a, E> {
    client: &'a BittrexRestClient<E>,
}

impl<'a, E: HttpExecutor> PublicEndpoints<'a, E> {
    pub fn new(client: &'a BittrexRestClient<E>) -> Self {
        Self { client }
    }

    /// List all markets with their metadata
    #[instrument(skip(self))]
    pub async fn markets(&self) -> RestResult<Vec<Market>> {
        self.client
            .call_typed(RequestSpec::public("public/getmarkets"))
            .await
    }

    /// List all supported currencies
    #[instrument(skip(self))]
    pub async fn currencies(&self) -> RestResult<Vec<Currency>> {
        self.client
            .call_typed(RequestSpec::public("public/getcurrencies"))
            .await
    }

    /// Get the current tick values for a market
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    #[instrument(skip(self))]
    pub async fn ticker(&self, market: &str) -> RestResult<Ticker> {
        let spec = RequestSpec::public("public/getticker").with_param("market", market);
        self.client.call_typed(spec).await
    }

    /// Get the last 24 hour summary of all active markets
    #[instrument(skip(self))]
    pub async fn market_summaries(&self) -> RestResult<Vec<MarketSummary>> {
        self.client
            .call_typed(RequestSpec::public("public/getmarketsummaries"))
            .await
    }

    /// Get the last 24 hour summary of one market
    ///
    /// The exchange answers with a one-element list.
    #[instrument(skip(self))]
    pub async fn market_summary(&self, market: &str) -> RestResult<Option<MarketSummary>> {
        let spec = RequestSpec::public("public/getmarketsummary").with_param("market", market);
        let summaries: Vec<MarketSummary> = self.client.call_typed(spec).await?;
        Ok(summaries.into_iter().next())
    }

    /// Get the order book for a market
    ///
    /// # Arguments
    /// * `market` - Market name
    /// * `book_type` - `Both`, or a single side
    /// * `depth` - Number of levels per side (see [`DEFAULT_ORDER_BOOK_DEPTH`])
    ///
    /// A single-side request fills only that side of the returned book.
    #[instrument(skip(self))]
    pub async fn order_book(
        &self,
        market: &str,
        book_type: OrderBookType,
        depth: u32,
    ) -> RestResult<OrderBook> {
        let spec = RequestSpec::public("public/getorderbook")
            .with_param("market", market)
            .with_param("type", book_type)
            .with_param("depth", depth);

        match book_type {
            OrderBookType::Both => self.client.call_typed(spec).await,
            OrderBookType::Buy => {
                let buy: Vec<OrderBookEntry> = self.client.call_typed(spec).await?;
                Ok(OrderBook { buy, sell: Vec::new() })
            }
            OrderBookType::Sell => {
                let sell: Vec<OrderBookEntry> = self.client.call_typed(spec).await?;
                Ok(OrderBook { buy: Vec::new(), sell })
            }
        }
    }

    /// Get the latest trades of a market
    #[instrument(skip(self))]
    pub async fn market_history(&self, market: &str) -> RestResult<Vec<MarketTrade>> {
        let spec = RequestSpec::public("public/getmarkethistory").with_param("market", market);
        self.client.call_typed(spec).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use crate::transport::MockExecutor;
    use bittrex_auth::{Credentials, FixedNonce};
    use rust_decimal_macros::dec;

    fn client() -> BittrexRestClient<MockExecutor> {
        let creds = Credentials::new("key", "secret").unwrap();
        BittrexRestClient::with_executor(creds, ClientConfig::default(), MockExecutor::new())
            .with_nonce_source(FixedNonce(1))
    }

    fn last_url(client: &BittrexRestClient<MockExecutor>) -> String {
        client.executor().last_request().unwrap().url
    }

    #[tokio::test]
    async fn test_order_book_both_sides() {
        let client = client();
        client.executor().push_body(
            r#"{"success":true,"message":"","result":{
                "buy":[{"Quantity":12.37,"Rate":0.02525}],
                "sell":[{"Quantity":32.55412402,"Rate":0.02540000}]
            }}"#,
        );

        let book = client
            .public()
            .order_book("BTC-LTC", OrderBookType::Both, DEFAULT_ORDER_BOOK_DEPTH)
            .await
            .unwrap();

        assert_eq!(book.best_bid(), Some(dec!(0.02525)));
        assert_eq!(book.best_ask(), Some(dec!(0.0254)));
        assert_eq!(
            last_url(&client),
            "https://bittrex.com/api/v1.1/public/getorderbook?market=BTC-LTC&type=both&depth=20"
        );
    }

    #[tokio::test]
    async fn test_order_book_single_side() {
        let client = client();
        client.executor().push_body(
            r#"{"success":true,"message":"","result":[{"Quantity":1.0,"Rate":0.5}]}"#,
        );

        let book = client
            .public()
            .order_book("BTC-LTC", OrderBookType::Sell, 5)
            .await
            .unwrap();

        assert!(book.buy.is_empty());
        assert_eq!(book.sell.len(), 1);
        assert!(last_url(&client).contains("type=sell&depth=5"));
    }

    #[tokio::test]
    async fn test_market_summary_unwraps_single_entry() {
        let client = client();
        client
            .executor()
            .push_body(r#"{"success":true,"message":"","result":[]}"#);

        let summary = client.public().market_summary("BTC-NOPE").await.unwrap();
        assert!(summary.is_none());
        assert!(last_url(&client).ends_with("public/getmarketsummary?market=BTC-NOPE"));
    }

    #[tokio::test]
    async fn test_public_calls_do_not_send_credentials() {
        let client = client();
        client.executor().push_body(
            r#"{"success":true,"message":"","result":{"Bid":1.0,"Ask":2.0,"Last":1.5}}"#,
        );

        let ticker = client.public().ticker("BTC-LTC").await.unwrap();

        assert_eq!(ticker.mid(), dec!(1.5));
        let url = last_url(&client);
        assert!(!url.contains("apikey"));
        assert!(!url.contains("nonce"));
    }
}
