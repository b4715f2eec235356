//! Order placement endpoints
//!
//! These endpoints require an API key with trading permission.

use crate::client::BittrexRestClient;
use crate::error::RestResult;
use crate::transport::HttpExecutor;
use bittrex_auth::RequestSpec;
use bittrex_types::{OpenOrder, OrderUuid};
use rust_decimal::Decimal;
use tracing::instrument;

/// Order placement endpoints
pub struct MarketEndpoints<'a, E> {
    client: &'a BittrexRestClient<E>,
}

impl<'a, E: HttpExecutor> MarketEndpoints<'a, E> {
    pub fn new(client: &'a BittrexRestClient<E>) -> Self {
        Self { client }
    }

    fn limit_order(method: &str, market: &str, quantity: Decimal, rate: Decimal) -> RequestSpec {
        RequestSpec::private(method)
            .with_param("market", market)
            .with_param("quantity", quantity)
            .with_param("rate", rate)
    }

    /// Place a limit buy order
    ///
    /// # Arguments
    /// * `market` - Market name (e.g., "BTC-LTC")
    /// * `quantity` - Amount to buy
    /// * `rate` - Limit price
    #[instrument(skip(self))]
    pub async fn buy_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> RestResult<OrderUuid> {
        let spec = Self::limit_order("market/buylimit", market, quantity, rate);
        self.client.call_typed(spec).await
    }

    /// Place a limit sell order
    ///
    /// # Arguments
    /// * `market` - Market name
    /// * `quantity` - Amount to sell
    /// * `rate` - Limit price
    #[instrument(skip(self))]
    pub async fn sell_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> RestResult<OrderUuid> {
        let spec = Self::limit_order("market/selllimit", market, quantity, rate);
        self.client.call_typed(spec).await
    }

    /// Cancel a buy or sell order
    #[instrument(skip(self))]
    pub async fn cancel(&self, uuid: &str) -> RestResult<()> {
        let spec = RequestSpec::private("market/cancel").with_param("uuid", uuid);
        self.client.call(spec).await?;
        Ok(())
    }

    /// Get open orders, optionally for one market only
    #[instrument(skip(self))]
    pub async fn open_orders(&self, market: Option<&str>) -> RestResult<Vec<OpenOrder>> {
        let spec = RequestSpec::private("market/getopenorders").with_optional_param("market", market);
        self.client.call_typed(spec).await
    }
}
