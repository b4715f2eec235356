//! Private account endpoints
//!
//! These endpoints require authentication.

use crate::client::BittrexRestClient;
use crate::error::RestResult;
use crate::transport::HttpExecutor;
use bittrex_auth::RequestSpec;
use bittrex_types::{Balance, Deposit, DepositAddress, Order, OrderHistoryEntry, OrderUuid, Withdrawal};
use rust_decimal::Decimal;
use tracing::instrument;

/// Private account endpoints
pub struct AccountEndpoints<'a, E> {
    client: &'a BittrexRestClient<E>,
}

impl<'a, E: HttpExecutor> AccountEndpoints<'a, E> {
    pub fn new(client: &'a BittrexRestClient<E>) -> Self {
        Self { client }
    }

    /// Get balances of every currency
    #[instrument(skip(self))]
    pub async fn balances(&self) -> RestResult<Vec<Balance>> {
        self.client
            .call_typed(RequestSpec::private("account/getbalances"))
            .await
    }

    /// Get the balance of one currency
    #[instrument(skip(self))]
    pub async fn balance(&self, currency: &str) -> RestResult<Balance> {
        let spec = RequestSpec::private("account/getbalance").with_param("currency", currency);
        self.client.call_typed(spec).await
    }

    /// Get or generate the deposit address for a currency
    ///
    /// While a new address is being generated the call fails with
    /// `ADDRESS_GENERATING`; see [`bittrex_types::ApiErrorCode::is_pending`].
    #[instrument(skip(self))]
    pub async fn deposit_address(&self, currency: &str) -> RestResult<DepositAddress> {
        let spec =
            RequestSpec::private("account/getdepositaddress").with_param("currency", currency);
        self.client.call_typed(spec).await
    }

    /// Withdraw funds
    ///
    /// # Arguments
    /// * `currency` - Currency to withdraw
    /// * `quantity` - Amount, before the network fee
    /// * `address` - Destination address
    /// * `payment_id` - Memo/tag for coins that need one
    #[instrument(skip(self))]
    pub async fn withdraw(
        &self,
        currency: &str,
        quantity: Decimal,
        address: &str,
        payment_id: Option<&str>,
    ) -> RestResult<OrderUuid> {
        let spec = RequestSpec::private("account/withdraw")
            .with_param("currency", currency)
            .with_param("quantity", quantity)
            .with_param("address", address)
            .with_optional_param("paymentid", payment_id);
        self.client.call_typed(spec).await
    }

    /// Get a single order by uuid
    #[instrument(skip(self))]
    pub async fn order(&self, uuid: &str) -> RestResult<Order> {
        let spec = RequestSpec::private("account/getorder").with_param("uuid", uuid);
        self.client.call_typed(spec).await
    }

    /// Get closed orders, optionally for one market only
    #[instrument(skip(self))]
    pub async fn order_history(&self, market: Option<&str>) -> RestResult<Vec<OrderHistoryEntry>> {
        let spec =
            RequestSpec::private("account/getorderhistory").with_optional_param("market", market);
        self.client.call_typed(spec).await
    }

    /// Get withdrawals, optionally for one currency only
    #[instrument(skip(self))]
    pub async fn withdrawal_history(&self, currency: Option<&str>) -> RestResult<Vec<Withdrawal>> {
        let spec = RequestSpec::private("account/getwithdrawalhistory")
            .with_optional_param("currency", currency);
        self.client.call_typed(spec).await
    }

    /// Get deposits, optionally for one currency only
    #[instrument(skip(self))]
    pub async fn deposit_history(&self, currency: Option<&str>) -> RestResult<Vec<Deposit>> {
        let spec = RequestSpec::private("account/getdeposithistory")
            .with_optional_param("currency", currency);
        self.client.call_typed(spec).await
    }
}
