//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, MarketEndpoints, PublicEndpoints};
use crate::envelope::ResponseEnvelope;
use crate::error::{RestError, RestResult};
use crate::transport::{HttpExecutor, ReqwestExecutor};
use bittrex_auth::{
    Credentials, NonceSource, RequestSigner, RequestSpec, SignedRequest, UnixSecondsNonce,
};
use bittrex_types::{Balance, Market, OrderBook, OrderBookType, OrderUuid, Ticker};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Bittrex v1.1 API base URL
pub const BASE_URL: &str = "https://bittrex.com/api/v1.1/";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const DEFAULT_USER_AGENT: &str = concat!("bittrex-rest/", env!("CARGO_PKG_VERSION"));

const BASE_URL_ENV: &str = "BITTREX_BASE_URL";
const TIMEOUT_ENV: &str = "BITTREX_TIMEOUT_SECS";

/// Bittrex REST API client
///
/// Holds the credentials, the nonce source and the HTTP executor for its
/// whole lifetime. Calls may run concurrently; nonces stay ordered because
/// the nonce source serializes them.
///
/// # Example
///
/// ```no_run
/// use bittrex_rest::{BittrexRestClient, Credentials, OrderBookType};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = BittrexRestClient::new(Credentials::from_env()?)?;
///
///     let book = client.order_book("BTC-LTC", OrderBookType::Both, 20).await?;
///     println!("spread: {:?}", book.spread());
///
///     let history = client.account().order_history(Some("BTC-LTC")).await?;
///     println!("{} closed orders", history.len());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BittrexRestClient<E = ReqwestExecutor> {
    executor: E,
    credentials: Credentials,
    nonce: Arc<dyn NonceSource>,
    base_url: String,
}

impl BittrexRestClient<ReqwestExecutor> {
    /// Create a client with the default configuration
    pub fn new(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> RestResult<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        let executor = ReqwestExecutor::new(Duration::from_secs(config.timeout_secs), user_agent)?;
        Ok(Self::with_executor(credentials, config, executor))
    }

    /// Create a client from environment variables
    ///
    /// See [`Credentials::from_env`] and [`ClientConfig::from_env`].
    pub fn from_env() -> RestResult<Self> {
        let credentials = Credentials::from_env()?;
        Self::with_config(credentials, ClientConfig::from_env()?)
    }
}

impl<E: HttpExecutor> BittrexRestClient<E> {
    /// Create a client on top of a custom HTTP executor
    ///
    /// The executor is responsible for timeouts; `config.timeout_secs` and
    /// `config.user_agent` are not applied here.
    pub fn with_executor(credentials: Credentials, config: ClientConfig, executor: E) -> Self {
        info!(base_url = %config.base_url, "Created Bittrex REST client");

        Self {
            executor,
            credentials,
            nonce: Arc::new(UnixSecondsNonce::new()),
            base_url: config.base_url,
        }
    }

    /// Replace the nonce source
    pub fn with_nonce_source(mut self, nonce: impl NonceSource + 'static) -> Self {
        self.nonce = Arc::new(nonce);
        self
    }

    /// The HTTP executor
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// The base URL requests are built against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The API key sent on private calls
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    // ========================================================================
    // Core
    // ========================================================================

    /// Build and sign a request without sending it
    pub fn sign(&self, spec: &RequestSpec) -> RestResult<SignedRequest> {
        let signer = RequestSigner::new(&self.credentials, self.nonce.as_ref());
        Ok(signer.build(&self.base_url, spec)?)
    }

    /// Send a signed request and unwrap the response envelope
    pub async fn execute(&self, request: &SignedRequest) -> RestResult<Value> {
        let headers = request.headers();
        let response = self.executor.get(&request.url, &headers).await?;

        if !response.is_success() {
            debug!(status = response.status, "Non-2xx response, decoding envelope anyway");
        }

        ResponseEnvelope::parse(response.status, &response.body)?
            .into_result()
            .map_err(RestError::from_api_message)
    }

    /// Execute an API call and return the raw result
    pub async fn call(&self, spec: RequestSpec) -> RestResult<Value> {
        let request = self.sign(&spec)?;
        debug!(method = %spec.method, private = spec.requires_auth, "Sending request");

        self.execute(&request).await.inspect_err(|e| {
            warn!(method = %spec.method, error = %e, "Request failed");
        })
    }

    /// Execute an API call and decode the result into `T`
    pub async fn call_typed<T: DeserializeOwned>(&self, spec: RequestSpec) -> RestResult<T> {
        let method = spec.method.clone();
        let value = self.call(spec).await?;

        serde_json::from_value(value).map_err(|e| RestError::Decode {
            method,
            reason: e.to_string(),
        })
    }

    // ========================================================================
    // Endpoint groups
    // ========================================================================

    /// Public market data endpoints
    pub fn public(&self) -> PublicEndpoints<'_, E> {
        PublicEndpoints::new(self)
    }

    /// Order placement endpoints
    pub fn market(&self) -> MarketEndpoints<'_, E> {
        MarketEndpoints::new(self)
    }

    /// Account endpoints
    pub fn account(&self) -> AccountEndpoints<'_, E> {
        AccountEndpoints::new(self)
    }

    // ========================================================================
    // Shortcuts
    // ========================================================================

    /// List all markets
    pub async fn markets(&self) -> RestResult<Vec<Market>> {
        self.public().markets().await
    }

    /// Get the current ticker for a market (e.g. "BTC-LTC")
    pub async fn ticker(&self, market: &str) -> RestResult<Ticker> {
        self.public().ticker(market).await
    }

    /// Get the order book for a market
    ///
    /// # Arguments
    /// * `market` - Market name
    /// * `book_type` - Side(s) to return
    /// * `depth` - Number of levels per side
    pub async fn order_book(
        &self,
        market: &str,
        book_type: OrderBookType,
        depth: u32,
    ) -> RestResult<OrderBook> {
        self.public().order_book(market, book_type, depth).await
    }

    /// Place a limit buy order
    pub async fn buy_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> RestResult<OrderUuid> {
        self.market().buy_limit(market, quantity, rate).await
    }

    /// Place a limit sell order
    pub async fn sell_limit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
    ) -> RestResult<OrderUuid> {
        self.market().sell_limit(market, quantity, rate).await
    }

    /// Cancel an order
    pub async fn cancel(&self, uuid: &str) -> RestResult<()> {
        self.market().cancel(uuid).await
    }

    /// Get all balances
    pub async fn balances(&self) -> RestResult<Vec<Balance>> {
        self.account().balances().await
    }

    /// Get the balance of one currency
    pub async fn balance(&self, currency: &str) -> RestResult<Balance> {
        self.account().balance(currency).await
    }
}

impl<E> std::fmt::Debug for BittrexRestClient<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BittrexRestClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("nonce", &self.nonce)
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL, ending with `/`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from the environment
    ///
    /// `BITTREX_BASE_URL` and `BITTREX_TIMEOUT_SECS` are optional; unset
    /// variables keep their defaults.
    pub fn from_env() -> RestResult<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config = config.with_base_url(base_url);
        }
        if let Ok(timeout) = std::env::var(TIMEOUT_ENV) {
            let secs = timeout
                .trim()
                .parse()
                .map_err(|_| RestError::Config(format!("{TIMEOUT_ENV} is not a number: {timeout}")))?;
            config = config.with_timeout(secs);
        }

        Ok(config)
    }

    /// Set the base URL
    ///
    /// A trailing `/` is added if missing.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
