//! Common test utilities and fixtures for integration tests
//!
//! Contains response bodies in the shape returned by the Bittrex v1.1 API.

#![allow(dead_code)]

use async_trait::async_trait;
use bittrex_rest::{
    BittrexRestClient, ClientConfig, Credentials, FixedNonce, HttpExecutor, HttpResponse,
    TransportError,
};
use parking_lot::Mutex;
use std::collections::VecDeque;

pub const API_KEY: &str = "integration_key";
pub const API_SECRET: &str = "integration_secret";
pub const NONCE: u64 = 1_514_764_800;

/// Executor that replays scripted responses and logs requested URLs
#[derive(Default)]
pub struct ScriptedExecutor {
    script: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    pub seen: Mutex<Vec<(String, Option<String>)>>,
}

impl ScriptedExecutor {
    pub fn then_body(&self, body: &str) -> &Self {
        self.script.lock().push_back(Ok(HttpResponse::ok(body)));
        self
    }

    pub fn then_error(&self, error: TransportError) -> &Self {
        self.script.lock().push_back(Err(error));
        self
    }

    pub fn last_url(&self) -> String {
        self.seen.lock().last().map(|(url, _)| url.clone()).unwrap_or_default()
    }

    pub fn last_signature(&self) -> Option<String> {
        self.seen.lock().last().and_then(|(_, sig)| sig.clone())
    }
}

#[async_trait]
impl HttpExecutor for ScriptedExecutor {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        let signature = headers
            .iter()
            .find(|(name, _)| *name == "apisign")
            .map(|(_, value)| value.to_string());
        self.seen.lock().push((url.to_string(), signature));

        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("script exhausted".into())))
    }
}

pub fn credentials() -> Credentials {
    Credentials::new(API_KEY, API_SECRET).expect("valid test credentials")
}

pub fn client() -> BittrexRestClient<ScriptedExecutor> {
    BittrexRestClient::with_executor(credentials(), ClientConfig::default(), ScriptedExecutor::default())
        .with_nonce_source(FixedNonce(NONCE))
}

pub fn ok(result: &str) -> String {
    format!(r#"{{"success":true,"message":"","result":{}}}"#, result)
}

pub fn fail(message: &str) -> String {
    format!(r#"{{"success":false,"message":"{}","result":null}}"#, message)
}

pub const MARKETS: &str = r#"[
    {
        "MarketCurrency": "LTC",
        "BaseCurrency": "BTC",
        "MarketCurrencyLong": "Litecoin",
        "BaseCurrencyLong": "Bitcoin",
        "MinTradeSize": 0.01000000,
        "MarketName": "BTC-LTC",
        "IsActive": true,
        "Created": "2014-02-13T00:00:00"
    },
    {
        "MarketCurrency": "DOGE",
        "BaseCurrency": "BTC",
        "MarketCurrencyLong": "Dogecoin",
        "BaseCurrencyLong": "Bitcoin",
        "MinTradeSize": 100.00000000,
        "MarketName": "BTC-DOGE",
        "IsActive": true,
        "Created": "2014-02-13T00:00:00"
    }
]"#;

pub const CURRENCIES: &str = r#"[
    {
        "Currency": "BTC",
        "CurrencyLong": "Bitcoin",
        "MinConfirmation": 2,
        "TxFee": 0.00020000,
        "IsActive": true,
        "CoinType": "BITCOIN",
        "BaseAddress": null
    }
]"#;

pub const MARKET_SUMMARIES: &str = r#"[
    {
        "MarketName": "BTC-888",
        "High": 0.00000919,
        "Low": 0.00000820,
        "Volume": 74339.61396015,
        "Last": 0.00000820,
        "BaseVolume": 0.64966963,
        "TimeStamp": "2014-07-09T07:19:30.15",
        "Bid": 0.00000820,
        "Ask": 0.00000831,
        "OpenBuyOrders": 15,
        "OpenSellOrders": 15,
        "PrevDay": 0.00000821,
        "Created": "2014-03-20T06:00:00"
    }
]"#;

pub const MARKET_HISTORY: &str = r#"[
    {
        "Id": 319435,
        "TimeStamp": "2014-07-09T03:21:20.08",
        "Quantity": 0.30802438,
        "Price": 0.01263400,
        "Total": 0.00389158,
        "FillType": "FILL",
        "OrderType": "BUY"
    }
]"#;

pub const ORDER: &str = r#"{
    "AccountId": null,
    "OrderUuid": "0cb4c4e4-bdc7-4e13-8c13-430e587d2cc1",
    "Exchange": "BTC-SHLD",
    "Type": "LIMIT_BUY",
    "Quantity": 1000.00000000,
    "QuantityRemaining": 1000.00000000,
    "Limit": 0.00000001,
    "Reserved": 0.00001000,
    "ReserveRemaining": 0.00001000,
    "CommissionReserved": 0.00000002,
    "CommissionReserveRemaining": 0.00000002,
    "CommissionPaid": 0.00000000,
    "Price": 0.00000000,
    "PricePerUnit": null,
    "Opened": "2014-07-13T07:45:46.27",
    "Closed": null,
    "IsOpen": true,
    "Sentinel": "6c454604-22e2-4fb4-892e-179eede20972",
    "CancelInitiated": false,
    "ImmediateOrCancel": false,
    "IsConditional": false,
    "Condition": "NONE",
    "ConditionTarget": null
}"#;

pub const ORDER_HISTORY: &str = r#"[
    {
        "OrderUuid": "fd97d393-e9b9-4dd1-9dbf-f288fc72a185",
        "Exchange": "BTC-LTC",
        "TimeStamp": "2014-07-09T04:01:00.667",
        "OrderType": "LIMIT_BUY",
        "Limit": 0.00000001,
        "Quantity": 100000.00000000,
        "QuantityRemaining": 100000.00000000,
        "Commission": 0.00000000,
        "Price": 0.00000000,
        "PricePerUnit": null,
        "IsConditional": false,
        "Condition": null,
        "ConditionTarget": null,
        "ImmediateOrCancel": false
    }
]"#;

pub const BALANCES: &str = r#"[
    {
        "Currency": "DOGE",
        "Balance": 0.00000000,
        "Available": 0.00000000,
        "Pending": 0.00000000,
        "CryptoAddress": "DLxcEt3AatMyr2NTatzjsfHNoB9NT62HiF",
        "Requested": false,
        "Uuid": null
    },
    {
        "Currency": "BTC",
        "Balance": 14.21549076,
        "Available": 14.21549076,
        "Pending": 0.00000000,
        "CryptoAddress": "1Mrcdr6715hjda34pdXuLqXcju6qgwHA31",
        "Requested": false,
        "Uuid": null
    }
]"#;

pub const DEPOSIT_HISTORY: &str = r#"[
    {
        "Id": 31,
        "Amount": 1.00000000,
        "Currency": "BTC",
        "Confirmations": 3,
        "LastUpdated": "2014-02-21T21:48:05.147",
        "TxId": "f2f3b7fc54c4e3dcd7e4f4e4a2fcbad2b6b0b7f5c1e1e3b7cbf3f1b2a1c3d4e5",
        "CryptoAddress": "1Mrcdr6715hjda34pdXuLqXcju6qgwHA31"
    }
]"#;
