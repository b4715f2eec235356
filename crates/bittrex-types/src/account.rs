//! Account balance and funding models

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balance of one currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Balance {
    /// Currency symbol
    pub currency: String,
    /// Total balance
    pub balance: Decimal,
    /// Balance available for trading or withdrawal
    pub available: Decimal,
    /// Balance awaiting confirmation
    pub pending: Decimal,
    /// Deposit address, if one was generated
    #[serde(default)]
    pub crypto_address: Option<String>,
    /// Whether an address has been requested
    #[serde(default)]
    pub requested: Option<bool>,
    /// Internal row id
    #[serde(default)]
    pub uuid: Option<String>,
}

impl Balance {
    /// Funds held by open orders or withdrawals
    pub fn reserved(&self) -> Decimal {
        self.balance - self.available - self.pending
    }

    /// Whether every amount is zero
    pub fn is_empty(&self) -> bool {
        self.balance.is_zero() && self.pending.is_zero()
    }
}

/// Deposit address for a currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepositAddress {
    /// Currency symbol
    pub currency: String,
    /// Address to send funds to
    pub address: String,
}

/// An entry of `account/getwithdrawalhistory`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Withdrawal {
    /// Withdrawal identifier
    pub payment_uuid: String,
    /// Currency symbol
    pub currency: String,
    /// Amount withdrawn
    pub amount: Decimal,
    /// Destination address
    pub address: String,
    /// Request time
    pub opened: NaiveDateTime,
    /// Whether the withdrawal was authorized
    pub authorized: bool,
    /// Whether payment is pending
    pub pending_payment: bool,
    /// Network fee
    pub tx_cost: Decimal,
    /// Blockchain transaction id
    #[serde(default)]
    pub tx_id: Option<String>,
    /// Whether the withdrawal was canceled
    pub canceled: bool,
    /// Whether the address was rejected
    pub invalid_address: bool,
}

/// An entry of `account/getdeposithistory`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Deposit {
    /// Deposit id
    #[serde(default)]
    pub id: Option<u64>,
    /// Amount credited
    pub amount: Decimal,
    /// Currency symbol
    pub currency: String,
    /// Confirmations seen so far
    pub confirmations: u32,
    /// Last update time
    pub last_updated: NaiveDateTime,
    /// Blockchain transaction id
    pub tx_id: String,
    /// Receiving address
    pub crypto_address: String,
}
