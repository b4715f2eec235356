//! Order placement and order query models

use crate::enums::OrderType;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of `market/buylimit`, `market/selllimit` and `account/withdraw`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUuid {
    /// Identifier assigned by the exchange
    pub uuid: String,
}

/// An open order from `market/getopenorders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OpenOrder {
    /// Internal row id, usually null
    #[serde(default)]
    pub uuid: Option<String>,
    /// Order identifier
    pub order_uuid: String,
    /// Market name
    pub exchange: String,
    /// Limit buy or limit sell
    pub order_type: OrderType,
    /// Ordered quantity
    pub quantity: Decimal,
    /// Quantity not yet filled
    pub quantity_remaining: Decimal,
    /// Limit price
    pub limit: Decimal,
    /// Commission paid so far
    pub commission_paid: Decimal,
    /// Total filled value
    pub price: Decimal,
    /// Average fill price
    #[serde(default)]
    pub price_per_unit: Option<Decimal>,
    /// Placement time
    pub opened: NaiveDateTime,
    /// Close time
    #[serde(default)]
    pub closed: Option<NaiveDateTime>,
    /// Whether a cancel is pending
    pub cancel_initiated: bool,
    /// Immediate-or-cancel flag
    pub immediate_or_cancel: bool,
    /// Conditional order flag
    pub is_conditional: bool,
    /// Condition kind (e.g. "NONE")
    #[serde(default)]
    pub condition: Option<String>,
    /// Condition trigger
    #[serde(default)]
    pub condition_target: Option<Decimal>,
}

impl OpenOrder {
    /// Quantity filled so far
    pub fn filled(&self) -> Decimal {
        self.quantity - self.quantity_remaining
    }
}

/// A single order from `account/getorder`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    /// Owning account
    #[serde(default)]
    pub account_id: Option<String>,
    /// Order identifier
    pub order_uuid: String,
    /// Market name
    pub exchange: String,
    /// Limit buy or limit sell
    #[serde(rename = "Type")]
    pub order_type: OrderType,
    /// Ordered quantity
    pub quantity: Decimal,
    /// Quantity not yet filled
    pub quantity_remaining: Decimal,
    /// Limit price
    pub limit: Decimal,
    /// Funds reserved for the order
    pub reserved: Decimal,
    /// Reserved funds not yet consumed
    pub reserve_remaining: Decimal,
    /// Commission reserved
    pub commission_reserved: Decimal,
    /// Reserved commission not yet consumed
    pub commission_reserve_remaining: Decimal,
    /// Commission paid so far
    pub commission_paid: Decimal,
    /// Total filled value
    pub price: Decimal,
    /// Average fill price
    #[serde(default)]
    pub price_per_unit: Option<Decimal>,
    /// Placement time
    pub opened: NaiveDateTime,
    /// Close time
    #[serde(default)]
    pub closed: Option<NaiveDateTime>,
    /// Whether the order is still open
    pub is_open: bool,
    /// Exchange-internal sentinel
    #[serde(default)]
    pub sentinel: Option<String>,
    /// Whether a cancel is pending
    pub cancel_initiated: bool,
    /// Immediate-or-cancel flag
    pub immediate_or_cancel: bool,
    /// Conditional order flag
    pub is_conditional: bool,
    /// Condition kind
    #[serde(default)]
    pub condition: Option<String>,
    /// Condition trigger
    #[serde(default)]
    pub condition_target: Option<Decimal>,
}

/// A closed order from `account/getorderhistory`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderHistoryEntry {
    /// Order identifier
    pub order_uuid: String,
    /// Market name
    pub exchange: String,
    /// Time the order was placed
    pub time_stamp: NaiveDateTime,
    /// Limit buy or limit sell
    pub order_type: OrderType,
    /// Limit price
    pub limit: Decimal,
    /// Ordered quantity
    pub quantity: Decimal,
    /// Quantity never filled
    pub quantity_remaining: Decimal,
    /// Commission paid
    pub commission: Decimal,
    /// Total filled value
    pub price: Decimal,
    /// Average fill price
    #[serde(default)]
    pub price_per_unit: Option<Decimal>,
    /// Conditional order flag
    pub is_conditional: bool,
    /// Condition kind
    #[serde(default)]
    pub condition: Option<String>,
    /// Condition trigger
    #[serde(default)]
    pub condition_target: Option<Decimal>,
    /// Immediate-or-cancel flag
    pub immediate_or_cancel: bool,
}
