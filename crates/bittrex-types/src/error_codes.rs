//! Classification of Bittrex failure messages
//!
//! A failed call comes back as `{"success": false, "message": "..."}` where
//! the message is an upper-case token such as `INSUFFICIENT_FUNDS`. The
//! client always keeps the verbatim message; [`ApiErrorCode`] only adds a
//! structured view of the tokens the exchange is known to send.

use std::fmt;

/// Known Bittrex failure messages
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApiErrorCode {
    // === Authentication ===
    /// APIKEY_INVALID
    ApiKeyInvalid,
    /// INVALID_SIGNATURE
    InvalidSignature,
    /// APISIGN_NOT_PROVIDED
    ApiSignNotProvided,
    /// NONCE_NOT_PROVIDED
    NonceNotProvided,
    /// INVALID_PERMISSION
    InvalidPermission,

    // === Request parameters ===
    /// MARKET_NOT_PROVIDED
    MarketNotProvided,
    /// INVALID_MARKET
    InvalidMarket,
    /// CURRENCY_NOT_PROVIDED
    CurrencyNotProvided,
    /// INVALID_CURRENCY
    InvalidCurrency,
    /// QUANTITY_NOT_PROVIDED
    QuantityNotProvided,
    /// RATE_NOT_PROVIDED
    RateNotProvided,
    /// UUID_INVALID
    UuidInvalid,

    // === Trading / funding ===
    /// INSUFFICIENT_FUNDS
    InsufficientFunds,
    /// MIN_TRADE_REQUIREMENT_NOT_MET
    MinTradeRequirementNotMet,
    /// DUST_TRADE_DISALLOWED_MIN_VALUE_50K_SAT
    DustTradeDisallowed,
    /// ORDER_NOT_OPEN
    OrderNotOpen,
    /// ADDRESS_GENERATING
    AddressGenerating,

    /// Any message not listed above
    Other(String),
}

impl ApiErrorCode {
    /// Classify a message returned by the exchange
    pub fn parse(message: &str) -> Self {
        match message.trim() {
            "APIKEY_INVALID" => Self::ApiKeyInvalid,
            "INVALID_SIGNATURE" => Self::InvalidSignature,
            "APISIGN_NOT_PROVIDED" => Self::ApiSignNotProvided,
            "NONCE_NOT_PROVIDED" => Self::NonceNotProvided,
            "INVALID_PERMISSION" => Self::InvalidPermission,
            "MARKET_NOT_PROVIDED" => Self::MarketNotProvided,
            "INVALID_MARKET" => Self::InvalidMarket,
            "CURRENCY_NOT_PROVIDED" => Self::CurrencyNotProvided,
            "INVALID_CURRENCY" => Self::InvalidCurrency,
            "QUANTITY_NOT_PROVIDED" => Self::QuantityNotProvided,
            "RATE_NOT_PROVIDED" => Self::RateNotProvided,
            "UUID_INVALID" => Self::UuidInvalid,
            "INSUFFICIENT_FUNDS" => Self::InsufficientFunds,
            "MIN_TRADE_REQUIREMENT_NOT_MET" => Self::MinTradeRequirementNotMet,
            "DUST_TRADE_DISALLOWED_MIN_VALUE_50K_SAT" => Self::DustTradeDisallowed,
            "ORDER_NOT_OPEN" => Self::OrderNotOpen,
            "ADDRESS_GENERATING" => Self::AddressGenerating,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire token for this code
    pub fn as_str(&self) -> &str {
        match self {
            Self::ApiKeyInvalid => "APIKEY_INVALID",
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::ApiSignNotProvided => "APISIGN_NOT_PROVIDED",
            Self::NonceNotProvided => "NONCE_NOT_PROVIDED",
            Self::InvalidPermission => "INVALID_PERMISSION",
            Self::MarketNotProvided => "MARKET_NOT_PROVIDED",
            Self::InvalidMarket => "INVALID_MARKET",
            Self::CurrencyNotProvided => "CURRENCY_NOT_PROVIDED",
            Self::InvalidCurrency => "INVALID_CURRENCY",
            Self::QuantityNotProvided => "QUANTITY_NOT_PROVIDED",
            Self::RateNotProvided => "RATE_NOT_PROVIDED",
            Self::UuidInvalid => "UUID_INVALID",
            Self::InsufficientFunds => "INSUFFICIENT_FUNDS",
            Self::MinTradeRequirementNotMet => "MIN_TRADE_REQUIREMENT_NOT_MET",
            Self::DustTradeDisallowed => "DUST_TRADE_DISALLOWED_MIN_VALUE_50K_SAT",
            Self::OrderNotOpen => "ORDER_NOT_OPEN",
            Self::AddressGenerating => "ADDRESS_GENERATING",
            Self::Other(message) => message,
        }
    }

    /// The request was rejected because of the key, signature or nonce
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            Self::ApiKeyInvalid
                | Self::InvalidSignature
                | Self::ApiSignNotProvided
                | Self::NonceNotProvided
                | Self::InvalidPermission
        )
    }

    /// The exchange is still preparing the resource (deposit address)
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::AddressGenerating)
    }

    /// The message was not one of the known tokens
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_insufficient_funds() {
        let code = ApiErrorCode::parse("INSUFFICIENT_FUNDS");
        assert_eq!(code, ApiErrorCode::InsufficientFunds);
        assert!(!code.is_auth_failure());
        assert_eq!(code.to_string(), "INSUFFICIENT_FUNDS");
    }

    #[test]
    fn test_parse_auth_errors() {
        for token in ["APIKEY_INVALID", "INVALID_SIGNATURE", "NONCE_NOT_PROVIDED"] {
            assert!(ApiErrorCode::parse(token).is_auth_failure(), "{token}");
        }
    }

    #[test]
    fn test_address_generating_is_pending() {
        assert!(ApiErrorCode::parse("ADDRESS_GENERATING").is_pending());
    }

    #[test]
    fn test_unknown_message_kept_verbatim() {
        let code = ApiErrorCode::parse("Something went wrong");
        assert!(code.is_unknown());
        assert_eq!(code.as_str(), "Something went wrong");
    }
}
