//! Error types for REST API operations

use crate::transport::TransportError;
use bittrex_auth::AuthError;
use bittrex_types::ApiErrorCode;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Network failure or a body that is not a response envelope
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The exchange answered `success: false`
    #[error("API error: {message}")]
    Api {
        /// Classified message
        code: ApiErrorCode,
        /// Message exactly as sent by the exchange
        message: String,
    },

    /// The result did not match the endpoint's model
    #[error("Failed to decode {method} result: {reason}")]
    Decode {
        /// Method path of the call
        method: String,
        /// Deserializer error
        reason: String,
    },

    /// The request could not be built or signed
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl RestError {
    /// Create an API error from the envelope's message
    pub fn from_api_message(message: String) -> Self {
        let code = ApiErrorCode::parse(&message);
        Self::Api { code, message }
    }

    /// Whether this is a transport failure
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Whether the exchange rejected the call
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// The exchange message, for API errors
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The classified exchange message, for API errors
    pub fn api_code(&self) -> Option<&ApiErrorCode> {
        match self {
            Self::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
