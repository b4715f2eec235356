//! Response envelope decoding
//!
//! Every Bittrex response is `{"success": bool, "message": string, "result": any}`.
//! `message` is meaningful only when `success` is false, `result` only when
//! it is true. The result stays an opaque JSON value here; endpoint
//! wrappers decode it into their own models.

use crate::transport::TransportError;
use serde::Deserialize;
use serde_json::Value;

/// The `{success, message, result}` wrapper around every response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseEnvelope {
    /// Whether the call succeeded
    pub success: bool,
    /// Failure reason (empty on success)
    #[serde(default)]
    pub message: Option<String>,
    /// Payload (null on failure)
    #[serde(default)]
    pub result: Value,
}

impl ResponseEnvelope {
    /// Parse a raw response body
    ///
    /// Anything that is not a JSON envelope is a transport-level failure,
    /// whatever the HTTP status.
    pub fn parse(status: u16, body: &str) -> Result<Self, TransportError> {
        serde_json::from_str(body).map_err(|e| TransportError::MalformedBody {
            status,
            reason: e.to_string(),
        })
    }

    /// Get the result, or the exchange message if the call failed
    pub fn into_result(self) -> Result<Value, String> {
        if self.success {
            Ok(self.result)
        } else {
            Err(self.message.unwrap_or_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_returns_result() {
        let envelope =
            ResponseEnvelope::parse(200, r#"{"success":true,"message":"","result":[1,2,3]}"#)
                .unwrap();
        assert_eq!(envelope.into_result(), Ok(json!([1, 2, 3])));
    }

    #[test]
    fn test_failure_returns_message_verbatim() {
        let envelope = ResponseEnvelope::parse(
            200,
            r#"{"success":false,"message":"INSUFFICIENT_FUNDS","result":null}"#,
        )
        .unwrap();
        assert_eq!(envelope.into_result(), Err("INSUFFICIENT_FUNDS".to_string()));
    }

    #[test]
    fn test_success_without_result_is_null() {
        let envelope = ResponseEnvelope::parse(200, r#"{"success":true,"message":""}"#).unwrap();
        assert_eq!(envelope.into_result(), Ok(Value::Null));
    }

    #[test]
    fn test_failure_with_null_message() {
        let envelope =
            ResponseEnvelope::parse(200, r#"{"success":false,"message":null,"result":null}"#)
                .unwrap();
        assert_eq!(envelope.into_result(), Err(String::new()));
    }

    #[test]
    fn test_non_json_body_is_transport_error() {
        let err = ResponseEnvelope::parse(502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, TransportError::MalformedBody { status: 502, .. }));
    }

    #[test]
    fn test_json_without_success_flag_is_transport_error() {
        let err = ResponseEnvelope::parse(200, r#"{"result":[]}"#).unwrap_err();
        assert!(matches!(err, TransportError::MalformedBody { status: 200, .. }));
    }
}
