//! Signed request construction
//!
//! Turns a [`RequestSpec`] into the exact URL and `apisign` value sent to
//! Bittrex:
//!
//! 1. private requests get `apikey` and `nonce` appended to the parameters
//! 2. parameters are form-encoded in insertion order
//! 3. `url = base + method ["?" + query]`
//! 4. `signature = hex(HMAC-SHA512(secret, url))`
//!
//! The signature covers the serialized bytes, so the order chosen in step 2
//! is the order used on the wire.

use crate::credentials::Credentials;
use crate::error::{AuthError, AuthResult};
use crate::nonce::NonceSource;
use tracing::trace;

/// Header carrying the request signature
pub const SIGNATURE_HEADER: &str = "apisign";

const API_KEY_PARAM: &str = "apikey";
const NONCE_PARAM: &str = "nonce";

/// Query parameters with unique keys, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`
    ///
    /// An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Get the value of `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `key` is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no parameters
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Form-encode the parameters (`a=1&b=x+y`)
    pub fn to_query_string(&self) -> AuthResult<String> {
        serde_urlencoded::to_string(&self.pairs)
            .map_err(|e| AuthError::InvalidParameter(e.to_string()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// One API call: method path, parameters and whether it is private
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// Method path relative to the base URL (e.g. "public/getticker")
    pub method: String,
    /// Caller parameters
    pub params: QueryParams,
    /// Whether `apikey` and `nonce` must be added
    pub requires_auth: bool,
}

impl RequestSpec {
    /// A request without credentials
    pub fn public(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: QueryParams::new(),
            requires_auth: false,
        }
    }

    /// A request carrying `apikey` and `nonce`
    pub fn private(method: impl Into<String>) -> Self {
        Self {
            requires_auth: true,
            ..Self::public(method)
        }
    }

    /// Add a parameter
    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key, value.to_string());
        self
    }

    /// Add a parameter only when a value is given
    pub fn with_optional_param(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.with_param(key, value),
            None => self,
        }
    }
}

/// A request ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// Full URL including the query string
    pub url: String,
    /// Hex HMAC-SHA512 of `url`, sent as the `apisign` header
    pub signature: String,
}

impl SignedRequest {
    /// Headers to send with this request
    pub fn headers(&self) -> [(&'static str, &str); 1] {
        [(SIGNATURE_HEADER, self.signature.as_str())]
    }
}

/// Builds [`SignedRequest`]s for one credential pair
#[derive(Debug, Clone, Copy)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    nonce: &'a dyn NonceSource,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer
    pub fn new(credentials: &'a Credentials, nonce: &'a dyn NonceSource) -> Self {
        Self { credentials, nonce }
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Build the URL and signature for `spec` against `base_url`
    ///
    /// A nonce is drawn only for private requests.
    pub fn build(&self, base_url: &str, spec: &RequestSpec) -> AuthResult<SignedRequest> {
        let mut params = spec.params.clone();

        if spec.requires_auth {
            params.insert(API_KEY_PARAM, self.credentials.api_key());
            params.insert(NONCE_PARAM, self.nonce.next_nonce().to_string());
        }

        let query = params.to_query_string()?;
        let mut url = format!("{}{}", base_url, spec.method);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }

        let signature = self.credentials.sign(&url)?;
        trace!(method = %spec.method, private = spec.requires_auth, "Signed request");

        Ok(SignedRequest { url, signature })
    }
}
