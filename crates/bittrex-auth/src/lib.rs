//! Credentials, nonces and request signing for the Bittrex v1.1 API
//!
//! Every Bittrex request is a GET whose parameters travel in the query
//! string. Private requests additionally carry `apikey` and `nonce`
//! parameters, and every request is sent with an `apisign` header holding
//! the hex HMAC-SHA512 of the full URL keyed by the API secret.
//!
//! This crate builds those URLs and signatures. It performs no I/O.
//!
//! # Example
//!
//! ```
//! use bittrex_auth::{Credentials, RequestSigner, RequestSpec, UnixSecondsNonce};
//!
//! # fn main() -> Result<(), bittrex_auth::AuthError> {
//! let creds = Credentials::new("my-key", "my-secret")?;
//! let nonce = UnixSecondsNonce::new();
//!
//! let spec = RequestSpec::private("account/getbalance").with_param("currency", "BTC");
//! let signed = RequestSigner::new(&creds, &nonce).build("https://bittrex.com/api/v1.1/", &spec)?;
//!
//! assert!(signed.url.contains("apikey=my-key"));
//! assert_eq!(signed.signature.len(), 128);
//! # Ok(())
//! # }
//! ```

mod credentials;
mod error;
mod nonce;
mod request;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use nonce::{FixedNonce, IncrementingNonce, NonceSource, UnixSecondsNonce};
pub use request::{QueryParams, RequestSigner, RequestSpec, SignedRequest, SIGNATURE_HEADER};
