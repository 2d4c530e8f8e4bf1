//! Authentication module
//!
//! Supports: OAuth1 (HMAC-SHA1) request signing
//!
//! The `Authenticator` signs each outgoing request. The OAuth1 handshake
//! that produces the access token is outside this crate.

mod authenticator;
mod types;

pub use authenticator::{percent_encode, signature_base_string, Authenticator};
pub use types::{OAuth1Credentials, OAUTH_VERSION, SIGNATURE_METHOD};

#[cfg(test)]
mod tests;
