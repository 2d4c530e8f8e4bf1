//! Authenticator implementation
//!
//! Signs outgoing requests with an OAuth1 HMAC-SHA1 `Authorization` header
//! (RFC 5849). Every request gets a fresh nonce and timestamp.

use super::types::{OAuth1Credentials, OAUTH_VERSION, SIGNATURE_METHOD};
use crate::error::{Error, Result};
use base64::Engine as _;
use chrono::Utc;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Request;
use sha1::Sha1;
use url::Url;
use uuid::Uuid;

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 unreserved characters stay literal, everything else is escaped
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a value the way OAuth1 signature base strings require
pub fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Authenticator handles applying OAuth1 signatures to HTTP requests
#[derive(Clone)]
pub struct Authenticator {
    credentials: OAuth1Credentials,
}

impl Authenticator {
    /// Create a new authenticator for the given credentials
    pub fn new(credentials: OAuth1Credentials) -> Self {
        Self { credentials }
    }

    /// Sign a built request in place
    pub fn sign(&self, request: &mut Request) -> Result<()> {
        let nonce = Uuid::new_v4().simple().to_string();
        let timestamp = Utc::now().timestamp().to_string();
        let header =
            self.authorization_header(request.method().as_str(), request.url(), &nonce, &timestamp);

        let value = HeaderValue::from_str(&header)
            .map_err(|e| Error::config(format!("Invalid OAuth1 header: {e}")))?;
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }

    /// Build the `Authorization` header value for a request.
    ///
    /// The URL's query pairs are included in the signature.
    pub fn authorization_header(
        &self,
        method: &str,
        url: &Url,
        nonce: &str,
        timestamp: &str,
    ) -> String {
        let oauth_params = self.oauth_params(nonce, timestamp);

        let mut all_params: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        all_params.extend(oauth_params.iter().cloned());

        let signature = self.signature(method, url, &all_params);

        let mut fields: Vec<String> = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect();
        fields.push(format!("oauth_signature=\"{}\"", percent_encode(&signature)));
        fields.sort();

        format!("OAuth {}", fields.join(", "))
    }

    /// Compute the base64 HMAC-SHA1 signature over the given parameters
    pub fn signature(&self, method: &str, url: &Url, params: &[(String, String)]) -> String {
        let base = signature_base_string(method, url, params);
        let key = format!(
            "{}&{}",
            percent_encode(&self.credentials.consumer_secret),
            percent_encode(&self.credentials.access_token_secret)
        );

        let mut mac =
            HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
        mac.update(base.as_bytes());
        base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes())
    }

    fn oauth_params(&self, nonce: &str, timestamp: &str) -> Vec<(String, String)> {
        vec![
            (
                "oauth_consumer_key".to_string(),
                self.credentials.consumer_key.clone(),
            ),
            ("oauth_nonce".to_string(), nonce.to_string()),
            (
                "oauth_signature_method".to_string(),
                SIGNATURE_METHOD.to_string(),
            ),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            ("oauth_token".to_string(), self.credentials.access_token.clone()),
            ("oauth_version".to_string(), OAUTH_VERSION.to_string()),
        ]
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Build the OAuth1 signature base string: `METHOD&url&params`
pub fn signature_base_string(method: &str, url: &Url, params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let normalized = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(&base_url(url)),
        percent_encode(&normalized)
    )
}

/// Scheme, host, non-default port and path; no query or fragment
fn base_url(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default().to_lowercase();
    match url.port() {
        Some(port) => format!("{}://{}:{}{}", url.scheme(), host, port, url.path()),
        None => format!("{}://{}{}", url.scheme(), host, url.path()),
    }
}
