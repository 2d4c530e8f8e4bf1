//! Auth configuration types

use serde::{Deserialize, Serialize};

/// Signature method advertised in every signed request
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// OAuth protocol version advertised in every signed request
pub const OAUTH_VERSION: &str = "1.0";

/// OAuth1 consumer and access-token credentials.
///
/// Obtaining the access token is left to the caller; this crate only signs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuth1Credentials {
    /// Consumer (client) key
    pub consumer_key: String,
    /// Consumer (client) secret
    pub consumer_secret: String,
    /// Access token (resource owner key)
    pub access_token: String,
    /// Access token secret (resource owner secret)
    pub access_token_secret: String,
}

impl OAuth1Credentials {
    /// Create a new credential set
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
    }

    /// Names of the fields that are empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("consumer_key", &self.consumer_key),
            ("consumer_secret", &self.consumer_secret),
            ("access_token", &self.access_token),
            ("access_token_secret", &self.access_token_secret),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

impl std::fmt::Debug for OAuth1Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuth1Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"***")
            .field("access_token", &self.access_token)
            .field("access_token_secret", &"***")
            .finish()
    }
}
