use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by an issued access token.
///
/// Standard RFC 7519 claims plus `unique_name` for the username, with
/// caller-supplied custom fields flattened in via `extra`. Every issued
/// token gets a fresh random `jti`, so two tokens minted for the same
/// user in the same second remain distinguishable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessClaims {
    /// Subject (user identifier)
    pub sub: String,

    /// JWT ID (unique per issued token)
    pub jti: String,

    /// Username of the subject
    pub unique_name: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Not before (Unix timestamp)
    pub nbf: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Additional custom fields (flattened into the token)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl AccessClaims {
    /// Check if the claims are expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
