use std::collections::HashMap;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::AccessClaims;
use super::errors::TokenError;

/// Issues and validates signed access tokens.
///
/// Uses HS256 (HMAC with SHA-256) over a symmetric key. Issuer, audience,
/// and validity window are fixed at construction; the current time is
/// passed into `issue` by the caller, so issuance is a pure function of
/// its inputs plus the random `jti`.
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    issuer: String,
    audience: String,
    validity_minutes: i64,
}

impl TokenSigner {
    /// Create a new token signer.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing key (at least 32 bytes for HS256)
    /// * `issuer` - `iss` claim stamped into every token
    /// * `audience` - `aud` claim stamped into every token
    /// * `validity_minutes` - Access-token lifetime in minutes
    pub fn new(
        secret: &[u8],
        issuer: impl Into<String>,
        audience: impl Into<String>,
        validity_minutes: i64,
    ) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            issuer: issuer.into(),
            audience: audience.into(),
            validity_minutes,
        }
    }

    /// Issue a signed access token for a user.
    ///
    /// The claim set carries `sub` = user id, a fresh random `jti`,
    /// `unique_name` = username, and a validity window of
    /// [`now`, `now` + validity_minutes].
    ///
    /// # Arguments
    /// * `subject` - User identifier for the `sub` claim
    /// * `username` - Username for the `unique_name` claim
    /// * `now` - Issuance instant (start of the validity window)
    /// * `extra` - Optional additional claims merged into the token
    ///
    /// # Returns
    /// Encoded, signed token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(
        &self,
        subject: &str,
        username: &str,
        now: DateTime<Utc>,
        extra: Option<HashMap<String, serde_json::Value>>,
    ) -> Result<String, TokenError> {
        let expires = now + Duration::minutes(self.validity_minutes);

        let claims = AccessClaims {
            sub: subject.to_string(),
            jti: uuid::Uuid::new_v4().to_string(),
            unique_name: username.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            nbf: now.timestamp(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
            extra: extra.unwrap_or_default(),
        };

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate an access token.
    ///
    /// Checks signature, issuer, audience, and expiry. This is the
    /// verification half used by resource servers; the issuing service
    /// only needs it in tests.
    ///
    /// # Errors
    /// * `TokenExpired` - Token is past its `exp` claim
    /// * `DecodingFailed` - Signature invalid, wrong issuer/audience, or malformed
    pub fn decode(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let token_data =
            decode::<AccessClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    _ => TokenError::DecodingFailed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
