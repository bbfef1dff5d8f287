use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::errors::UserIdError;

/// User snapshot as resolved from the directory.
///
/// Immutable from this service's perspective except for the `active`
/// flag, which administrative tooling may flip out of band.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
    pub password_salt: String,
    pub active: bool,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One grant of renewal capability, keyed in the store by its token string.
///
/// `revoked_by_address` carries the issuing origin from the moment of
/// creation and is only overwritten when a revocation actually happens;
/// the field doubles as "origin" until then.
#[derive(Debug, Clone)]
pub struct RefreshToken {
    pub token: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
    pub revoked_at: Option<DateTime<Utc>>,
    pub revoked_by_address: String,
    pub replaced_by_token: Option<String>,
    pub reason_revoked: Option<String>,
}

impl RefreshToken {
    /// A token is active while it is unrevoked and not past expiry.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.revoked && now <= self.expires_at
    }
}

/// Outcome of a login or refresh operation.
///
/// A sum type so a grant always carries its tokens and a denial always
/// carries its reason; there is no partially-populated state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthResult {
    Granted(TokenGrant),
    Denied(DenialReason),
}

impl AuthResult {
    pub fn is_granted(&self) -> bool {
        matches!(self, AuthResult::Granted(_))
    }
}

/// Freshly issued token pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGrant {
    /// Signed access token
    pub access_token: String,
    /// Opaque refresh token string
    pub refresh_token: String,
    /// Access-token lifetime in seconds
    pub expires_in: i64,
}

/// Why an operation was denied.
///
/// The three credential-related login causes (unknown user, inactive
/// user, wrong password) share one variant and one message so callers
/// cannot enumerate usernames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// Unknown user, inactive user, or wrong password
    InvalidCredentials,
    /// Presented refresh token is unknown to the store
    InvalidRefreshToken,
    /// Refresh token is known but revoked or expired
    RefreshTokenInactive,
    /// Token was valid but its owner is gone or deactivated
    UserUnavailable,
}

impl DenialReason {
    /// User-visible reason string. Deliberately short and free of any
    /// detail about which internal lookup failed.
    pub fn message(&self) -> &'static str {
        match self {
            DenialReason::InvalidCredentials => "Invalid username or password.",
            DenialReason::InvalidRefreshToken => "Invalid refresh token.",
            DenialReason::RefreshTokenInactive => "Refresh token is no longer valid.",
            DenialReason::UserUnavailable => "User not found or inactive.",
        }
    }
}
