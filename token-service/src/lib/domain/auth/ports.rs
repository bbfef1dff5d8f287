use async_trait::async_trait;

use crate::auth::errors::AuthError;
use crate::auth::errors::DirectoryError;
use crate::auth::errors::StoreError;
use crate::auth::models::AuthResult;
use crate::auth::models::RefreshToken;
use crate::auth::models::User;
use crate::auth::models::UserId;

/// Port for the auth orchestration service.
///
/// Cancellation is caller-driven: both operations suspend only at
/// collaborator boundaries, so dropping the future abandons the request.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Authenticate a credential pair and issue a token pair.
    ///
    /// # Arguments
    /// * `username` - Username, matched case-insensitively
    /// * `password` - Plaintext password
    /// * `origin_address` - Network origin of the requester
    ///
    /// # Returns
    /// Granted with a token pair, or Denied with a reason
    ///
    /// # Errors
    /// * `AuthError` - A collaborator (directory, store, signer) failed
    async fn login(
        &self,
        username: &str,
        password: &str,
        origin_address: &str,
    ) -> Result<AuthResult, AuthError>;

    /// Exchange a still-valid refresh token for a new token pair,
    /// revoking the presented token.
    ///
    /// # Arguments
    /// * `refresh_token` - Opaque token string from a previous grant
    /// * `origin_address` - Network origin of the requester
    ///
    /// # Returns
    /// Granted with a fresh token pair, or Denied with a reason
    ///
    /// # Errors
    /// * `AuthError` - A collaborator (directory, store, signer) failed
    async fn refresh(
        &self,
        refresh_token: &str,
        origin_address: &str,
    ) -> Result<AuthResult, AuthError>;
}

/// Read-only resolution of users.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Retrieve a user by username, case-insensitive exact match.
    ///
    /// # Returns
    /// Immutable user snapshot (None if not found)
    ///
    /// # Errors
    /// * `Unavailable` - Lookup failed
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DirectoryError>;

    /// Retrieve a user by identifier.
    ///
    /// # Returns
    /// Immutable user snapshot (None if not found)
    ///
    /// # Errors
    /// * `Unavailable` - Lookup failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DirectoryError>;
}

/// Persistence for refresh tokens, keyed by token string.
///
/// Implementations must be safe under concurrent callers with distinct
/// keys; per-key write ordering is last-writer-wins. An implementation
/// wanting to close the race between two rotations of the same token
/// would add compare-and-swap semantics to `update`.
#[async_trait]
pub trait RefreshTokenStore: Send + Sync + 'static {
    /// Insert or overwrite the record under `token.token`.
    ///
    /// # Errors
    /// * `Unavailable` - Write failed
    async fn store(&self, token: RefreshToken) -> Result<(), StoreError>;

    /// Look up a record by token string. No side effects.
    ///
    /// # Errors
    /// * `Unavailable` - Read failed
    async fn get(&self, token: &str) -> Result<Option<RefreshToken>, StoreError>;

    /// Overwrite the record under the token's key.
    ///
    /// Upserts when the key is unknown rather than erroring; callers
    /// rely on there being no unknown-key failure case.
    ///
    /// # Errors
    /// * `Unavailable` - Write failed
    async fn update(&self, token: RefreshToken) -> Result<(), StoreError>;
}
