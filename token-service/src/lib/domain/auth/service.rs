use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use credentials::PasswordHasher;
use credentials::TokenSigner;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::auth::clock::Clock;
use crate::auth::errors::AuthError;
use crate::auth::models::AuthResult;
use crate::auth::models::DenialReason;
use crate::auth::models::RefreshToken;
use crate::auth::models::TokenGrant;
use crate::auth::models::UserId;
use crate::auth::ports::AuthServicePort;
use crate::auth::ports::RefreshTokenStore;
use crate::auth::ports::UserDirectory;

/// Tunable values consumed by the orchestrator.
#[derive(Debug, Clone)]
pub struct AuthOptions {
    /// Access-token lifetime in minutes
    pub access_token_minutes: i64,
    /// Refresh-token lifetime in days
    pub refresh_token_days: i64,
    /// Raw byte length of a refresh token before base64 encoding
    pub refresh_token_length: usize,
}

impl Default for AuthOptions {
    fn default() -> Self {
        Self {
            access_token_minutes: 5,
            refresh_token_days: 7,
            refresh_token_length: 64,
        }
    }
}

/// Auth orchestrator.
///
/// Stateless coordinator over the injected directory, store, signer,
/// hasher, and clock. Holds no locks; every suspension point is a
/// collaborator call, so concurrent logins and refreshes only contend
/// inside the store.
pub struct AuthService<D, S, C>
where
    D: UserDirectory,
    S: RefreshTokenStore,
    C: Clock,
{
    directory: Arc<D>,
    store: Arc<S>,
    signer: TokenSigner,
    password_hasher: PasswordHasher,
    clock: C,
    options: AuthOptions,
}

impl<D, S, C> AuthService<D, S, C>
where
    D: UserDirectory,
    S: RefreshTokenStore,
    C: Clock,
{
    /// Create a new auth service with injected dependencies.
    pub fn new(directory: Arc<D>, store: Arc<S>, signer: TokenSigner, clock: C, options: AuthOptions) -> Self {
        Self {
            directory,
            store,
            signer,
            password_hasher: PasswordHasher::new(),
            clock,
            options,
        }
    }

    fn expires_in_seconds(&self) -> i64 {
        self.options.access_token_minutes * 60
    }

    /// Mint a new refresh token owned by `user_id`.
    ///
    /// `revoked_by_address` starts out holding the issuing origin; it is
    /// only overwritten if the token is later revoked.
    fn mint_refresh_token(
        &self,
        user_id: UserId,
        now: DateTime<Utc>,
        origin_address: &str,
    ) -> RefreshToken {
        let mut random_bytes = vec![0u8; self.options.refresh_token_length];
        OsRng.fill_bytes(&mut random_bytes);

        RefreshToken {
            token: BASE64.encode(&random_bytes),
            user_id,
            created_at: now,
            expires_at: now + Duration::days(self.options.refresh_token_days),
            revoked: false,
            revoked_at: None,
            revoked_by_address: origin_address.to_string(),
            replaced_by_token: None,
            reason_revoked: None,
        }
    }
}

#[async_trait]
impl<D, S, C> AuthServicePort for AuthService<D, S, C>
where
    D: UserDirectory,
    S: RefreshTokenStore,
    C: Clock,
{
    async fn login(
        &self,
        username: &str,
        password: &str,
        origin_address: &str,
    ) -> Result<AuthResult, AuthError> {
        let user = match self.directory.find_by_username(username).await? {
            Some(user) if user.active => user,
            // Unknown and inactive users take the same exit as a wrong
            // password: one variant, one message, no enumeration signal.
            _ => {
                tracing::debug!(origin = origin_address, "Login denied: user lookup");
                return Ok(AuthResult::Denied(DenialReason::InvalidCredentials));
            }
        };

        let password_valid =
            self.password_hasher
                .verify(password, &user.password_hash, &user.password_salt)?;

        if !password_valid {
            tracing::debug!(origin = origin_address, "Login denied: credential mismatch");
            return Ok(AuthResult::Denied(DenialReason::InvalidCredentials));
        }

        let now = self.clock.now();
        let access_token = self
            .signer
            .issue(&user.id.to_string(), &user.username, now, None)?;

        let refresh_token = self.mint_refresh_token(user.id, now, origin_address);
        let refresh_token_string = refresh_token.token.clone();

        self.store.store(refresh_token).await?;

        tracing::info!(user_id = %user.id, origin = origin_address, "Login granted");

        Ok(AuthResult::Granted(TokenGrant {
            access_token,
            refresh_token: refresh_token_string,
            expires_in: self.expires_in_seconds(),
        }))
    }

    async fn refresh(
        &self,
        refresh_token: &str,
        origin_address: &str,
    ) -> Result<AuthResult, AuthError> {
        let now = self.clock.now();

        let existing = match self.store.get(refresh_token).await? {
            Some(existing) => existing,
            None => {
                tracing::debug!(origin = origin_address, "Refresh denied: unknown token");
                return Ok(AuthResult::Denied(DenialReason::InvalidRefreshToken));
            }
        };

        if !existing.is_active(now) {
            // Tidy-up write only for tokens that are both revoked and
            // past expiry; an expired-but-unrevoked token is denied
            // without being persisted as revoked and stays unrevoked in
            // the store.
            if existing.revoked && now > existing.expires_at {
                let mut stale = existing;
                stale.revoked = true;
                stale.revoked_at = Some(now);
                stale.revoked_by_address = origin_address.to_string();
                stale.reason_revoked = Some("Expired.".to_string());

                self.store.update(stale).await?;
            }

            tracing::debug!(origin = origin_address, "Refresh denied: inactive token");
            return Ok(AuthResult::Denied(DenialReason::RefreshTokenInactive));
        }

        let user = match self.directory.find_by_id(&existing.user_id).await? {
            Some(user) if user.active => user,
            _ => {
                tracing::debug!(
                    user_id = %existing.user_id,
                    origin = origin_address,
                    "Refresh denied: owner unavailable"
                );
                return Ok(AuthResult::Denied(DenialReason::UserUnavailable));
            }
        };

        let replacement = self.mint_refresh_token(user.id, now, origin_address);
        let replacement_string = replacement.token.clone();

        let mut rotated = existing;
        rotated.revoked = true;
        rotated.revoked_at = Some(now);
        rotated.revoked_by_address = origin_address.to_string();
        rotated.replaced_by_token = Some(replacement_string.clone());
        rotated.reason_revoked = Some("Replaced by new token.".to_string());

        // Revoke the old record before publishing its replacement, so no
        // reader ever sees two active tokens from one rotation.
        self.store.update(rotated).await?;
        self.store.store(replacement).await?;

        let access_token = self
            .signer
            .issue(&user.id.to_string(), &user.username, now, None)?;

        tracing::info!(user_id = %user.id, origin = origin_address, "Refresh token rotated");

        Ok(AuthResult::Granted(TokenGrant {
            access_token,
            refresh_token: replacement_string,
            expires_in: self.expires_in_seconds(),
        }))
    }
}
