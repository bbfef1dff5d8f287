use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::auth::errors::StoreError;
use crate::auth::models::RefreshToken;
use crate::auth::ports::RefreshTokenStore;

/// In-process refresh-token store.
///
/// A single map behind an async `RwLock`, keyed by token string.
/// Writes are last-writer-wins per key; records are never evicted and
/// do not survive a restart. Callers needing durability or
/// compare-and-swap rotation supply their own implementation of the
/// port.
pub struct InMemoryRefreshTokenStore {
    tokens: RwLock<HashMap<String, RefreshToken>>,
}

impl InMemoryRefreshTokenStore {
    pub fn new() -> Self {
        Self {
            tokens: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRefreshTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenStore for InMemoryRefreshTokenStore {
    async fn store(&self, token: RefreshToken) -> Result<(), StoreError> {
        let mut tokens = self.tokens.write().await;
        tokens.insert(token.token.clone(), token);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<RefreshToken>, StoreError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token).cloned())
    }

    async fn update(&self, token: RefreshToken) -> Result<(), StoreError> {
        // Same write path as `store`: updates to unknown keys upsert
        // instead of failing, per the port contract.
        let mut tokens = self.tokens.write().await;
        tokens.insert(token.token.clone(), token);
        Ok(())
    }
}
