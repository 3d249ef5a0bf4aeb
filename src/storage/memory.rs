//! In-memory credential storage for testing.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::TokenStorage;
use crate::error::Result;
use crate::models::auth::TokenInfo;

/// In-memory credential storage, primarily for testing.
#[derive(Debug)]
pub struct MemoryTokenStorage {
    token: RwLock<Option<TokenInfo>>,
}

impl MemoryTokenStorage {
    /// Create a new empty in-memory storage.
    pub fn new() -> Self {
        Self {
            token: RwLock::new(None),
        }
    }

    /// Create storage pre-seeded with a credential pair.
    pub fn with_token(token: TokenInfo) -> Self {
        Self {
            token: RwLock::new(Some(token)),
        }
    }
}

impl Default for MemoryTokenStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenStorage for MemoryTokenStorage {
    async fn load(&self) -> Result<Option<TokenInfo>> {
        Ok(self.token.read().await.clone())
    }

    async fn save(&self, token: &TokenInfo) -> Result<()> {
        *self.token.write().await = Some(token.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.token.write().await = None;
        Ok(())
    }

    async fn exists(&self) -> Result<bool> {
        Ok(self.token.read().await.is_some())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage() {
        let storage = MemoryTokenStorage::new();

        assert!(storage.load().await.unwrap().is_none());
        assert!(!storage.exists().await.unwrap());

        let token = TokenInfo::new("access", "refresh", 3600);
        storage.save(&token).await.unwrap();

        assert!(storage.exists().await.unwrap());
        let loaded = storage.load().await.unwrap().unwrap();
        assert_eq!(loaded.refresh_token, "refresh");

        storage.clear().await.unwrap();
        assert!(!storage.exists().await.unwrap());

        // clear is idempotent
        storage.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_save_overwrites_wholesale() {
        let storage = MemoryTokenStorage::with_token(TokenInfo::new("old-a", "old-r", 1));

        storage
            .save(&TokenInfo::new("new-a", "new-r", 2))
            .await
            .unwrap();

        let loaded = storage.load().await.unwrap().unwrap();
        assert_eq!(loaded.access_token, "new-a");
        assert_eq!(loaded.refresh_token, "new-r");
    }
}
