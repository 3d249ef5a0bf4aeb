//! Credential storage backends.
//!
//! Provides the [`TokenStorage`] trait and implementations:
//! - [`FileTokenStorage`] - JSON file with 0600 permissions
//! - [`MemoryTokenStorage`] - In-memory (testing)
//!
//! The storage holds a single durable credential pair; its absence is the
//! canonical "logged out" state read at process start. Writes are always
//! whole-pair replacements, never partial updates.

mod file;
mod memory;

use async_trait::async_trait;

pub use file::FileTokenStorage;
pub use memory::MemoryTokenStorage;

use crate::error::Result;
use crate::models::auth::TokenInfo;

/// Trait for credential storage backends.
///
/// All implementations must be thread-safe (`Send + Sync`) so the storage
/// can be shared between the session, the authenticated channel, and the
/// refresh coordinator. Implementations must never log token values.
#[async_trait]
pub trait TokenStorage: Send + Sync {
    /// Load the stored credential pair, if any.
    async fn load(&self) -> Result<Option<TokenInfo>>;

    /// Persist a complete credential pair, overwriting any prior value.
    async fn save(&self, token: &TokenInfo) -> Result<()>;

    /// Remove the stored pair. Succeeds even if nothing is stored.
    async fn clear(&self) -> Result<()>;

    /// Check whether a pair is stored.
    async fn exists(&self) -> Result<bool> {
        Ok(self.load().await?.is_some())
    }

    /// Name of this storage backend, for logging.
    fn name(&self) -> &str {
        "unknown"
    }
}

/// Blanket impl for `Arc<T>`.
#[async_trait]
impl<T: TokenStorage + ?Sized> TokenStorage for std::sync::Arc<T> {
    async fn load(&self) -> Result<Option<TokenInfo>> {
        (**self).load().await
    }
    async fn save(&self, token: &TokenInfo) -> Result<()> {
        (**self).save(token).await
    }
    async fn clear(&self) -> Result<()> {
        (**self).clear().await
    }
    async fn exists(&self) -> Result<bool> {
        (**self).exists().await
    }
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Blanket impl for `Box<T>`.
#[async_trait]
impl<T: TokenStorage + ?Sized> TokenStorage for Box<T> {
    async fn load(&self) -> Result<Option<TokenInfo>> {
        (**self).load().await
    }
    async fn save(&self, token: &TokenInfo) -> Result<()> {
        (**self).save(token).await
    }
    async fn clear(&self) -> Result<()> {
        (**self).clear().await
    }
    async fn exists(&self) -> Result<bool> {
        (**self).exists().await
    }
    fn name(&self) -> &str {
        (**self).name()
    }
}
