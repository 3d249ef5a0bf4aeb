//! File-based credential storage with secure permissions.
//!
//! Stores the credential pair in a JSON file at a configurable path, with:
//! - File permissions set to 0600 on Unix (owner read/write only)
//! - Parent directories created with 0700 permissions
//! - Automatic `~` expansion to the home directory
//! - Atomic writes via temp file + rename

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::instrument;

use super::TokenStorage;
use crate::error::{Error, Result};
use crate::models::auth::TokenInfo;

/// Default config directory name under the user's home.
const CONFIG_DIR: &str = ".config/folio-client";

/// Default credential file name.
const TOKEN_FILE: &str = "auth.json";

/// File permissions for the credential file (Unix only): owner read/write.
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

/// Directory permissions (Unix only): owner read/write/execute.
#[cfg(unix)]
const DIR_MODE: u32 = 0o700;

/// File-based credential storage.
///
/// The file holds exactly one serialized credential pair; removing the file
/// is the canonical logged-out state.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    /// Expanded path to the credential file.
    path: PathBuf,
}

impl FileTokenStorage {
    /// Create a new storage backed by the given path.
    ///
    /// The path can include `~`, which is expanded to the user's home
    /// directory.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = expand_tilde(path.as_ref())?;
        Ok(Self { path })
    }

    /// Create storage at the default path,
    /// `~/.config/folio-client/auth.json`.
    pub fn default_path() -> Result<Self> {
        let home =
            dirs::home_dir().ok_or_else(|| Error::config("Cannot determine home directory"))?;
        let path = home.join(CONFIG_DIR).join(TOKEN_FILE);
        Ok(Self { path })
    }

    /// Path to the credential file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_file(&self) -> Result<Option<TokenInfo>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::StorageIo {
                path: self.path.clone(),
                message: format!("failed to read credential file: {}", e),
            })?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let token: TokenInfo = serde_json::from_str(&content).map_err(|e| {
            Error::storage(format!(
                "failed to parse credential file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(Some(token))
    }

    #[instrument(skip(self, token))]
    async fn write_file(&self, token: &TokenInfo) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| Error::StorageIo {
                        path: parent.to_path_buf(),
                        message: format!("failed to create directory: {}", e),
                    })?;

                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    let perms = std::fs::Permissions::from_mode(DIR_MODE);
                    tokio::fs::set_permissions(parent, perms).await.map_err(|e| {
                        Error::StorageIo {
                            path: parent.to_path_buf(),
                            message: format!("failed to set directory permissions: {}", e),
                        }
                    })?;
                }
            }
        }

        let content = serde_json::to_string_pretty(token)?;

        // Write to a temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, &content)
            .await
            .map_err(|e| Error::StorageIo {
                path: temp_path.clone(),
                message: format!("failed to write temp file: {}", e),
            })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(FILE_MODE);
            tokio::fs::set_permissions(&temp_path, perms)
                .await
                .map_err(|e| Error::StorageIo {
                    path: temp_path.clone(),
                    message: format!("failed to set file permissions: {}", e),
                })?;
        }

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| Error::StorageIo {
                path: self.path.clone(),
                message: format!("failed to rename temp file: {}", e),
            })?;

        Ok(())
    }
}

#[async_trait]
impl TokenStorage for FileTokenStorage {
    #[instrument(skip(self))]
    async fn load(&self) -> Result<Option<TokenInfo>> {
        self.read_file().await
    }

    #[instrument(skip(self, token))]
    async fn save(&self, token: &TokenInfo) -> Result<()> {
        self.write_file(token).await
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<()> {
        if self.path.exists() {
            tokio::fs::remove_file(&self.path)
                .await
                .map_err(|e| Error::StorageIo {
                    path: self.path.clone(),
                    message: format!("failed to remove credential file: {}", e),
                })?;
        }
        Ok(())
    }

    async fn exists(&self) -> Result<bool> {
        Ok(self.path.exists())
    }

    fn name(&self) -> &str {
        "file"
    }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(s) = path.to_str() else {
        return Ok(path.to_path_buf());
    };

    if s == "~" || s.starts_with("~/") {
        let home =
            dirs::home_dir().ok_or_else(|| Error::config("Cannot determine home directory"))?;
        if s == "~" {
            return Ok(home);
        }
        return Ok(home.join(&s[2..]));
    }

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.json");
        let storage = FileTokenStorage::new(&path).unwrap();

        assert!(storage.load().await.unwrap().is_none());

        let token = TokenInfo::new("access", "refresh", 3600);
        storage.save(&token).await.unwrap();

        let loaded = storage.load().await.unwrap().unwrap();
        assert_eq!(loaded, token);

        storage.clear().await.unwrap();
        assert!(storage.load().await.unwrap().is_none());
        assert!(!path.exists());

        // clear again succeeds
        storage.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("auth.json");
        let storage = FileTokenStorage::new(&path).unwrap();

        storage
            .save(&TokenInfo::new("a", "r", 1))
            .await
            .unwrap();
        assert!(path.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.json");
        let storage = FileTokenStorage::new(&path).unwrap();

        storage
            .save(&TokenInfo::new("a", "r", 1))
            .await
            .unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let storage = FileTokenStorage::new(&path).unwrap();
        assert!(storage.load().await.is_err());
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde(Path::new("~/tokens.json")).unwrap();
        assert!(!expanded.to_string_lossy().contains('~'));

        let plain = expand_tilde(Path::new("/tmp/tokens.json")).unwrap();
        assert_eq!(plain, PathBuf::from("/tmp/tokens.json"));
    }
}
