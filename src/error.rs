//! Error types for folio-client.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for folio-client.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ───────────────────────────────────────────────────────
    /// No credential pair available - log in first or restore a stored session.
    #[error("Not authenticated - log in or restore a stored session")]
    NotAuthenticated,

    /// Token refresh failed. The stored credential pair has been cleared.
    #[error("Token refresh failed: {0}")]
    RefreshFailed(String),

    /// Missing required credential field.
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    // ── API ──────────────────────────────────────────────────────────────────
    /// The backend returned a non-success status.
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the backend, if any.
        message: String,
    },

    // ── Storage ──────────────────────────────────────────────────────────────
    /// Storage I/O error.
    #[error("Storage I/O error at {path}: {message}")]
    StorageIo {
        /// Path that caused the error.
        path: PathBuf,
        /// Error description.
        message: String,
    },

    /// Generic storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    // ── Infrastructure ───────────────────────────────────────────────────────
    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,
}

impl Error {
    /// Returns true if this error indicates the session is gone and the
    /// user must log in again.
    #[must_use]
    pub fn requires_reauth(&self) -> bool {
        matches!(
            self,
            Error::NotAuthenticated
                | Error::RefreshFailed(_)
                | Error::MissingCredential(_)
                | Error::Api { status: 401, .. }
        )
    }

    /// Returns true for a 403 response: authenticated but not allowed.
    /// Never recoverable by a token refresh.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Error::Api { status: 403, .. })
    }

    /// Create a storage error from any message.
    pub fn storage(msg: impl Into<String>) -> Self {
        Error::Storage(msg.into())
    }

    /// Create a configuration error from any message.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Build an [`Error::Api`] from a non-success response, consuming its body.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        Error::Api { status, message }
    }
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_reauth() {
        assert!(Error::NotAuthenticated.requires_reauth());
        assert!(Error::RefreshFailed("expired".into()).requires_reauth());
        assert!(Error::Api {
            status: 401,
            message: String::new()
        }
        .requires_reauth());

        assert!(!Error::Api {
            status: 403,
            message: String::new()
        }
        .requires_reauth());
        assert!(!Error::Timeout.requires_reauth());
    }

    #[test]
    fn test_is_forbidden() {
        assert!(Error::Api {
            status: 403,
            message: String::new()
        }
        .is_forbidden());
        assert!(!Error::Api {
            status: 401,
            message: String::new()
        }
        .is_forbidden());
    }
}
