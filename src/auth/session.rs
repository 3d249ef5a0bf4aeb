//! Client-side session state: authentication status and user identity.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::auth::api;
use crate::config;
use crate::error::Result;
use crate::models::auth::{LoginRequest, TokenInfo, UserInfo};
use crate::storage::TokenStorage;
use crate::transport::HttpClient;

#[derive(Debug, Default, Clone)]
struct SessionState {
    token: Option<TokenInfo>,
    user: Option<UserInfo>,
    loading: bool,
}

/// Session state shared by all consumers of a client.
///
/// Holds a cached copy of the credential pair for status checks without
/// storage I/O. The [`TokenStorage`] stays the source of truth for
/// requests - the authenticated channel always reads it at send time - and
/// the cache is reconciled against it after every identity fetch, since the
/// channel's 401 recovery may rotate the pair silently.
pub struct Session {
    /// Plain HTTP client for login; no interception.
    client: reqwest::Client,
    base_url: String,
    storage: Arc<dyn TokenStorage>,
    http: Arc<HttpClient>,
    state: RwLock<SessionState>,
}

impl Session {
    /// Create a session over the given storage and authenticated channel.
    pub(crate) fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        storage: Arc<dyn TokenStorage>,
        http: Arc<HttpClient>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            storage,
            http,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Whether a credential pair with a usable access token is present.
    pub async fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .await
            .token
            .as_ref()
            .is_some_and(|t| !t.access_token.is_empty())
    }

    /// Snapshot of the cached credential pair.
    pub async fn token_info(&self) -> Option<TokenInfo> {
        self.state.read().await.token.clone()
    }

    /// Snapshot of the fetched user identity, if any.
    pub async fn user_info(&self) -> Option<UserInfo> {
        self.state.read().await.user.clone()
    }

    /// Whether a login or identity fetch is outstanding.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// Load any persisted pair at process start and, if present, fetch the
    /// user identity.
    ///
    /// Returns `true` if a session was restored. A terminal identity-fetch
    /// failure forces logout and propagates.
    pub async fn restore(&self) -> Result<bool> {
        let stored = self.storage.load().await?;
        match stored {
            Some(token) if !token.access_token.is_empty() => {
                {
                    let mut state = self.state.write().await;
                    state.token = Some(token);
                }
                debug!("Restored stored session");
                self.refresh_identity().await?;
                Ok(true)
            }
            Some(_) => {
                // Storage only ever holds whole pairs; discard anything
                // partial rather than leave it behind.
                warn!("Discarding stored credential pair with no access token");
                self.storage.clear().await?;
                Ok(false)
            }
            None => Ok(false),
        }
    }

    /// Log in and fetch the user identity.
    ///
    /// On success the whole credential pair is persisted before the cache
    /// is updated. Any failure - bad credentials, a partial response, or a
    /// terminal identity fetch - leaves no session state behind.
    pub async fn login(&self, request: &LoginRequest) -> Result<UserInfo> {
        {
            let mut state = self.state.write().await;
            state.loading = true;
        }

        let token = match api::login(&self.client, &self.base_url, request).await {
            Ok(token) => token,
            Err(e) => {
                self.logout().await;
                return Err(e);
            }
        };

        if let Err(e) = self.storage.save(&token).await {
            self.logout().await;
            return Err(e);
        }

        {
            let mut state = self.state.write().await;
            state.token = Some(token);
        }
        info!("Logged in");

        // A pair just became present, so identity must be fetched now;
        // refresh_identity forces logout on terminal failure.
        self.refresh_identity().await
    }

    /// Clear the session unconditionally. Idempotent.
    ///
    /// A storage failure is logged but never keeps the in-memory session
    /// alive.
    pub async fn logout(&self) {
        if let Err(e) = self.storage.clear().await {
            warn!(error = %e, "Failed to clear stored credentials");
        }

        let mut state = self.state.write().await;
        state.token = None;
        state.user = None;
        state.loading = false;
        debug!("Session cleared");
    }

    /// Fetch `/auth/me` through the authenticated channel and reconcile the
    /// cached pair with storage.
    ///
    /// The channel transparently refreshes an expired access token during
    /// this call; if storage then holds a pair with a different refresh
    /// token, the persisted value replaces the cached copy. A failure here
    /// means even the refresh coordinator could not recover, so the session
    /// is force-logged-out and the error propagates.
    pub async fn refresh_identity(&self) -> Result<UserInfo> {
        {
            let mut state = self.state.write().await;
            state.loading = true;
        }

        match self.http.get_json::<UserInfo>(config::ME_PATH).await {
            Ok(user) => {
                let persisted = self.storage.load().await.ok().flatten();

                let mut state = self.state.write().await;
                state.user = Some(user.clone());
                if let Some(new_token) = persisted {
                    let rotated = state
                        .token
                        .as_ref()
                        .map(|t| t.refresh_token != new_token.refresh_token)
                        .unwrap_or(true);
                    if rotated {
                        debug!("Adopting rotated credential pair from storage");
                        state.token = Some(new_token);
                    }
                }
                state.loading = false;
                Ok(user)
            }
            Err(e) => {
                warn!(error = %e, "Identity fetch failed, forcing logout");
                self.logout().await;
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("storage", &self.storage.name())
            .finish()
    }
}
