//! Refresh coordination: at most one in-flight refresh, queued followers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::auth::api;
use crate::error::{Error, Result};
use crate::models::auth::TokenInfo;
use crate::storage::TokenStorage;

/// Outcome delivered to queued followers.
///
/// The error side is a plain message so the outcome stays cloneable across
/// an arbitrary number of waiters; followers rewrap it as
/// [`Error::RefreshFailed`].
type WaitOutcome = std::result::Result<TokenInfo, String>;

/// Coordinator state. The queue is non-empty only while a cycle is in
/// flight, and settlement is the sole writer that drains it.
enum RefreshState {
    /// No refresh outstanding.
    Idle,
    /// One refresh call outstanding; the queue is accepting waiters.
    Refreshing {
        waiters: Vec<oneshot::Sender<WaitOutcome>>,
    },
}

/// Serializes token refreshes across concurrent callers.
///
/// The first caller to observe `Idle` becomes the leader for one cycle: it
/// flips the state, performs the network refresh through the
/// unauthenticated client, persists the new pair (or clears storage on
/// failure - forced logout), and then settles every queued waiter exactly
/// once. Callers arriving while a cycle is in flight enqueue a oneshot and
/// suspend until settlement.
///
/// The state check and transition happen under one lock acquisition with no
/// intervening await, so exactly one caller per cycle can claim leadership.
/// The lock is a `std::sync::Mutex` for exactly that reason: it is never
/// held across an await, and a synchronous lock lets the abandonment guard
/// settle the queue from `Drop` if the leader's future is cancelled.
pub struct RefreshCoordinator {
    /// Plain HTTP client for the refresh call; no interception.
    client: reqwest::Client,
    base_url: String,
    storage: Arc<dyn TokenStorage>,
    state: Mutex<RefreshState>,
}

impl RefreshCoordinator {
    /// Create a coordinator over the given storage.
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        storage: Arc<dyn TokenStorage>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            storage,
            state: Mutex::new(RefreshState::Idle),
        }
    }

    /// Obtain a fresh credential pair, joining an in-flight cycle if one
    /// exists.
    ///
    /// On success the new pair has been persisted and is returned to every
    /// caller in the cycle. On failure the stored pair has been cleared and
    /// every caller in the cycle receives the refresh error. If the leader
    /// is cancelled mid-cycle the queue is failed and the state reset, so
    /// the next caller starts a fresh cycle.
    pub async fn refresh(&self) -> Result<TokenInfo> {
        let waiter = {
            let mut state = self.lock_state();
            match &mut *state {
                RefreshState::Idle => {
                    *state = RefreshState::Refreshing {
                        waiters: Vec::new(),
                    };
                    None
                }
                RefreshState::Refreshing { waiters } => {
                    let (tx, rx) = oneshot::channel();
                    waiters.push(tx);
                    debug!(queued = waiters.len(), "Refresh in flight, queueing caller");
                    Some(rx)
                }
            }
        };

        match waiter {
            None => self.lead().await,
            Some(rx) => match rx.await {
                Ok(Ok(token)) => Ok(token),
                Ok(Err(message)) => Err(Error::RefreshFailed(message)),
                // Settlement always sends before dropping; a closed channel
                // means the process is tearing the coordinator down.
                Err(_) => Err(Error::RefreshFailed("refresh cycle was abandoned".into())),
            },
        }
    }

    /// Leader path: run the refresh, then settle the queue and reset the
    /// state in a single step regardless of outcome.
    ///
    /// The guard makes this cancel-safe: dropping this future at any await
    /// point drains and fails the queue instead of leaving the state
    /// `Refreshing` forever.
    async fn lead(&self) -> Result<TokenInfo> {
        let mut guard = AbandonGuard {
            coordinator: self,
            armed: true,
        };
        let outcome = self.execute_refresh().await;
        guard.armed = false;

        let waiters = self.take_waiters();
        if !waiters.is_empty() {
            debug!(
                released = waiters.len(),
                success = outcome.is_ok(),
                "Settling queued callers"
            );
        }

        match &outcome {
            Ok(token) => {
                for tx in waiters {
                    let _ = tx.send(Ok(token.clone()));
                }
            }
            Err(e) => {
                let message = match e {
                    Error::RefreshFailed(m) => m.clone(),
                    other => other.to_string(),
                };
                for tx in waiters {
                    let _ = tx.send(Err(message.clone()));
                }
            }
        }

        outcome
    }

    /// Perform one refresh against the backend and synchronize storage.
    async fn execute_refresh(&self) -> Result<TokenInfo> {
        let current = self.storage.load().await?;
        let refresh_token = match current {
            Some(token) if !token.refresh_token.is_empty() => token.refresh_token,
            _ => return Err(Error::NotAuthenticated),
        };

        match api::refresh(&self.client, &self.base_url, &refresh_token).await {
            Ok(new_token) => {
                self.storage.save(&new_token).await?;
                info!("Access token refreshed");
                Ok(new_token)
            }
            Err(e) => {
                // Forced logout: an unusable refresh token means the
                // session is over for every caller.
                warn!(error = %e, "Refresh failed, clearing stored credentials");
                if let Err(clear_err) = self.storage.clear().await {
                    warn!(error = %clear_err, "Failed to clear stored credentials");
                }
                Err(e)
            }
        }
    }

    /// Reset the state to `Idle` and take ownership of the queue.
    fn take_waiters(&self) -> Vec<oneshot::Sender<WaitOutcome>> {
        let mut state = self.lock_state();
        match std::mem::replace(&mut *state, RefreshState::Idle) {
            RefreshState::Refreshing { waiters } => waiters,
            RefreshState::Idle => Vec::new(),
        }
    }

    /// A panicked holder cannot have left the state torn: every critical
    /// section is a single assignment or replace, so recover the guard.
    fn lock_state(&self) -> MutexGuard<'_, RefreshState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Fails the queue and resets the coordinator if the leader never reaches
/// settlement.
struct AbandonGuard<'a> {
    coordinator: &'a RefreshCoordinator,
    armed: bool,
}

impl Drop for AbandonGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let waiters = self.coordinator.take_waiters();
        if !waiters.is_empty() {
            warn!(
                released = waiters.len(),
                "Refresh leader dropped mid-cycle, failing queued callers"
            );
        }
        for tx in waiters {
            let _ = tx.send(Err("refresh cycle was abandoned".into()));
        }
    }
}

impl std::fmt::Debug for RefreshCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshCoordinator")
            .field("base_url", &self.base_url)
            .field("storage", &self.storage.name())
            .finish()
    }
}
