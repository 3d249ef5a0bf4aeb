//! Authentication types: the credential pair and user identity.

use serde::{Deserialize, Serialize};

/// The credential pair issued by `/auth/login` and `/auth/refresh`.
///
/// A pair is always handled as a whole: it is persisted wholesale on login
/// and refresh, and removed wholesale on logout. No partial pair is ever
/// written to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    /// Grant type, typically "Bearer".
    pub grant_type: String,
    /// Short-lived JWT authorizing individual API calls.
    pub access_token: String,
    /// Longer-lived token used solely to obtain a new pair.
    pub refresh_token: String,
    /// Access token expiry as reported by the backend. Carried opaquely;
    /// the client refreshes reactively on 401, never on a timer.
    pub access_token_expires_in: i64,
}

impl TokenInfo {
    /// Create a new credential pair.
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_in: i64,
    ) -> Self {
        Self {
            grant_type: "Bearer".to_string(),
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            access_token_expires_in: expires_in,
        }
    }

    /// Both tokens present and non-empty.
    ///
    /// A pair failing this check is never persisted.
    pub fn is_complete(&self) -> bool {
        !self.access_token.is_empty() && !self.refresh_token.is_empty()
    }
}

/// Login request body (`POST /auth/login`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login ID.
    pub username: String,
    /// Plain-text password; sent over the wire only, never stored.
    pub password: String,
}

impl LoginRequest {
    /// Create a login request.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Registration request body (`POST /auth/register`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired login ID.
    pub username: String,
    /// Plain-text password.
    pub password: String,
}

impl RegisterRequest {
    /// Create a registration request.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// User role as assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Regular user: may write guestbook entries.
    User,
    /// Administrator: may manage posts and projects.
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "USER"),
            Self::Admin => write!(f, "ADMIN"),
        }
    }
}

/// Current user identity (`GET /auth/me`).
///
/// Derived state: fetched whenever a credential pair becomes available and
/// discarded when the pair is cleared. Never persisted independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Backend user ID.
    pub id: i64,
    /// Login ID.
    pub username: String,
    /// Assigned role.
    pub role: Role,
}

impl UserInfo {
    /// Whether this user holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
