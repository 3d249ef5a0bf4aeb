//! Unauthenticated auth endpoints.
//!
//! These calls go through a plain `reqwest::Client` with no bearer
//! injection and no response interception. Routing the refresh call
//! through the authenticated channel would recurse into its own 401
//! handler, so login, registration, and refresh all bypass it.

use tracing::{debug, info};

use crate::config;
use crate::error::{Error, Result};
use crate::models::auth::{LoginRequest, RegisterRequest, TokenInfo};

/// Log in with username and password.
///
/// POST `/auth/login`. Returns the full credential pair on success.
pub async fn login(
    client: &reqwest::Client,
    base_url: &str,
    request: &LoginRequest,
) -> Result<TokenInfo> {
    let url = config::join_url(base_url, config::LOGIN_PATH);
    debug!(username = request.username.as_str(), "Logging in");

    let response = client.post(&url).json(request).send().await?;
    if !response.status().is_success() {
        return Err(Error::from_response(response).await);
    }

    let token: TokenInfo = response.json().await?;
    if !token.is_complete() {
        return Err(Error::MissingCredential(
            "login response is missing a token".into(),
        ));
    }

    Ok(token)
}

/// Register a new account.
///
/// POST `/auth/register`. The backend returns an empty body on success.
pub async fn register(
    client: &reqwest::Client,
    base_url: &str,
    request: &RegisterRequest,
) -> Result<()> {
    let url = config::join_url(base_url, config::REGISTER_PATH);
    debug!(username = request.username.as_str(), "Registering account");

    let response = client.post(&url).json(request).send().await?;
    if !response.status().is_success() {
        return Err(Error::from_response(response).await);
    }

    Ok(())
}

/// Exchange a refresh token for a new credential pair.
///
/// POST `/auth/refresh`, body `{"refreshToken": "..."}`. Any failure is
/// reported as [`Error::RefreshFailed`], the terminal authentication error.
pub async fn refresh(
    client: &reqwest::Client,
    base_url: &str,
    refresh_token: &str,
) -> Result<TokenInfo> {
    if refresh_token.is_empty() {
        return Err(Error::MissingCredential("refresh_token".into()));
    }

    let url = config::join_url(base_url, config::REFRESH_PATH);
    info!("Refreshing access token");

    let payload = serde_json::json!({ "refreshToken": refresh_token });

    let response = client
        .post(&url)
        .json(&payload)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                Error::RefreshFailed("refresh request timed out".into())
            } else {
                Error::RefreshFailed(format!("refresh request failed: {}", e))
            }
        })?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(Error::RefreshFailed(format!(
            "refresh endpoint returned {}: {}",
            status, body
        )));
    }

    let token: TokenInfo = response
        .json()
        .await
        .map_err(|e| Error::RefreshFailed(format!("failed to parse refresh response: {}", e)))?;

    if !token.is_complete() {
        return Err(Error::RefreshFailed(
            "refresh response is missing a token".into(),
        ));
    }

    Ok(token)
}
