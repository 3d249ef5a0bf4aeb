//! Configuration constants and endpoint paths for the Folio backend API.

use std::time::Duration;

/// Connect timeout for HTTP requests.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default timeout for API requests.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for the token refresh call.
///
/// A refresh that never settles would leave queued callers suspended
/// forever, so the refresh call always carries its own deadline.
pub const REFRESH_TIMEOUT: Duration = Duration::from_secs(15);

/// Default page size for list endpoints.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Default sort field for post listings.
pub const DEFAULT_POST_SORT: &str = "createdAt";

/// Login endpoint (unauthenticated).
pub const LOGIN_PATH: &str = "/auth/login";

/// Registration endpoint (unauthenticated).
pub const REGISTER_PATH: &str = "/auth/register";

/// Token refresh endpoint (unauthenticated).
pub const REFRESH_PATH: &str = "/auth/refresh";

/// Current-user endpoint (requires a bearer token).
pub const ME_PATH: &str = "/auth/me";

/// Join a base URL and an endpoint path without doubling slashes.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
