//! Authenticated HTTP channel: bearer injection and 401 recovery.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::auth::RefreshCoordinator;
use crate::config;
use crate::error::{Error, Result};
use crate::storage::TokenStorage;

/// A rebuildable request description.
///
/// A replay after a refresh must issue a genuinely new request with the new
/// bearer token, so the channel keeps the recipe rather than a built
/// `reqwest::Request`.
#[derive(Debug, Clone)]
struct RequestSpec {
    method: Method,
    url: String,
    query: Option<Vec<(String, String)>>,
    body: Option<serde_json::Value>,
}

/// HTTP client for protected endpoints.
///
/// Every request carries a bearer token read fresh from storage at send
/// time. A 401 response on a not-yet-replayed request is handed to the
/// [`RefreshCoordinator`]; on refresh success the request is reissued once
/// under the new token. All other error statuses pass through unchanged.
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    storage: Arc<dyn TokenStorage>,
    refresh: Arc<RefreshCoordinator>,
}

impl HttpClient {
    /// Create a new authenticated channel.
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        storage: Arc<dyn TokenStorage>,
        refresh: Arc<RefreshCoordinator>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            storage,
            refresh,
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a JSON resource.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.execute(self.spec(Method::GET, path, None, None)).await?;
        Ok(response.json().await?)
    }

    /// GET a JSON resource with query parameters.
    pub async fn get_json_with_query<T, Q>(&self, path: &str, params: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let query = query_pairs(params)?;
        let response = self
            .execute(self.spec(Method::GET, path, Some(query), None))
            .await?;
        Ok(response.json().await?)
    }

    /// POST a JSON body and parse the JSON response.
    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let body = serde_json::to_value(body)?;
        let response = self
            .execute(self.spec(Method::POST, path, None, Some(body)))
            .await?;
        Ok(response.json().await?)
    }

    /// PUT a JSON body and parse the JSON response.
    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let body = serde_json::to_value(body)?;
        let response = self
            .execute(self.spec(Method::PUT, path, None, Some(body)))
            .await?;
        Ok(response.json().await?)
    }

    /// DELETE a resource, discarding the response body.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute(self.spec(Method::DELETE, path, None, None))
            .await?;
        Ok(())
    }

    fn spec(
        &self,
        method: Method,
        path: &str,
        query: Option<Vec<(String, String)>>,
        body: Option<serde_json::Value>,
    ) -> RequestSpec {
        RequestSpec {
            method,
            url: config::join_url(&self.base_url, path),
            query,
            body,
        }
    }

    /// Send a request, recovering from a single 401 via token refresh.
    ///
    /// Attempt 1 is the request already marked as replayed: a second 401
    /// surfaces directly, never a second refresh.
    async fn execute(&self, spec: RequestSpec) -> Result<reqwest::Response> {
        for attempt in 0..2u8 {
            // Read the pair fresh from storage at send time; another call
            // may have rotated it since this one was issued.
            let stored = self.storage.load().await?;

            let mut request = self.client.request(spec.method.clone(), &spec.url);
            if let Some(query) = &spec.query {
                request = request.query(query);
            }
            if let Some(body) = &spec.body {
                request = request.json(body);
            }
            if let Some(token) = stored.as_ref().filter(|t| !t.access_token.is_empty()) {
                request = request.bearer_auth(&token.access_token);
            }

            let response = request.send().await.map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout
                } else {
                    Error::Network(e)
                }
            })?;

            if response.status().is_success() {
                return Ok(response);
            }

            let status = response.status().as_u16();
            if status == 401 && attempt == 0 {
                let has_refresh_token = stored
                    .as_ref()
                    .is_some_and(|t| !t.refresh_token.is_empty());
                if !has_refresh_token {
                    // Nothing to recover with; surface the original 401.
                    return Err(Error::from_response(response).await);
                }

                debug!(url = spec.url.as_str(), "401 received, requesting token refresh");
                self.refresh.refresh().await?;
                continue;
            }

            if status == 401 {
                warn!(url = spec.url.as_str(), "401 after replay, giving up");
            }
            return Err(Error::from_response(response).await);
        }

        // The replay arm above always returns; kept for the type checker.
        Err(Error::Api {
            status: 401,
            message: "request failed after token refresh".into(),
        })
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("storage", &self.storage.name())
            .finish()
    }
}

/// Flatten a serializable struct into query pairs.
///
/// Only flat structs with scalar fields are expected here; nested values
/// would serialize as raw JSON.
fn query_pairs<Q: Serialize>(params: &Q) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(params)?;
    let mut pairs = Vec::new();
    if let serde_json::Value::Object(map) = value {
        for (key, value) in map {
            match value {
                serde_json::Value::Null => {}
                serde_json::Value::String(s) => pairs.push((key, s)),
                other => pairs.push((key, other.to_string())),
            }
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Params {
        query: String,
        page: u32,
        #[serde(rename = "sortBy")]
        sort_by: String,
    }

    #[test]
    fn test_query_pairs() {
        let params = Params {
            query: "rust".into(),
            page: 2,
            sort_by: "createdAt".into(),
        };

        let pairs = query_pairs(&params).unwrap();
        assert!(pairs.contains(&("query".into(), "rust".into())));
        assert!(pairs.contains(&("page".into(), "2".into())));
        assert!(pairs.contains(&("sortBy".into(), "createdAt".into())));
    }
}
