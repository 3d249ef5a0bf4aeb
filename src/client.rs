//! Main client entry point.

use std::sync::Arc;

use tracing::info;

use crate::api;
use crate::auth::{RefreshCoordinator, Session};
use crate::config;
use crate::error::{Error, Result};
use crate::models::auth::RegisterRequest;
use crate::models::chat::ChatResponse;
use crate::models::guestbook::{GuestbookCreateRequest, GuestbookEntry};
use crate::models::page::{Page, PageParams};
use crate::models::post::{
    PostCreateRequest, PostDetail, PostListParams, PostSummary, PostUpdateRequest,
};
use crate::models::project::{Project, ProjectRequest};
use crate::storage::{FileTokenStorage, TokenStorage};
use crate::transport::HttpClient;

/// Folio backend API client.
///
/// Wraps the backend's REST surface and manages the credential pair
/// lifecycle: bearer injection, transparent refresh on 401, and forced
/// logout when the refresh token itself has expired.
///
/// # Examples
///
/// ```rust,no_run
/// use folio_client::{FolioClient, LoginRequest, PostListParams};
///
/// # async fn example() -> folio_client::Result<()> {
/// let client = FolioClient::builder()
///     .base_url("https://folio.example.com/api")
///     .build()?;
///
/// client
///     .session()
///     .login(&LoginRequest::new("admin", "hunter2"))
///     .await?;
///
/// let page = client.list_posts(&PostListParams::default()).await?;
/// for post in page.content {
///     println!("{}: {}", post.id, post.title);
/// }
/// # Ok(())
/// # }
/// ```
pub struct FolioClient {
    http: Arc<HttpClient>,
    session: Arc<Session>,
    auth_client: reqwest::Client,
}

impl FolioClient {
    /// Create a builder for configuring the client.
    pub fn builder() -> FolioClientBuilder {
        FolioClientBuilder::new()
    }

    /// The session: authentication status, identity, login and logout.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The underlying authenticated channel, for endpoints not covered by
    /// the typed methods.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Register a new account. No credentials required.
    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        crate::auth::api::register(&self.auth_client, self.http.base_url(), request).await
    }

    // ── Posts ────────────────────────────────────────────────────────────────

    /// List posts with search, paging, and sort parameters.
    pub async fn list_posts(&self, params: &PostListParams) -> Result<Page<PostSummary>> {
        api::posts::list(&self.http, params).await
    }

    /// Fetch one post by ID.
    pub async fn post_detail(&self, id: i64) -> Result<PostDetail> {
        api::posts::detail(&self.http, id).await
    }

    /// Create a post (admin only).
    pub async fn create_post(&self, request: &PostCreateRequest) -> Result<PostDetail> {
        api::posts::create(&self.http, request).await
    }

    /// Update a post (admin only).
    pub async fn update_post(&self, id: i64, request: &PostUpdateRequest) -> Result<PostDetail> {
        api::posts::update(&self.http, id, request).await
    }

    /// Delete a post (admin only).
    pub async fn delete_post(&self, id: i64) -> Result<()> {
        api::posts::delete(&self.http, id).await
    }

    // ── Guestbook ────────────────────────────────────────────────────────────

    /// List guestbook entries.
    pub async fn list_guestbook(&self, params: &PageParams) -> Result<Page<GuestbookEntry>> {
        api::guestbook::list(&self.http, params).await
    }

    /// Write a guestbook entry.
    pub async fn create_guestbook_entry(
        &self,
        request: &GuestbookCreateRequest,
    ) -> Result<GuestbookEntry> {
        api::guestbook::create(&self.http, request).await
    }

    /// Delete a guestbook entry.
    pub async fn delete_guestbook_entry(&self, id: i64) -> Result<()> {
        api::guestbook::delete(&self.http, id).await
    }

    // ── Projects ─────────────────────────────────────────────────────────────

    /// List projects.
    pub async fn list_projects(&self, params: &PageParams) -> Result<Page<Project>> {
        api::projects::list(&self.http, params).await
    }

    /// Fetch one project by ID.
    pub async fn project_detail(&self, id: i64) -> Result<Project> {
        api::projects::detail(&self.http, id).await
    }

    /// Create a project (admin only).
    pub async fn create_project(&self, request: &ProjectRequest) -> Result<Project> {
        api::projects::create(&self.http, request).await
    }

    /// Update a project (admin only).
    pub async fn update_project(&self, id: i64, request: &ProjectRequest) -> Result<Project> {
        api::projects::update(&self.http, id, request).await
    }

    /// Delete a project (admin only).
    pub async fn delete_project(&self, id: i64) -> Result<()> {
        api::projects::delete(&self.http, id).await
    }

    // ── Chat ─────────────────────────────────────────────────────────────────

    /// Send a chat query to the inference passthrough.
    pub async fn chat(&self, query: impl Into<String>) -> Result<ChatResponse> {
        api::chat::query(&self.http, query).await
    }
}

impl std::fmt::Debug for FolioClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FolioClient")
            .field("http", &self.http)
            .finish()
    }
}

/// Builder for [`FolioClient`].
pub struct FolioClientBuilder {
    base_url: Option<String>,
    storage: Option<Arc<dyn TokenStorage>>,
    reqwest_client: Option<reqwest::Client>,
}

impl FolioClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            storage: None,
            reqwest_client: None,
        }
    }

    /// Set the backend base URL, e.g. `https://folio.example.com/api`.
    /// Required.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a credential storage backend.
    ///
    /// Defaults to [`FileTokenStorage`] at its default path.
    pub fn storage(mut self, storage: Arc<dyn TokenStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Set a custom reqwest client for authenticated requests (useful for
    /// testing or custom TLS config).
    pub fn reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.reqwest_client = Some(client);
        self
    }

    /// Build the client.
    ///
    /// Performs no network I/O; call [`Session::restore`] afterwards to
    /// pick up a persisted session, or [`Session::login`] to start one.
    pub fn build(self) -> Result<FolioClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::config("base_url is required"))?;

        let storage: Arc<dyn TokenStorage> = match self.storage {
            Some(storage) => storage,
            None => Arc::new(FileTokenStorage::default_path()?),
        };

        let api_client = match self.reqwest_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .connect_timeout(config::CONNECT_TIMEOUT)
                .timeout(config::REQUEST_TIMEOUT)
                .build()?,
        };

        // The unauthenticated channel carries its own refresh deadline so a
        // hung refresh always settles the queue eventually.
        let auth_client = reqwest::Client::builder()
            .connect_timeout(config::CONNECT_TIMEOUT)
            .timeout(config::REFRESH_TIMEOUT)
            .build()?;

        let refresh = Arc::new(RefreshCoordinator::new(
            auth_client.clone(),
            base_url.clone(),
            Arc::clone(&storage),
        ));
        let http = Arc::new(HttpClient::new(
            api_client,
            base_url.clone(),
            Arc::clone(&storage),
            Arc::clone(&refresh),
        ));
        let session = Arc::new(Session::new(
            auth_client.clone(),
            base_url,
            Arc::clone(&storage),
            Arc::clone(&http),
        ));

        info!("FolioClient initialized");
        Ok(FolioClient {
            http,
            session,
            auth_client,
        })
    }
}

impl Default for FolioClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
