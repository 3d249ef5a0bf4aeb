//! # folio-client
//!
//! Rust client library for the Folio portfolio backend API.
//!
//! Wraps the backend's REST surface (posts, guestbook, projects, chat) and
//! manages the credential pair lifecycle: bearer injection on every
//! request, transparent access-token refresh on 401 with concurrent
//! callers collapsed into a single refresh call, and forced logout when
//! the refresh token itself has expired.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use folio_client::{FolioClient, LoginRequest, PostListParams, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = FolioClient::builder()
//!         .base_url("https://folio.example.com/api")
//!         .build()?;
//!
//!     // Pick up a persisted session, or start a new one.
//!     if !client.session().restore().await? {
//!         client
//!             .session()
//!             .login(&LoginRequest::new("admin", "hunter2"))
//!             .await?;
//!     }
//!
//!     let page = client
//!         .list_posts(&PostListParams::search("rust"))
//!         .await?;
//!     println!("{} posts found", page.total_elements);
//!     Ok(())
//! }
//! ```
//!
//! ## Token refresh
//!
//! Protected calls read the stored credential pair at send time. A 401
//! response hands the request to the [`auth::RefreshCoordinator`]: the
//! first caller in a window performs the refresh, every other caller
//! queues on the in-flight cycle, and all of them replay once under the
//! new token. A failed refresh clears the stored pair and fails every
//! queued caller with the same error.

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod transport;

// Re-exports for ergonomic usage
pub use auth::{RefreshCoordinator, Session};
pub use client::{FolioClient, FolioClientBuilder};
pub use error::{Error, Result};
pub use models::auth::{LoginRequest, RegisterRequest, Role, TokenInfo, UserInfo};
pub use models::chat::{ChatQuery, ChatResponse};
pub use models::guestbook::{GuestbookCreateRequest, GuestbookEntry};
pub use models::page::{Page, PageParams};
pub use models::post::{
    PostCreateRequest, PostDetail, PostListParams, PostSummary, PostUpdateRequest,
};
pub use models::project::{Project, ProjectRequest};
pub use storage::{FileTokenStorage, MemoryTokenStorage, TokenStorage};
