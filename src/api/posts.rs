//! Post endpoints (`/posts`).
//!
//! Listing and detail are public; create, update, and delete require the
//! ADMIN role and surface a 403 otherwise.

use crate::error::Result;
use crate::models::page::Page;
use crate::models::post::{
    PostCreateRequest, PostDetail, PostListParams, PostSummary, PostUpdateRequest,
};
use crate::transport::HttpClient;

const POSTS_PATH: &str = "/posts";

/// List posts with search, paging, and sort parameters.
pub async fn list(http: &HttpClient, params: &PostListParams) -> Result<Page<PostSummary>> {
    http.get_json_with_query(POSTS_PATH, params).await
}

/// Fetch one post by ID.
pub async fn detail(http: &HttpClient, id: i64) -> Result<PostDetail> {
    http.get_json(&format!("{}/{}", POSTS_PATH, id)).await
}

/// Create a post.
pub async fn create(http: &HttpClient, request: &PostCreateRequest) -> Result<PostDetail> {
    http.post_json(POSTS_PATH, request).await
}

/// Update a post.
pub async fn update(
    http: &HttpClient,
    id: i64,
    request: &PostUpdateRequest,
) -> Result<PostDetail> {
    http.put_json(&format!("{}/{}", POSTS_PATH, id), request).await
}

/// Delete a post.
pub async fn delete(http: &HttpClient, id: i64) -> Result<()> {
    http.delete(&format!("{}/{}", POSTS_PATH, id)).await
}
