//! Guestbook endpoints (`/guestbook`).

use crate::error::Result;
use crate::models::guestbook::{GuestbookCreateRequest, GuestbookEntry};
use crate::models::page::{Page, PageParams};
use crate::transport::HttpClient;

const GUESTBOOK_PATH: &str = "/guestbook";

/// List guestbook entries, newest first.
pub async fn list(http: &HttpClient, params: &PageParams) -> Result<Page<GuestbookEntry>> {
    http.get_json_with_query(GUESTBOOK_PATH, params).await
}

/// Write a guestbook entry. Requires the USER role.
pub async fn create(
    http: &HttpClient,
    request: &GuestbookCreateRequest,
) -> Result<GuestbookEntry> {
    http.post_json(GUESTBOOK_PATH, request).await
}

/// Delete an entry. Allowed for the author or an admin.
pub async fn delete(http: &HttpClient, id: i64) -> Result<()> {
    http.delete(&format!("{}/{}", GUESTBOOK_PATH, id)).await
}
