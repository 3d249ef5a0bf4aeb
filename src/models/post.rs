//! Post (board) types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_PAGE_SIZE, DEFAULT_POST_SORT};

/// One row of the post listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    /// Post ID.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Author's login ID.
    pub author_username: String,
    /// View counter.
    pub view_count: u64,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
}

/// Full post detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    /// Post ID.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Markdown body.
    pub content: String,
    /// Author's login ID.
    pub author_username: String,
    /// View counter.
    pub view_count: u64,
    /// Optional attachment URL.
    #[serde(default)]
    pub file_url: Option<String>,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last-update timestamp.
    pub updated_at: NaiveDateTime,
}

/// Post creation body (admin only).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCreateRequest {
    /// Title.
    pub title: String,
    /// Markdown body.
    pub content: String,
    /// Optional attachment URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

/// Post update body (admin only).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdateRequest {
    /// Title.
    pub title: String,
    /// Markdown body.
    pub content: String,
    /// Optional attachment URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

/// Query parameters for the post listing: search, paging, and sort order.
#[derive(Debug, Clone, Serialize)]
pub struct PostListParams {
    /// Search query; empty matches everything.
    pub query: String,
    /// Zero-based page index.
    pub page: u32,
    /// Page size.
    pub size: u32,
    /// Sort field.
    #[serde(rename = "sortBy")]
    pub sort_by: String,
}

impl PostListParams {
    /// Parameters searching for `query` on the first page.
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Parameters for a specific page of the unfiltered listing.
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }
}

impl Default for PostListParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_by: DEFAULT_POST_SORT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_detail_wire_format() {
        let json = r##"{
            "id": 7,
            "title": "Hello",
            "content": "# Heading",
            "authorUsername": "admin",
            "viewCount": 42,
            "fileUrl": null,
            "createdAt": "2024-05-01T09:30:00",
            "updatedAt": "2024-05-02T10:00:00"
        }"##;

        let post: PostDetail = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.author_username, "admin");
        assert!(post.file_url.is_none());
        assert_eq!(post.created_at.to_string(), "2024-05-01 09:30:00");
    }

    #[test]
    fn test_create_request_omits_missing_file_url() {
        let request = PostCreateRequest {
            title: "t".into(),
            content: "c".into(),
            file_url: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("fileUrl").is_none());
    }

    #[test]
    fn test_list_params_defaults() {
        let params = PostListParams::default();
        assert_eq!(params.sort_by, "createdAt");
        assert_eq!(params.page, 0);

        let value = serde_json::to_value(&params).unwrap();
        assert!(value.get("sortBy").is_some());
    }
}
