//! Guestbook types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One guestbook entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestbookEntry {
    /// Entry ID.
    pub id: i64,
    /// Entry text.
    pub content: String,
    /// Author's login ID.
    pub author_username: String,
    /// Optional image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
}

/// Guestbook creation body (requires the USER role).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestbookCreateRequest {
    /// Entry text.
    pub content: String,
    /// Optional image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl GuestbookCreateRequest {
    /// Create a text-only entry request.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            image_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_wire_format() {
        let json = r#"{
            "id": 3,
            "content": "nice site",
            "authorUsername": "bob",
            "imageUrl": null,
            "createdAt": "2024-06-01T12:00:00"
        }"#;

        let entry: GuestbookEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 3);
        assert_eq!(entry.author_username, "bob");
        assert!(entry.image_url.is_none());
    }

    #[test]
    fn test_create_request_serialization() {
        let request = GuestbookCreateRequest::new("hello");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["content"], "hello");
        assert!(value.get("imageUrl").is_none());
    }
}
