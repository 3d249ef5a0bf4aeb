//! Chat passthrough endpoint (`/chat/query`).

use crate::error::Result;
use crate::models::chat::{ChatQuery, ChatResponse};
use crate::transport::HttpClient;

const CHAT_PATH: &str = "/chat/query";

/// Send a chat query and wait for the inference service's answer.
pub async fn query(http: &HttpClient, query: impl Into<String>) -> Result<ChatResponse> {
    let request = ChatQuery {
        query: query.into(),
    };
    http.post_json(CHAT_PATH, &request).await
}
