//! Chat passthrough types.
//!
//! The backend forwards chat queries to a remote inference service; the
//! client sees a single request/response pair.

use serde::{Deserialize, Serialize};

/// Chat query body (`POST /chat/query`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatQuery {
    /// The user's question.
    pub query: String,
}

/// Chat answer from the inference service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// Generated answer text.
    pub response: String,
    /// End-to-end inference latency in milliseconds.
    pub latency_ms: u64,
    /// Titles of the documents the answer was grounded on.
    #[serde(default)]
    pub source_documents: Vec<String>,
}
