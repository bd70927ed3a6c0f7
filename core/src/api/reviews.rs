//! Business reviews and replies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::SocialPost;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::query::{with_query, with_segment};
use crate::response::ApiResponse;
use crate::transport::Transport;

/// Payload of `reply_review`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyReviewRequest {
    pub review_id: String,
    pub reply: String,
    pub platform: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `delete_reply_review`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReplyReviewRequest {
    pub review_id: String,
    pub platform: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T: Transport> SocialPost<T> {
    /// All reviews, optionally for one platform only.
    pub fn reviews(&self, platform: Option<&str>) -> Result<ApiResponse> {
        let pairs = platform.map(|p| ("platform", p.to_string()));
        self.get(&with_query("/reviews", pairs))
    }

    pub fn review(&self, id: &str) -> Result<ApiResponse> {
        self.get(&with_segment("/reviews", id))
    }

    pub fn reply_review(&self, request: &ReplyReviewRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Post, "/reviews", request)
    }

    pub fn delete_reply_review(&self, request: &DeleteReplyReviewRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Delete, "/reviews", request)
    }
}
