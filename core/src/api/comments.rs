//! Comments on published posts.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::SocialPost;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::query::with_segment;
use crate::response::ApiResponse;
use crate::transport::Transport;

/// Payload of `post_comment`. `id` is the post being commented on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCommentRequest {
    pub id: String,
    pub comment: String,
    pub platforms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_urls: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `reply_comment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyCommentRequest {
    pub comment_id: String,
    pub comment: String,
    pub platforms: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T: Transport> SocialPost<T> {
    pub fn post_comment(&self, request: &PostCommentRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Post, "/comments", request)
    }

    /// Comments on the post `id`.
    pub fn get_comments(&self, id: &str) -> Result<ApiResponse> {
        self.get(&with_segment("/comments", id))
    }

    pub fn delete_comments(&self, id: &str) -> Result<ApiResponse> {
        self.request(HttpMethod::Delete, &with_segment("/comments", id), None)
    }

    pub fn reply_comment(&self, request: &ReplyCommentRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Post, "/comments/reply", request)
    }
}
