//! Posts and post history.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::SocialPost;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::query::{with_query, with_segment};
use crate::response::ApiResponse;
use crate::transport::Transport;

/// Payload of `post`.
///
/// Per-platform option blocks (`twitterOptions`, `instagramOptions`, …) are
/// opaque JSON kept in `extra`; use `platform_options` to set one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    pub post: String,
    pub platforms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shorten_links: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_video: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_approval: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PostRequest {
    pub fn new(post: impl Into<String>, platforms: &[&str]) -> Self {
        Self {
            post: post.into(),
            platforms: platforms.iter().map(|p| p.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Attach the option block for one platform, sent as `<platform>Options`.
    pub fn platform_options(mut self, platform: &str, options: Value) -> Self {
        self.extra.insert(options_key(platform), options);
        self
    }

    pub fn options_for(&self, platform: &str) -> Option<&Value> {
        self.extra.get(&options_key(platform))
    }
}

fn options_key(platform: &str) -> String {
    format!("{platform}Options")
}

/// Payload of `delete`: a single `id`, or a `bulk` list of ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulk: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DeletePostRequest {
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn bulk<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            bulk: Some(ids.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }
}

/// Payload of `retry_post`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryPostRequest {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `update_post`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Filters for `history`. With `id` set the filters are ignored and the
/// single record is fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_records: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl HistoryQuery {
    pub(crate) fn path(&self) -> String {
        if let Some(id) = self.id.as_deref().filter(|id| !id.is_empty()) {
            return with_segment("/history", id);
        }
        let mut pairs = Vec::new();
        if let Some(n) = self.last_records {
            pairs.push(("lastRecords", n.to_string()));
        }
        if let Some(n) = self.last_days {
            pairs.push(("lastDays", n.to_string()));
        }
        if let Some(platform) = &self.platform {
            pairs.push(("platform", platform.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        with_query("/history", pairs)
    }
}

impl<T: Transport> SocialPost<T> {
    /// Publish or schedule a post.
    pub fn post(&self, request: &PostRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Post, "/post", request)
    }

    /// Delete one post, or several with `DeletePostRequest::bulk`.
    pub fn delete(&self, request: &DeletePostRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Delete, "/post", request)
    }

    pub fn get_post(&self, id: &str) -> Result<ApiResponse> {
        self.get(&with_segment("/post", id))
    }

    pub fn retry_post(&self, request: &RetryPostRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Put, "/post/retry", request)
    }

    pub fn update_post(&self, request: &UpdatePostRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Put, "/post", request)
    }

    /// Post history, filtered, or one record when `query.id` is set.
    pub fn history(&self, query: &HistoryQuery) -> Result<ApiResponse> {
        self.get(&query.path())
    }
}
