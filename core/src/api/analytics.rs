//! Post and account analytics.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::SocialPost;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::response::ApiResponse;
use crate::transport::Transport;

/// Payload of `analytics_post`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsPostRequest {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `analytics_social`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSocialRequest {
    pub platforms: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T: Transport> SocialPost<T> {
    pub fn analytics_post(&self, request: &AnalyticsPostRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Post, "/analytics/post", request)
    }

    pub fn analytics_social(&self, request: &AnalyticsSocialRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Post, "/analytics/social", request)
    }

    /// *Not yet available.*
    pub fn analytics_links(&self) -> Result<ApiResponse> {
        self.get("/analytics/links")
    }
}
