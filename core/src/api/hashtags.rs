//! Hashtag suggestions and checks.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::SocialPost;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::query::with_query;
use crate::response::ApiResponse;
use crate::transport::Transport;

/// Payload of `auto_hashtags`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoHashtagsRequest {
    pub post: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T: Transport> SocialPost<T> {
    /// *Not yet available.*
    pub fn auto_hashtags(&self, request: &AutoHashtagsRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Post, "/hashtags/auto", request)
    }

    /// *Not yet available.*
    pub fn recommend_hashtags(&self, keyword: &str) -> Result<ApiResponse> {
        self.get(&with_query(
            "/hashtags/recommend",
            [("keyword", keyword.to_string())],
        ))
    }

    pub fn check_banned_hashtags(&self, hashtag: &str) -> Result<ApiResponse> {
        self.get(&with_query(
            "/hashtags/banned",
            [("hashtag", hashtag.to_string())],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{client, sent, sent_body};

    #[test]
    fn check_banned_hashtags_encodes_query() {
        let client = client();
        client.check_banned_hashtags("#spam").unwrap();
        let req = sent(&client);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.url,
            "http://localhost:3000/api/hashtags/banned?hashtag=%23spam"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn recommend_hashtags_query() {
        let client = client();
        client.recommend_hashtags("coffee beans").unwrap();
        assert!(sent(&client)
            .url
            .ends_with("/hashtags/recommend?keyword=coffee+beans"));
    }

    #[test]
    fn auto_hashtags_posts_payload() {
        let client = client();
        client
            .auto_hashtags(&AutoHashtagsRequest {
                post: "Morning espresso".to_string(),
                max: Some(2),
                ..AutoHashtagsRequest::default()
            })
            .unwrap();
        assert!(sent(&client).url.ends_with("/hashtags/auto"));
        assert_eq!(sent_body(&client)["max"], 2);
    }
}
