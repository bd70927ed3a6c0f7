//! RSS feed automation. *Not yet available.*

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::SocialPost;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::response::ApiResponse;
use crate::transport::Transport;

/// Payload of `feed_add`, `feed_update` and `feed_delete`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub feed_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T: Transport> SocialPost<T> {
    pub fn feed_add(&self, request: &FeedRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Post, "/feed", request)
    }

    pub fn feed_delete(&self, request: &FeedRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Delete, "/feed", request)
    }

    pub fn feed_get(&self) -> Result<ApiResponse> {
        self.get("/feed")
    }

    pub fn feed_update(&self, request: &FeedRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Put, "/feed", request)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::testing::{client, sent, sent_body, RecordingTransport};

    fn feed() -> FeedRequest {
        FeedRequest {
            url: Some("https://blog.example/rss".to_string()),
            feed_type: Some("rss".to_string()),
            ..FeedRequest::default()
        }
    }

    #[test]
    fn feed_add_posts_payload() {
        let client = client();
        client.feed_add(&feed()).unwrap();
        let req = sent(&client);
        assert_eq!(req.method, HttpMethod::Post);
        assert!(req.url.ends_with("/feed"));
        assert_eq!(
            sent_body(&client),
            json!({"url": "https://blog.example/rss", "type": "rss"})
        );
    }

    #[test]
    fn feed_verbs() {
        let cases: [(fn(&SocialPost<RecordingTransport>) -> Result<ApiResponse>, HttpMethod); 3] = [
            (|c| c.feed_delete(&feed()), HttpMethod::Delete),
            (|c| c.feed_get(), HttpMethod::Get),
            (|c| c.feed_update(&feed()), HttpMethod::Put),
        ];
        for (call, method) in cases {
            let client = client();
            call(&client).unwrap();
            let req = sent(&client);
            assert_eq!(req.method, method);
            assert!(req.url.ends_with("/feed"));
        }
    }
}
