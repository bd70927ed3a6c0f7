//! Link shortening. *Not yet available.*

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::SocialPost;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::query::with_segment;
use crate::response::ApiResponse;
use crate::transport::Transport;

/// Payload of `short_link` / `shorten`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLinkRequest {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T: Transport> SocialPost<T> {
    pub fn short_link(&self, request: &ShortLinkRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Post, "/shorten", request)
    }

    /// Alias of `short_link`.
    pub fn shorten(&self, request: &ShortLinkRequest) -> Result<ApiResponse> {
        self.short_link(request)
    }

    pub fn short_link_analytics(&self, id: &str) -> Result<ApiResponse> {
        self.get(&with_segment("/links", id))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::testing::{client, sent, sent_body};

    fn link() -> ShortLinkRequest {
        ShortLinkRequest {
            url: "https://shop.example/sale".to_string(),
            ..ShortLinkRequest::default()
        }
    }

    #[test]
    fn short_link_posts() {
        let client = client();
        client.short_link(&link()).unwrap();
        let req = sent(&client);
        assert_eq!(req.method, HttpMethod::Post);
        assert!(req.url.ends_with("/shorten"));
        assert_eq!(sent_body(&client), json!({"url": "https://shop.example/sale"}));
    }

    #[test]
    fn shorten_is_the_same_request() {
        let a = client();
        a.short_link(&link()).unwrap();
        let b = client();
        b.shorten(&link()).unwrap();
        assert_eq!(sent(&a), sent(&b));
    }

    #[test]
    fn short_link_analytics_embeds_id() {
        let client = client();
        client.short_link_analytics("xyz").unwrap();
        let req = sent(&client);
        assert_eq!(req.method, HttpMethod::Get);
        assert!(req.url.ends_with("/links/xyz"));
    }
}
