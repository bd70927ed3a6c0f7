//! AI text generation. *Not yet available.*

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::SocialPost;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::response::ApiResponse;
use crate::transport::Transport;

/// Payload shared by the `generate_*` operations. Which fields matter
/// depends on the operation: `text` for post/rewrite/translation, `url` for
/// transcription and alt text, `lang` for translation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T: Transport> SocialPost<T> {
    pub fn generate_post(&self, request: &GenerateRequest) -> Result<ApiResponse> {
        self.generate("post", request)
    }

    pub fn generate_rewrite(&self, request: &GenerateRequest) -> Result<ApiResponse> {
        self.generate("rewrite", request)
    }

    pub fn generate_transcription(&self, request: &GenerateRequest) -> Result<ApiResponse> {
        self.generate("transcription", request)
    }

    pub fn generate_translation(&self, request: &GenerateRequest) -> Result<ApiResponse> {
        self.generate("translate", request)
    }

    pub fn generate_alt_text(&self, request: &GenerateRequest) -> Result<ApiResponse> {
        self.generate("altText", request)
    }

    fn generate(&self, op: &str, request: &GenerateRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Post, &format!("/generate/{op}"), request)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::testing::{client, sent, sent_body, RecordingTransport};

    type Call = fn(&SocialPost<RecordingTransport>, &GenerateRequest) -> Result<ApiResponse>;

    #[test]
    fn each_operation_posts_to_its_path() {
        let cases: [(Call, &str); 5] = [
            (SocialPost::generate_post, "/generate/post"),
            (SocialPost::generate_rewrite, "/generate/rewrite"),
            (SocialPost::generate_transcription, "/generate/transcription"),
            (SocialPost::generate_translation, "/generate/translate"),
            (SocialPost::generate_alt_text, "/generate/altText"),
        ];
        let request = GenerateRequest {
            text: Some("Launch day".to_string()),
            lang: Some("fr".to_string()),
            ..GenerateRequest::default()
        };
        for (call, path) in cases {
            let client = client();
            call(&client, &request).unwrap();
            let req = sent(&client);
            assert_eq!(req.method, HttpMethod::Post, "{path}");
            assert!(req.url.ends_with(path), "{path}");
            assert_eq!(sent_body(&client), json!({"text": "Launch day", "lang": "fr"}));
        }
    }
}
