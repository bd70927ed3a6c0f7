//! Media library.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::SocialPost;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::query::with_query;
use crate::response::ApiResponse;
use crate::transport::Transport;

/// Payload of `upload`. `file` is the base64 content, usually as a data URL
/// (`data:image/png;base64,…`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub file: String,
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Query of `media_upload_url`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaUploadUrlQuery {
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// Payload of `verify_media_exists`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyMediaRequest {
    pub media_url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `resize_image`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeImageRequest {
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T: Transport> SocialPost<T> {
    pub fn upload(&self, request: &UploadRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Post, "/upload", request)
    }

    pub fn media(&self) -> Result<ApiResponse> {
        self.get("/media")
    }

    /// Pre-signed URL for uploading a large file directly.
    pub fn media_upload_url(&self, query: &MediaUploadUrlQuery) -> Result<ApiResponse> {
        let mut pairs = vec![("fileName", query.file_name.clone())];
        if let Some(content_type) = &query.content_type {
            pairs.push(("contentType", content_type.clone()));
        }
        self.get(&with_query("/media/uploadUrl", pairs))
    }

    pub fn verify_media_exists(&self, request: &VerifyMediaRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Post, "/media/urlExists", request)
    }

    /// *Not yet available.*
    pub fn resize_image(&self, request: &ResizeImageRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Post, "/media/resize", request)
    }

    /// *Not yet available.*
    pub fn media_meta(&self) -> Result<ApiResponse> {
        self.get("/media/meta")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::testing::{client, sent, sent_body};

    #[test]
    fn upload_sends_file_and_name() {
        let client = client();
        client
            .upload(&UploadRequest {
                file: "data:image/png;base64,iVBORw0KGgo=".to_string(),
                file_name: "pixel.png".to_string(),
                ..UploadRequest::default()
            })
            .unwrap();
        let req = sent(&client);
        assert_eq!(req.method, HttpMethod::Post);
        assert!(req.url.ends_with("/upload"));
        assert_eq!(
            sent_body(&client),
            json!({"file": "data:image/png;base64,iVBORw0KGgo=", "fileName": "pixel.png"})
        );
    }

    #[test]
    fn media_upload_url_query() {
        let client = client();
        client
            .media_upload_url(&MediaUploadUrlQuery {
                file_name: "clip 1.mp4".to_string(),
                content_type: Some("video/mp4".to_string()),
            })
            .unwrap();
        let req = sent(&client);
        assert_eq!(req.method, HttpMethod::Get);
        assert!(req
            .url
            .ends_with("/media/uploadUrl?fileName=clip+1.mp4&contentType=video%2Fmp4"));
        assert!(req.body.is_none());
    }

    #[test]
    fn media_upload_url_without_content_type() {
        let client = client();
        client
            .media_upload_url(&MediaUploadUrlQuery {
                file_name: "a.png".to_string(),
                content_type: None,
            })
            .unwrap();
        assert!(sent(&client).url.ends_with("/media/uploadUrl?fileName=a.png"));
    }

    #[test]
    fn verify_media_exists_posts() {
        let client = client();
        client
            .verify_media_exists(&VerifyMediaRequest {
                media_url: "https://img.example/a.png".to_string(),
                ..VerifyMediaRequest::default()
            })
            .unwrap();
        assert!(sent(&client).url.ends_with("/media/urlExists"));
        assert_eq!(
            sent_body(&client),
            json!({"mediaUrl": "https://img.example/a.png"})
        );
    }

    #[test]
    fn media_meta_is_bodyless_get() {
        let client = client();
        client.media_meta().unwrap();
        let req = sent(&client);
        assert_eq!(req.method, HttpMethod::Get);
        assert!(req.url.ends_with("/media/meta"));
        assert!(req.body.is_none());
    }
}
