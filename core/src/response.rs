//! Decoded responses.
//!
//! # Design
//! Every operation returns an `ApiResponse`: the JSON the server sent,
//! untouched, or a synthesized `{status, statusCode}` when the server did not
//! send JSON. Server-reported failures (`"status": "error"`) are returned the
//! same way and are *not* turned into `Err`. That mirrors the SDK this crate
//! stands in for; use `is_error()` or `error()` to branch on them.
//!
//! The typed records below cover the documented fields of common payloads.
//! Each keeps unknown keys in `extra`, so decoding never loses data the
//! server added.

use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::{Error, Result};

/// JSON returned by one API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse(Value);

impl ApiResponse {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Minimal result for a response that did not declare JSON.
    pub(crate) fn from_status(status_code: u16) -> Self {
        let status = if (200..300).contains(&status_code) {
            "success"
        } else {
            "error"
        };
        Self(json!({ "status": status, "statusCode": status_code }))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// The top-level `status` field, usually `"success"` or `"error"`.
    pub fn status(&self) -> Option<&str> {
        self.0.get("status")?.as_str()
    }

    /// The server's numeric error code, if any.
    pub fn code(&self) -> Option<i64> {
        self.0.get("code")?.as_i64()
    }

    pub fn message(&self) -> Option<&str> {
        self.0.get("message")?.as_str()
    }

    /// HTTP status of a synthesized (non-JSON) response.
    pub fn status_code(&self) -> Option<u16> {
        self.0
            .get("statusCode")?
            .as_u64()
            .and_then(|c| u16::try_from(c).ok())
    }

    pub fn is_error(&self) -> bool {
        self.status() == Some("error")
    }

    /// The error payload, when the server reported one.
    pub fn error(&self) -> Option<ErrorResponse> {
        if !self.is_error() {
            return None;
        }
        self.decode().ok()
    }

    /// Decode into a typed record.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(&self.0).map_err(Error::Decode)
    }
}

impl Deref for ApiResponse {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.0
    }
}

impl From<ApiResponse> for Value {
    fn from(response: ApiResponse) -> Self {
        response.0
    }
}

/// `{"status": "error", "code": …, "message": …}` as sent by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of `post`, `update_post` and `retry_post`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub ref_id: Option<String>,
    #[serde(default)]
    pub post: Option<String>,
    #[serde(default)]
    pub post_ids: Vec<Value>,
    #[serde(default)]
    pub errors: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of `history`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub post: Option<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub schedule_date: Option<String>,
    #[serde(default)]
    pub media_urls: Vec<String>,
    #[serde(default)]
    pub post_ids: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of `user`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ref_id: Option<String>,
    #[serde(default)]
    pub active_social_accounts: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A sub-account, as returned by `create_profile` and `get_profiles`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub profile_key: Option<String>,
    #[serde(default)]
    pub ref_id: Option<String>,
    #[serde(default)]
    pub active_social_accounts: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of `get_profiles`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilesResponse {
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of `upload`, and each entry of `media`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One registered webhook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesized_success_and_error() {
        let ok = ApiResponse::from_status(204);
        assert_eq!(ok.as_value(), &json!({"status": "success", "statusCode": 204}));
        assert!(!ok.is_error());

        let err = ApiResponse::from_status(500);
        assert_eq!(err.as_value(), &json!({"status": "error", "statusCode": 500}));
        assert_eq!(err.status_code(), Some(500));
        assert!(err.is_error());
    }

    #[test]
    fn redirect_range_counts_as_error() {
        assert_eq!(ApiResponse::from_status(302).status(), Some("error"));
        assert_eq!(ApiResponse::from_status(199).status(), Some("error"));
    }

    #[test]
    fn error_accessors() {
        let resp = ApiResponse::new(json!({"status": "error", "code": 401, "message": "bad key"}));
        assert_eq!(resp.code(), Some(401));
        assert_eq!(resp.message(), Some("bad key"));
        let error = resp.error().unwrap();
        assert_eq!(error.code, Some(401));
        assert_eq!(error.message.as_deref(), Some("bad key"));
    }

    #[test]
    fn error_is_none_on_success() {
        let resp = ApiResponse::new(json!({"status": "success", "id": "p1"}));
        assert!(resp.error().is_none());
    }

    #[test]
    fn decode_keeps_unknown_fields() {
        let resp = ApiResponse::new(json!({
            "status": "success",
            "id": "p1",
            "postIds": [{"platform": "twitter", "id": "t1"}],
            "scheduled": true
        }));
        let post: PostResponse = resp.decode().unwrap();
        assert_eq!(post.id.as_deref(), Some("p1"));
        assert_eq!(post.post_ids.len(), 1);
        assert_eq!(post.extra["scheduled"], true);
    }

    #[test]
    fn decode_history_array() {
        let resp = ApiResponse::new(json!([
            {"id": "h1", "post": "hello", "platforms": ["twitter"], "status": "success"},
            {"id": "h2", "post": "later", "platforms": [], "status": "pending"}
        ]));
        let items: Vec<HistoryItem> = resp.decode().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].status.as_deref(), Some("pending"));
    }

    #[test]
    fn decode_mismatch_is_decode_error() {
        let resp = ApiResponse::new(json!("just a string"));
        let err = resp.decode::<User>().unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn derefs_to_value() {
        let resp = ApiResponse::new(json!({"profiles": []}));
        assert!(resp["profiles"].is_array());
    }
}
