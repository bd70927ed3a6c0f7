//! Webhooks and auto-schedule slots.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::SocialPost;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::response::ApiResponse;
use crate::transport::Transport;

/// Payload of `register_webhook`. `action` names the event, e.g. `social`
/// or `scheduled`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    pub action: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `unregister_webhook`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnregisterWebhookRequest {
    pub action: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `set_auto_schedule`. `schedule` holds UTC times like
/// `"13:05Z"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoScheduleRequest {
    pub schedule: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_start_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `delete_auto_schedule`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAutoScheduleRequest {
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T: Transport> SocialPost<T> {
    pub fn register_webhook(&self, request: &WebhookRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Post, "/hook/webhook", request)
    }

    pub fn unregister_webhook(&self, request: &UnregisterWebhookRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Delete, "/hook/webhook", request)
    }

    pub fn list_webhooks(&self) -> Result<ApiResponse> {
        self.get("/hook/webhook")
    }

    pub fn set_auto_schedule(&self, request: &AutoScheduleRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Post, "/auto-schedule/set", request)
    }

    pub fn delete_auto_schedule(&self, request: &DeleteAutoScheduleRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Delete, "/auto-schedule/delete", request)
    }

    pub fn list_auto_schedule(&self) -> Result<ApiResponse> {
        self.get("/auto-schedule/list")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::testing::{client, sent, sent_body};

    #[test]
    fn register_webhook_payload() {
        let client = client();
        client
            .register_webhook(&WebhookRequest {
                action: "social".to_string(),
                url: "https://hooks.example/in".to_string(),
                ..WebhookRequest::default()
            })
            .unwrap();
        let req = sent(&client);
        assert_eq!(req.method, HttpMethod::Post);
        assert!(req.url.ends_with("/hook/webhook"));
        assert_eq!(
            sent_body(&client),
            json!({"action": "social", "url": "https://hooks.example/in"})
        );
    }

    #[test]
    fn unregister_webhook_uses_delete() {
        let client = client();
        client
            .unregister_webhook(&UnregisterWebhookRequest {
                action: "social".to_string(),
                ..UnregisterWebhookRequest::default()
            })
            .unwrap();
        assert_eq!(sent(&client).method, HttpMethod::Delete);
        assert_eq!(sent_body(&client), json!({"action": "social"}));
    }

    #[test]
    fn list_webhooks_is_get() {
        let client = client();
        client.list_webhooks().unwrap();
        let req = sent(&client);
        assert_eq!(req.method, HttpMethod::Get);
        assert!(req.url.ends_with("/hook/webhook"));
    }

    #[test]
    fn set_auto_schedule_payload() {
        let client = client();
        client
            .set_auto_schedule(&AutoScheduleRequest {
                schedule: vec!["13:05Z".to_string(), "20:14Z".to_string()],
                title: Some("weekday".to_string()),
                ..AutoScheduleRequest::default()
            })
            .unwrap();
        assert!(sent(&client).url.ends_with("/auto-schedule/set"));
        assert_eq!(
            sent_body(&client),
            json!({"schedule": ["13:05Z", "20:14Z"], "title": "weekday"})
        );
    }

    #[test]
    fn delete_auto_schedule_uses_delete() {
        let client = client();
        client
            .delete_auto_schedule(&DeleteAutoScheduleRequest {
                title: "weekday".to_string(),
                ..DeleteAutoScheduleRequest::default()
            })
            .unwrap();
        let req = sent(&client);
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.url.ends_with("/auto-schedule/delete"));
    }

    #[test]
    fn list_auto_schedule_is_get() {
        let client = client();
        client.list_auto_schedule().unwrap();
        assert!(sent(&client).url.ends_with("/auto-schedule/list"));
    }
}
