//! The client and its request dispatcher.
//!
//! # Design
//! `SocialPost` holds the credential, an optional profile key and the
//! configured base URL. Every operation in `crate::api` funnels through
//! `request`, which is split the host-does-IO way:
//!
//! 1. `build_request` produces an `HttpRequest` (headers, URL, body rules),
//! 2. the `Transport` executes it exactly once,
//! 3. `parse_response` turns the `HttpResponse` into an `ApiResponse`.
//!
//! Steps 1 and 3 are pure, so all dispatcher rules are unit-tested without
//! a network.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{ClientConfig, ENV_API_KEY};
use crate::error::{Error, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::response::ApiResponse;
use crate::transport::{Transport, UreqTransport};

/// Client for the social-post API.
///
/// Method names and payload shapes follow the SDK this crate replaces, in
/// snake_case. Calls take `&self`, so one client can be shared across
/// threads; changing the profile key takes `&mut self`.
#[derive(Debug)]
pub struct SocialPost<T = UreqTransport> {
    api_key: SecretString,
    profile_key: Option<String>,
    config: ClientConfig,
    transport: T,
}

impl SocialPost<UreqTransport> {
    /// Create a client against `DEFAULT_BASE_URL`.
    ///
    /// Fails with `Error::MissingApiKey` if `api_key` is empty.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    pub fn with_config(api_key: &str, config: ClientConfig) -> Result<Self> {
        let transport = UreqTransport::new(&config);
        SocialPost::with_transport(api_key, config, transport)
    }

    /// Build a client from `SOCIAL_POST_API_KEY` plus `ClientConfig::from_env`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY).unwrap_or_default();
        Self::with_config(&api_key, ClientConfig::from_env()?)
    }
}

impl<T: Transport> SocialPost<T> {
    pub fn with_transport(api_key: &str, config: ClientConfig, transport: T) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }
        Ok(Self {
            api_key: SecretString::from(api_key.to_string()),
            profile_key: None,
            config,
            transport,
        })
    }

    /// Scope every later request to the given sub-account profile. A blank
    /// key clears the scope, so no empty `Profile-Key` header is ever sent.
    pub fn set_profile_key(&mut self, profile_key: impl Into<String>) {
        let profile_key = profile_key.into();
        self.profile_key = (!profile_key.trim().is_empty()).then_some(profile_key);
    }

    pub fn clear_profile_key(&mut self) {
        self.profile_key = None;
    }

    pub fn profile_key(&self) -> Option<&str> {
        self.profile_key.as_deref()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Describe one call as an `HttpRequest` without sending it.
    ///
    /// A body passed with `HttpMethod::Get` is dropped: GET requests never
    /// carry a payload. A warning is logged when that happens.
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<HttpRequest> {
        let mut headers = vec![
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.api_key.expose_secret()),
            ),
            ("Content-Type".to_string(), "application/json".to_string()),
        ];
        if let Some(profile_key) = &self.profile_key {
            headers.push(("Profile-Key".to_string(), profile_key.clone()));
        }

        let body = match body {
            Some(_) if method == HttpMethod::Get => {
                warn!(path, "dropping request body: GET requests carry no payload");
                None
            }
            Some(value) => Some(serde_json::to_string(value).map_err(Error::Encode)?),
            None => None,
        };

        Ok(HttpRequest {
            method,
            url: format!("{}{path}", self.config.base_url()),
            headers,
            body,
        })
    }

    /// Send one request and decode the reply. Exactly one transport call is
    /// made; nothing is retried.
    pub fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse> {
        let request = self.build_request(method, path, body)?;
        debug!(
            %method,
            path,
            profile_scoped = self.profile_key.is_some(),
            has_body = request.body.is_some(),
            "sending request"
        );
        let response = self.transport.execute(request)?;
        debug!(
            %method,
            path,
            status = response.status,
            content_type = response.header("content-type").unwrap_or(""),
            "received response"
        );
        parse_response(response)
    }

    pub(crate) fn get(&self, path: &str) -> Result<ApiResponse> {
        self.request(HttpMethod::Get, path, None)
    }

    pub(crate) fn send<B: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse> {
        let body = serde_json::to_value(body).map_err(Error::Encode)?;
        self.request(method, path, Some(&body))
    }
}

/// Decode a response: JSON bodies are returned as sent, whatever the status
/// code; anything else becomes `{status, statusCode}`.
pub fn parse_response(response: HttpResponse) -> Result<ApiResponse> {
    if response.is_json() {
        let value = serde_json::from_str(&response.body).map_err(Error::Decode)?;
        return Ok(ApiResponse::new(value));
    }
    Ok(ApiResponse::from_status(response.status))
}
