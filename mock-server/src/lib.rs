//! In-process stand-in for the social-post API.
//!
//! Every request is recorded in a journal, then answered in one of four ways:
//! - 401 JSON `bad key` when an API key is configured and the bearer token
//!   does not match,
//! - a canned response registered for the method and path,
//! - 501 JSON for endpoints the real service has not shipped yet,
//! - otherwise a JSON echo of what was received.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{any, delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::{info, warn};
use uuid::Uuid;

/// One request as the server saw it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub profile_key: Option<String>,
    pub content_type: Option<String>,
    /// Parsed JSON when the body is JSON, the raw text otherwise, `None` when
    /// empty.
    pub body: Option<Value>,
}

impl RecordedRequest {
    fn from_parts(method: &Method, uri: &Uri, headers: &HeaderMap, body: &[u8]) -> Self {
        let value_of = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let body = if body.is_empty() {
            None
        } else {
            Some(serde_json::from_slice(body).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(body).into_owned())
            }))
        };
        Self {
            method: method.as_str().to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            authorization: value_of("authorization"),
            profile_key: value_of("profile-key"),
            content_type: value_of("content-type"),
            body,
        }
    }

    /// Path plus query string, as the client addressed it.
    pub fn target(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{q}", self.path),
            None => self.path.clone(),
        }
    }
}

/// A fixed reply for one method and path.
#[derive(Clone, Debug)]
pub struct CannedResponse {
    pub status: StatusCode,
    pub content_type: String,
    pub body: String,
}

impl CannedResponse {
    pub fn json(status: StatusCode, body: &Value) -> Self {
        Self {
            status,
            content_type: "application/json".to_string(),
            body: body.to_string(),
        }
    }

    pub fn text(status: StatusCode, content_type: &str, body: &str) -> Self {
        Self {
            status,
            content_type: content_type.to_string(),
            body: body.to_string(),
        }
    }
}

impl IntoResponse for CannedResponse {
    fn into_response(self) -> Response {
        let content_type = HeaderValue::from_str(&self.content_type)
            .unwrap_or_else(|_| HeaderValue::from_static("text/plain"));
        (
            self.status,
            [(header::CONTENT_TYPE, content_type)],
            self.body,
        )
            .into_response()
    }
}

#[derive(Debug, Default)]
struct Inner {
    api_key: Option<String>,
    requests: Vec<RecordedRequest>,
    canned: HashMap<(Method, String), CannedResponse>,
}

/// Shared server state: the journal, canned responses and the expected key.
#[derive(Clone, Debug, Default)]
pub struct MockState {
    inner: Arc<Mutex<Inner>>,
}

impl MockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject requests whose bearer token is not `api_key`.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        let state = Self::default();
        state.lock().api_key = Some(api_key.into());
        state
    }

    /// Everything received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.lock().requests.last().cloned()
    }

    pub fn clear_requests(&self) {
        self.lock().requests.clear();
    }

    /// Answer `method path` with `response` from now on. `path` is matched
    /// without the query string.
    pub fn respond_with(&self, method: Method, path: &str, response: CannedResponse) {
        self.lock().canned.insert((method, path.to_string()), response);
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub fn app() -> Router {
    app_with_state(MockState::new())
}

pub fn app_with_state(state: MockState) -> Router {
    Router::new()
        .route("/api/profiles/social", delete(not_available))
        .route("/api/profiles/generateJWT", post(not_available))
        .route("/api/media/resize", post(not_available))
        .route("/api/media/meta", get(not_available))
        .route("/api/analytics/links", get(not_available))
        .route("/api/feed", any(not_available))
        .route("/api/hashtags/auto", post(not_available))
        .route("/api/hashtags/recommend", get(not_available))
        .route("/api/shorten", post(not_available))
        .route("/api/links/{id}", get(not_available))
        .route("/api/brand/byUser", get(not_available))
        .route("/api/generate/{op}", post(not_available))
        .fallback(echo)
        .layer(middleware::from_fn_with_state(state.clone(), gatekeeper))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_state(listener, MockState::new()).await
}

pub async fn run_with_state(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

/// Records the request, then applies the key check and canned responses
/// before any route runs.
async fn gatekeeper(State(state): State<MockState>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(error = %err, "failed to read request body");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };
    let recorded = RecordedRequest::from_parts(&parts.method, &parts.uri, &parts.headers, &bytes);
    info!(
        method = %recorded.method,
        target = %recorded.target(),
        profile_key = recorded.profile_key.as_deref().unwrap_or("-"),
        "request"
    );

    let (authorized, canned) = {
        let mut inner = state.lock();
        let authorized = match &inner.api_key {
            Some(key) => {
                let expected = format!("Bearer {key}");
                recorded.authorization.as_deref() == Some(expected.as_str())
            }
            None => true,
        };
        let canned = inner
            .canned
            .get(&(parts.method.clone(), parts.uri.path().to_string()))
            .cloned();
        inner.requests.push(recorded);
        (authorized, canned)
    };

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"status": "error", "code": 401, "message": "bad key"})),
        )
            .into_response();
    }
    if let Some(canned) = canned {
        return canned.into_response();
    }
    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

async fn not_available(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({
            "status": "error",
            "code": 501,
            "message": format!("{} is not available yet", uri.path()),
        })),
    )
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<Value> {
    let received = RecordedRequest::from_parts(&method, &uri, &headers, &body);
    Json(json!({
        "status": "success",
        "id": Uuid::new_v4(),
        "received": received,
    }))
}
