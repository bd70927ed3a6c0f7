//! Blocking client for the social-post API.
//!
//! # Overview
//! `SocialPost` exposes the same operations, in the same shapes, as the SDK
//! it replaces (snake_case method names, camelCase JSON). Migrating means
//! changing the constructor, nothing else.
//!
//! ```no_run
//! use social_post_core::{HistoryQuery, PostRequest, SocialPost};
//!
//! let mut client = SocialPost::new("API_KEY")?;
//! client.set_profile_key("PROFILE_KEY");
//!
//! let posted = client.post(&PostRequest::new("Hello", &["twitter", "bluesky"]))?;
//! if posted.is_error() {
//!     eprintln!("rejected: {:?}", posted.message());
//! }
//!
//! let recent = client.history(&HistoryQuery {
//!     last_records: Some(10),
//!     ..HistoryQuery::default()
//! })?;
//! # Ok::<(), social_post_core::Error>(())
//! ```
//!
//! # Design
//! - One request per call through a single dispatcher (`SocialPost::request`):
//!   bearer auth, optional `Profile-Key`, JSON body except on GET.
//! - Request building and response parsing are pure; a `Transport` does the
//!   I/O. `UreqTransport` is the default.
//! - Server-reported errors come back as `Ok(ApiResponse)` with
//!   `"status": "error"`, exactly like the SDK. Only construction, transport
//!   and (de)serialization failures are `Err`.
//! - No retries, rate limiting, pagination or caching.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
mod query;
pub mod response;
pub mod transport;

pub use api::analytics::{AnalyticsPostRequest, AnalyticsSocialRequest};
pub use api::comments::{PostCommentRequest, ReplyCommentRequest};
pub use api::feeds::FeedRequest;
pub use api::generate::GenerateRequest;
pub use api::hashtags::AutoHashtagsRequest;
pub use api::hooks::{
    AutoScheduleRequest, DeleteAutoScheduleRequest, UnregisterWebhookRequest, WebhookRequest,
};
pub use api::links::ShortLinkRequest;
pub use api::media::{MediaUploadUrlQuery, ResizeImageRequest, UploadRequest, VerifyMediaRequest};
pub use api::posts::{
    DeletePostRequest, HistoryQuery, PostRequest, RetryPostRequest, UpdatePostRequest,
};
pub use api::profiles::{
    CreateProfileRequest, DeleteProfileRequest, GenerateJwtRequest, UnlinkSocialRequest,
    UpdateProfileRequest,
};
pub use api::reviews::{DeleteReplyReviewRequest, ReplyReviewRequest};
pub use client::{parse_response, SocialPost};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use response::{
    ApiResponse, ErrorResponse, HistoryItem, MediaItem, PostResponse, Profile, ProfilesResponse,
    User, Webhook,
};
pub use transport::{Transport, UreqTransport};
