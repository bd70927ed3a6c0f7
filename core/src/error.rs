//! Error types for the social-post client.
//!
//! # Design
//! Only failures the client itself observes get a variant: a missing
//! credential at construction, a transport failure, or a body that cannot be
//! encoded or decoded. A JSON body reporting `"status": "error"` is *not* an
//! `Error`; it comes back as an ordinary `ApiResponse` so existing callers of
//! the SDK keep inspecting the status field exactly as they did before.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by `SocialPost` and its transports.
#[derive(Debug, Error)]
pub enum Error {
    /// The client was constructed with an empty API key.
    #[error("API key is required")]
    MissingApiKey,

    /// A configuration value could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The HTTP round-trip failed before a response was available (DNS,
    /// connect, TLS, timeout, or reading the body).
    #[error("transport error: {source}")]
    Transport {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response declared a JSON content type but its body is not JSON,
    /// or a decoded value does not match the requested record type.
    #[error("deserialization failed: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    /// Wrap any transport-level failure.
    pub fn transport(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Transport {
            source: source.into(),
        }
    }
}
