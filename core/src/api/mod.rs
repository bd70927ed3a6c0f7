//! The operation table.
//!
//! One submodule per resource. Each operation is an adapter that builds a
//! path (and query string, where the endpoint takes one) from its typed
//! input and hands it to `SocialPost::request`. Nothing here validates,
//! retries or reshapes payloads.
//!
//! GET operations never accept a request payload; their inputs only feed the
//! path or query string.
//!
//! Several operations (marked *not yet available*) exist for parity with the
//! SDK surface. They dispatch like any other call; the server currently
//! answers them with HTTP 501 and an explanatory message.

pub mod analytics;
pub mod brand;
pub mod comments;
pub mod feeds;
pub mod generate;
pub mod hashtags;
pub mod hooks;
pub mod links;
pub mod media;
pub mod posts;
pub mod profiles;
pub mod reviews;
