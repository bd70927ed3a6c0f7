//! The account user and its sub-account profiles.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::SocialPost;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::response::ApiResponse;
use crate::transport::Transport;

/// Payload of `create_profile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_top_header: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_social: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `delete_profile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `update_profile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_top_header: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_social: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `unlink_social`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlinkSocialRequest {
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_key: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `generate_jwt`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateJwtRequest {
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_key: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T: Transport> SocialPost<T> {
    pub fn user(&self) -> Result<ApiResponse> {
        self.get("/user")
    }

    pub fn create_profile(&self, request: &CreateProfileRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Post, "/profiles/profile", request)
    }

    pub fn delete_profile(&self, request: &DeleteProfileRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Delete, "/profiles/profile", request)
    }

    pub fn update_profile(&self, request: &UpdateProfileRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Put, "/profiles/profile", request)
    }

    pub fn get_profiles(&self) -> Result<ApiResponse> {
        self.get("/profiles")
    }

    /// *Not yet available.*
    pub fn unlink_social(&self, request: &UnlinkSocialRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Delete, "/profiles/social", request)
    }

    /// *Not yet available.*
    pub fn generate_jwt(&self, request: &GenerateJwtRequest) -> Result<ApiResponse> {
        self.send(HttpMethod::Post, "/profiles/generateJWT", request)
    }
}
