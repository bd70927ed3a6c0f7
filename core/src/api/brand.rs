//! Brand lookup. *Not yet available.*

use serde_json::{Map, Value};

use crate::client::SocialPost;
use crate::error::Result;
use crate::query::{coerce, with_query};
use crate::response::ApiResponse;
use crate::transport::Transport;

impl<T: Transport> SocialPost<T> {
    /// Look up a brand's public social accounts. Every entry of `params`
    /// becomes a query parameter, in key order.
    pub fn get_brand_by_user(&self, params: &Map<String, Value>) -> Result<ApiResponse> {
        let mut pairs: Vec<(&str, String)> =
            params.iter().map(|(k, v)| (k.as_str(), coerce(v))).collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        self.get(&with_query("/brand/byUser", pairs))
    }
}
