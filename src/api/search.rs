//! Fuzzy search endpoint

use serde_json::json;

use crate::error::Result;
use crate::http::Http;
use crate::models::SearchResponse;

/// Handle for the search endpoint
pub struct Search<'a> {
    http: &'a Http,
}

impl<'a> Search<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Search IDs by prefix; `context` narrows to one object type
    /// ("jobs", "allocs", "nodes", ...) or "all"
    pub async fn prefix(&self, prefix: &str, context: &str) -> Result<SearchResponse> {
        self.http
            .post("search")
            .json(&json!({
                "Prefix": prefix,
                "Context": context,
            }))
            .recv()
            .await
    }
}
