//! Node endpoints

use crate::error::Result;
use crate::http::Http;
use crate::models::Node;

/// Handle for the node endpoints
pub struct Nodes<'a> {
    http: &'a Http,
}

impl<'a> Nodes<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// List client nodes, optionally filtered by ID prefix
    pub async fn list(&self, prefix: Option<&str>) -> Result<Vec<Node>> {
        self.http
            .get("nodes")
            .query_opt("prefix", prefix)
            .recv()
            .await
    }
}
