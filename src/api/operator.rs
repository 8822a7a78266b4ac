//! Operator endpoints: raft cluster management

use crate::error::Result;
use crate::http::Http;
use crate::models::RaftConfiguration;

/// Handle for the operator endpoints
pub struct Operator<'a> {
    http: &'a Http,
}

impl<'a> Operator<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Current raft peer set
    pub async fn raft_configuration(&self, stale: Option<bool>) -> Result<RaftConfiguration> {
        self.http
            .get("operator/raft/configuration")
            .query_opt("stale", stale)
            .recv()
            .await
    }

    /// Remove a raft peer by address or ID
    pub async fn raft_remove_peer(&self, address: Option<&str>, id: Option<&str>) -> Result<()> {
        self.http
            .delete("operator/raft/peer")
            .query_opt("address", address)
            .query_opt("id", id)
            .recv_unit()
            .await
    }
}
