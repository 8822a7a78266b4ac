//! Agent endpoints: membership and health of the queried agent

use crate::error::Result;
use crate::http::Http;
use crate::models::{AgentHealthResponse, AgentSelf, ServerMembers};

/// Handle for the agent endpoints
pub struct Agent<'a> {
    http: &'a Http,
}

impl<'a> Agent<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Gossip members known to the queried server
    pub async fn members(&self) -> Result<ServerMembers> {
        self.http.get("agent/members").recv().await
    }

    /// Servers the queried client agent is registered with
    pub async fn servers(&self) -> Result<Vec<String>> {
        self.http.get("agent/servers").recv().await
    }

    /// Replace the client agent's server list
    pub async fn set_servers(&self, addresses: &[&str]) -> Result<()> {
        let mut request = self.http.post("agent/servers");
        for address in addresses {
            request = request.query("address", address);
        }
        request.recv_unit().await
    }

    /// The queried agent's own configuration and stats
    pub async fn self_info(&self) -> Result<AgentSelf> {
        self.http.get("agent/self").recv().await
    }

    /// Ask the agent to join the given addresses
    pub async fn join(&self, addresses: &[&str]) -> Result<serde_json::Value> {
        let mut request = self.http.post("agent/join");
        for address in addresses {
            request = request.query("address", address);
        }
        request.recv().await
    }

    /// Force-remove a member from the gossip pool
    pub async fn force_leave(&self, node: &str) -> Result<()> {
        self.http
            .post("agent/force-leave")
            .query("node", node)
            .recv_unit()
            .await
    }

    /// Health of the queried agent's client and server subsystems
    pub async fn health(&self) -> Result<AgentHealthResponse> {
        self.http.get("agent/health").recv().await
    }

    /// Host environment details for debugging
    pub async fn host(
        &self,
        server_id: Option<&str>,
        node_id: Option<&str>,
    ) -> Result<serde_json::Value> {
        self.http
            .get("agent/host")
            .query_opt("server_id", server_id)
            .query_opt("node_id", node_id)
            .recv()
            .await
    }
}
