//! Agent and raft operator records

use serde::{Deserialize, Serialize};

/// Gossip members seen by the queried server
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ServerMembers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_region: Option<String>,
    #[serde(rename = "ServerDC", skip_serializing_if = "Option::is_none")]
    pub server_dc: Option<String>,
    #[serde(default)]
    pub members: Vec<AgentMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct AgentMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(rename = "Addr", skip_serializing_if = "Option::is_none")]
    pub addr: Option<String>,
    #[serde(default)]
    pub tags: std::collections::HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_min: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_max: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_cur: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegate_min: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegate_max: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegate_cur: Option<u8>,
}

/// The queried agent's own configuration and stats, lowercase on the wire
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AgentSelf {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<AgentMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AgentHealthResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<AgentHealth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<AgentHealth>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AgentHealth {
    #[serde(default)]
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Raft peer set, from the operator API
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RaftConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u64>,
    #[serde(default)]
    pub servers: Vec<RaftServer>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RaftServer {
    #[serde(default)]
    pub leader: bool,
    #[serde(default)]
    pub voter: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raft_protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
}

/// Fuzzy-search results, keyed by context
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub matches: std::collections::HashMap<String, Vec<String>>,
    #[serde(default)]
    pub truncations: std::collections::HashMap<String, bool>,
}
