//! Node records: client machines registered with the control plane

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::job::Resources;

/// A client node
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Node {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "HTTPAddr", skip_serializing_if = "Option::is_none")]
    pub http_addr: Option<String>,
    #[serde(rename = "TLSEnabled", default)]
    pub tls_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Resources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved: Option<Resources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_class: Option<String>,
    #[serde(default)]
    pub drain: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drain_strategy: Option<DrainStrategy>,
    /// "eligible" or "ineligible" for placements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduling_eligibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,
    #[serde(default)]
    pub status_updated_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<NodeEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drivers: Option<HashMap<String, DriverInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_index: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_index: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DrainStrategy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drain_spec: Option<DrainSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DrainSpec {
    #[serde(default)]
    pub deadline: i64,
    #[serde(default)]
    pub ignore_system_jobs: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NodeEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsystem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_index: Option<u64>,
}

/// Fingerprinted driver health on a node
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DriverInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, String>>,
    #[serde(default)]
    pub detected: bool,
    #[serde(default)]
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_deserialization() {
        let json = r#"{
            "ID": "fb2170a8",
            "Datacenter": "dc1",
            "Name": "worker-1",
            "HTTPAddr": "10.0.0.5:4646",
            "TLSEnabled": false,
            "NodeClass": "",
            "Drain": false,
            "SchedulingEligibility": "eligible",
            "Status": "ready",
            "Drivers": {
                "docker": {"Detected": true, "Healthy": true}
            }
        }"#;

        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.http_addr.as_deref(), Some("10.0.0.5:4646"));
        assert_eq!(node.status.as_deref(), Some("ready"));
        assert!(node.drivers.unwrap()["docker"].healthy);
    }
}
