//! CSI volume records

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A CSI volume registered with the control plane
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CsiVolume {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "ExternalID", skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// "single-node-writer", "multi-node-reader-only", ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_mode: Option<String>,
    /// "file-system" or "block-device"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_options: Option<CsiMountOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<HashMap<String, String>>,
    #[serde(default)]
    pub schedulable: bool,
    #[serde(rename = "PluginID", skip_serializing_if = "Option::is_none")]
    pub plugin_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_version: Option<String>,
    #[serde(default)]
    pub controller_required: bool,
    #[serde(default)]
    pub controllers_healthy: i32,
    #[serde(default)]
    pub controllers_expected: i32,
    #[serde(default)]
    pub nodes_healthy: i32,
    #[serde(default)]
    pub nodes_expected: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_index: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_index: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CsiMountOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fs_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_flags: Option<Vec<String>>,
}

/// Body of a volume registration: volumes wrapped under a `Volumes` key
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VolumeRegistration<'a> {
    pub volumes: &'a [CsiVolume],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_deserialization() {
        let json = r#"{
            "ID": "vol-db",
            "Name": "database",
            "PluginID": "ebs",
            "AccessMode": "single-node-writer",
            "AttachmentMode": "file-system",
            "Schedulable": true,
            "ControllersHealthy": 1,
            "NodesHealthy": 3
        }"#;

        let volume: CsiVolume = serde_json::from_str(json).unwrap();
        assert_eq!(volume.plugin_id.as_deref(), Some("ebs"));
        assert!(volume.schedulable);
        assert_eq!(volume.nodes_healthy, 3);
    }

    #[test]
    fn test_registration_envelope() {
        let volume = CsiVolume {
            id: Some("vol-db".to_string()),
            ..Default::default()
        };
        let volumes = vec![volume];
        let json = serde_json::to_value(VolumeRegistration { volumes: &volumes }).unwrap();
        assert_eq!(json["Volumes"][0]["ID"], "vol-db");
    }
}
