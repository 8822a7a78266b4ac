//! Deployment records: rollout state for a job version

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rollout of one job version across its task groups
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Deployment {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(rename = "JobID", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_version: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_modify_index: Option<u64>,
    /// Modify index of the job spec this deployment rolls out; used to
    /// match a deployment to a particular submission
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_spec_modify_index: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_create_index: Option<u64>,
    #[serde(default)]
    pub task_groups: HashMap<String, DeploymentState>,
    /// "running", "successful", "failed", "cancelled", ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_index: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_index: Option<u64>,
}

impl Deployment {
    /// Whether the rollout finished successfully with every group healthy
    pub fn is_healthy(&self) -> bool {
        self.status.as_deref() == Some("successful")
            && self.task_groups.values().all(|g| g.unhealthy_allocs == 0)
    }

    /// Whether the rollout reached a state it cannot leave
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status.as_deref(),
            Some("successful") | Some("failed") | Some("cancelled")
        )
    }
}

/// Per-group progress of a deployment
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DeploymentState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placed_canaries: Option<Vec<String>>,
    #[serde(default)]
    pub auto_revert: bool,
    #[serde(default)]
    pub progress_deadline: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_progress_by: Option<DateTime<Utc>>,
    #[serde(default)]
    pub promoted: bool,
    #[serde(default)]
    pub desired_canaries: u64,
    #[serde(default)]
    pub desired_total: u64,
    #[serde(default)]
    pub placed_allocs: u64,
    #[serde(default)]
    pub healthy_allocs: u64,
    #[serde(default)]
    pub unhealthy_allocs: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployment(status: &str, unhealthy: u64) -> Deployment {
        let mut task_groups = HashMap::new();
        task_groups.insert(
            "web".to_string(),
            DeploymentState {
                desired_total: 3,
                placed_allocs: 3,
                healthy_allocs: 3 - unhealthy,
                unhealthy_allocs: unhealthy,
                ..Default::default()
            },
        );
        Deployment {
            id: Some("dep-1".to_string()),
            status: Some(status.to_string()),
            task_groups,
            ..Default::default()
        }
    }

    #[test]
    fn test_is_healthy() {
        assert!(deployment("successful", 0).is_healthy());
        assert!(!deployment("successful", 1).is_healthy());
        assert!(!deployment("running", 0).is_healthy());
    }

    #[test]
    fn test_is_terminal() {
        assert!(deployment("successful", 0).is_terminal());
        assert!(deployment("failed", 1).is_terminal());
        assert!(deployment("cancelled", 0).is_terminal());
        assert!(!deployment("running", 0).is_terminal());
    }

    #[test]
    fn test_deployment_wire_names() {
        let json = r#"{
            "ID": "dep-1",
            "JobID": "example",
            "JobSpecModifyIndex": 42,
            "Status": "running",
            "TaskGroups": {
                "cache": {"DesiredTotal": 2, "PlacedAllocs": 1, "HealthyAllocs": 1, "UnhealthyAllocs": 0}
            },
            "CreateIndex": 21
        }"#;

        let deployment: Deployment = serde_json::from_str(json).unwrap();
        assert_eq!(deployment.job_spec_modify_index, Some(42));
        assert_eq!(deployment.task_groups["cache"].desired_total, 2);
    }
}
