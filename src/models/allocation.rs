//! Allocation records: placements of task groups on nodes

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A placement of one task group instance on a node
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Allocation {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "EvalID", skip_serializing_if = "Option::is_none")]
    pub eval_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(rename = "NodeID", skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    #[serde(rename = "JobID", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_version: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_group: Option<String>,
    /// What the scheduler wants: "run" or "stop"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_description: Option<String>,
    /// What the client observed: "pending", "running", "complete", "failed", "lost"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_description: Option<String>,
    #[serde(default)]
    pub task_states: HashMap<String, TaskState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_status: Option<AllocDeploymentStatus>,
    #[serde(rename = "FollowupEvalID", skip_serializing_if = "Option::is_none")]
    pub followup_eval_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reschedule_tracker: Option<RescheduleTracker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preempted_allocations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preempted_by_allocation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_index: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_index: Option<u64>,
    #[serde(default)]
    pub create_time: i64,
    #[serde(default)]
    pub modify_time: i64,
}

/// Observed state of a single task inside an allocation
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct TaskState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default)]
    pub failed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restarts: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_restart: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<TaskEvent>>,
}

/// One entry in a task's event log
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct TaskEvent {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default)]
    pub time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
    #[serde(default)]
    pub fails_task: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_message: Option<String>,
    #[serde(default)]
    pub exit_code: i64,
    #[serde(default)]
    pub signal: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kill_reason: Option<String>,
    #[serde(default)]
    pub kill_timeout: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kill_error: Option<String>,
    #[serde(default)]
    pub start_delay: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_error: Option<String>,
    #[serde(default)]
    pub disk_limit: i64,
    #[serde(default)]
    pub disk_size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_sibling: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_signal_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_signal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generic_source: Option<String>,
}

/// Health of an allocation from its deployment's point of view
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct AllocDeploymentStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub canary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_index: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RescheduleTracker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<RescheduleEvent>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RescheduleEvent {
    #[serde(default)]
    pub reschedule_time: i64,
    #[serde(rename = "PrevAllocID", skip_serializing_if = "Option::is_none")]
    pub prev_alloc_id: Option<String>,
    #[serde(rename = "PrevNodeID", skip_serializing_if = "Option::is_none")]
    pub prev_node_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_deserialization() {
        let json = r#"{
            "ID": "a8198d79",
            "EvalID": "5456bd7a",
            "JobID": "example",
            "NodeID": "fb2170a8",
            "TaskGroup": "cache",
            "ClientStatus": "running",
            "TaskStates": {
                "redis": {
                    "State": "running",
                    "Failed": false,
                    "StartedAt": "2021-03-12T17:01:19.941979Z"
                }
            },
            "CreateTime": 1615568479000000000
        }"#;

        let alloc: Allocation = serde_json::from_str(json).unwrap();
        assert_eq!(alloc.id.as_deref(), Some("a8198d79"));
        assert_eq!(alloc.client_status.as_deref(), Some("running"));
        let state = &alloc.task_states["redis"];
        assert_eq!(state.state.as_deref(), Some("running"));
        assert!(!state.failed);
        assert!(state.started_at.is_some());
    }

    #[test]
    fn test_task_event_defaults() {
        let event: TaskEvent =
            serde_json::from_str(r#"{"Type": "Started", "Time": 1615568479}"#).unwrap();
        assert_eq!(event.event_type.as_deref(), Some("Started"));
        assert_eq!(event.exit_code, 0);
        assert!(!event.fails_task);
    }
}
