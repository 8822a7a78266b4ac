//! Evaluation records: the scheduler's reasoning about a job

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One pass of the scheduler over a job
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Evaluation {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(default)]
    pub priority: i32,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub eval_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggered_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(rename = "JobID", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_modify_index: Option<u64>,
    #[serde(rename = "NodeID", skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_modify_index: Option<u64>,
    #[serde(rename = "DeploymentID", skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,
    #[serde(default)]
    pub wait: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_until: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_eval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_eval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_eval: Option<String>,
    /// Placement failures keyed by task group
    #[serde(rename = "FailedTGAllocs", skip_serializing_if = "Option::is_none")]
    pub failed_tg_allocs: Option<HashMap<String, AllocationMetric>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_eligibility: Option<HashMap<String, bool>>,
    #[serde(default)]
    pub escaped_computed_class: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quota_limit_reached: Option<String>,
    #[serde(default)]
    pub annotate_plan: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queued_allocations: Option<HashMap<String, i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_index: Option<u64>,
    #[serde(default)]
    pub create_index: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_index: Option<u64>,
}

/// Scheduler metrics for a placement attempt
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct AllocationMetric {
    #[serde(default)]
    pub nodes_evaluated: i32,
    #[serde(default)]
    pub nodes_filtered: i32,
    #[serde(default)]
    pub nodes_available: HashMap<String, i32>,
    #[serde(default)]
    pub class_filtered: HashMap<String, i32>,
    #[serde(default)]
    pub constraint_filtered: HashMap<String, i32>,
    #[serde(default)]
    pub nodes_exhausted: i32,
    #[serde(default)]
    pub class_exhausted: HashMap<String, i32>,
    #[serde(default)]
    pub dimension_exhausted: HashMap<String, i32>,
    #[serde(default)]
    pub quota_exhausted: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<HashMap<String, f64>>,
    #[serde(default)]
    pub allocation_time: i64,
    #[serde(default)]
    pub coalesced_failures: i32,
}

/// Response to any mutation that enqueues an evaluation
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct EvaluationResponse {
    #[serde(rename = "EvalID", default)]
    pub eval_id: String,
    #[serde(rename = "EvalCreateIndex", skip_serializing_if = "Option::is_none")]
    pub eval_create_index: Option<u64>,
    #[serde(default)]
    pub index: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_modify_index: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_leader: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_contact: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_deserialization() {
        let json = r#"{
            "ID": "5456bd7a",
            "Priority": 50,
            "Type": "service",
            "TriggeredBy": "job-register",
            "JobID": "example",
            "JobModifyIndex": 52,
            "DeploymentID": "dep-1",
            "Status": "complete",
            "CreateIndex": 53
        }"#;

        let eval: Evaluation = serde_json::from_str(json).unwrap();
        assert_eq!(eval.id, "5456bd7a");
        assert_eq!(eval.triggered_by.as_deref(), Some("job-register"));
        assert_eq!(eval.deployment_id.as_deref(), Some("dep-1"));
        assert_eq!(eval.create_index, 53);
    }

    #[test]
    fn test_evaluation_response_wire_names() {
        let json = r#"{
            "EvalID": "d092fdc0",
            "EvalCreateIndex": 35,
            "Index": 35,
            "JobModifyIndex": 34,
            "Warnings": ""
        }"#;

        let response: EvaluationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.eval_id, "d092fdc0");
        assert_eq!(response.eval_create_index, Some(35));
        assert_eq!(response.job_modify_index, Some(34));
    }
}
