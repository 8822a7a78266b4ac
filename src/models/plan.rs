//! Job plan records: dry-run diffs and placement predictions

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::evaluation::{AllocationMetric, Evaluation};
use super::job::Job;

/// Body of a plan request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobPlanRequest<'a> {
    pub job: &'a Job,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<bool>,
    pub policy_override: bool,
}

/// What the scheduler would do with a submitted spec
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct JobPlanResponse {
    #[serde(default)]
    pub job_modify_index: u64,
    #[serde(rename = "CreatedEvals", skip_serializing_if = "Option::is_none")]
    pub created_evals: Option<Vec<Evaluation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<JobDiff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<PlanAnnotations>,
    #[serde(rename = "FailedTGAllocs", default)]
    pub failed_tg_allocs: HashMap<String, AllocationMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_periodic_launch: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct JobDiff {
    #[serde(rename = "Type", default)]
    pub diff_type: String,
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(default)]
    pub fields: Vec<FieldDiff>,
    #[serde(default)]
    pub objects: Vec<ObjectDiff>,
    #[serde(default)]
    pub task_groups: Vec<TaskGroupDiff>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct TaskGroupDiff {
    #[serde(rename = "Type", default)]
    pub diff_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDiff>,
    #[serde(default)]
    pub objects: Vec<ObjectDiff>,
    #[serde(default)]
    pub tasks: Vec<TaskDiff>,
    #[serde(default)]
    pub updates: HashMap<String, u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct TaskDiff {
    #[serde(rename = "Type", default)]
    pub diff_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDiff>,
    #[serde(default)]
    pub objects: Vec<ObjectDiff>,
    #[serde(default)]
    pub annotations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectDiff {
    #[serde(rename = "Type", default)]
    pub diff_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDiff>,
    #[serde(default)]
    pub objects: Vec<ObjectDiff>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct FieldDiff {
    #[serde(rename = "Type", default)]
    pub diff_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub old: String,
    #[serde(default)]
    pub new: String,
    #[serde(default)]
    pub annotations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PlanAnnotations {
    #[serde(rename = "DesiredTGUpdates", default)]
    pub desired_tg_updates: HashMap<String, DesiredUpdates>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DesiredUpdates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_place_update: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destructive_update: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canary: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_response_deserialization() {
        let json = r#"{
            "JobModifyIndex": 0,
            "Diff": {
                "Type": "Added",
                "ID": "example",
                "Fields": [{"Type": "Added", "Name": "Priority", "Old": "", "New": "50"}]
            },
            "Annotations": {
                "DesiredTGUpdates": {"cache": {"Place": 1}}
            },
            "FailedTGAllocs": {}
        }"#;

        let plan: JobPlanResponse = serde_json::from_str(json).unwrap();
        let diff = plan.diff.unwrap();
        assert_eq!(diff.diff_type, "Added");
        assert_eq!(diff.fields[0].new, "50");
        let updates = &plan.annotations.unwrap().desired_tg_updates["cache"];
        assert_eq!(updates.place, Some(1));
    }
}
