//! Job specification and summary records
//!
//! A job is the unit of submission: task groups of tasks, plus the
//! scheduling, update and restart policies that shape a rollout.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A complete job specification
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Job {
    #[serde(rename = "ID")]
    pub id: String,

    pub name: String,

    /// Datacenters the job is eligible to run in; absent in list stubs
    #[serde(default)]
    pub datacenters: Vec<String>,

    #[serde(default)]
    pub task_groups: Vec<TaskGroup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(rename = "ParentID", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Scheduler type: "service", "batch" or "system"
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_at_once: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<Constraint>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<UpdateStrategy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodic: Option<PeriodicConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameterized_job: Option<ParameterizedJobConfig>,

    #[serde(default)]
    pub dispatched: bool,

    /// Dispatch payload, base64 on the wire
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reschedule: Option<ReschedulePolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate: Option<MigrateStrategy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault_token: Option<String>,

    // Server-populated fields below; never set on submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stable: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,

    /// Submission time, UNIX nanos
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_time: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_index: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_index: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_modify_index: Option<u64>,
}

/// A set of tasks scheduled together on one node
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct TaskGroup {
    pub name: String,

    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Number of instances of this group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<Constraint>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart_policy: Option<RestartPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reschedule_policy: Option<ReschedulePolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ephemeral_disk: Option<EphemeralDisk>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<UpdateStrategy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate: Option<MigrateStrategy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, String>>,
}

/// A single unit of work, run by a driver
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Task {
    pub name: String,

    /// Driver name: "docker", "raw_exec", "java", ...
    pub driver: String,

    /// Driver-specific configuration, free-form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<Constraint>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Resources>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, String>>,

    /// Grace period before force-kill, nanos
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kill_timeout: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_config: Option<LogConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Vec<TaskArtifact>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault: Option<Vault>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<Template>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatch_payload: Option<DispatchPayloadConfig>,

    #[serde(default)]
    pub leader: bool,

    #[serde(default)]
    pub shutdown_delay: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kill_signal: Option<String>,
}

/// Scheduling constraint on a job, group or task
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Constraint {
    #[serde(rename = "LTarget")]
    pub l_target: String,
    #[serde(rename = "RTarget")]
    pub r_target: String,
    pub operand: String,
}

/// Rolling-update strategy
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateStrategy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_parallel: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_healthy_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthy_deadline: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_deadline: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_revert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canary: Option<i32>,
}

impl UpdateStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_parallel(mut self, n: i32) -> Self {
        self.max_parallel = Some(n);
        self
    }

    pub fn auto_revert(mut self, revert: bool) -> Self {
        self.auto_revert = Some(revert);
        self
    }

    pub fn canary(mut self, n: i32) -> Self {
        self.canary = Some(n);
        self
    }
}

/// Strategy for migrating allocations off draining nodes
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct MigrateStrategy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_parallel: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_healthy_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthy_deadline: Option<i64>,
}

/// Policy for rescheduling failed allocations onto other nodes
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ReschedulePolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempts: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_delay: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlimited: Option<bool>,
}

/// Policy for restarting failed tasks in place
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct RestartPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempts: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<i64>,
    /// "fail" or "delay"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// Scratch disk shared by the tasks of a group
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct EphemeralDisk {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticky: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate: Option<bool>,
    #[serde(rename = "SizeMB", skip_serializing_if = "Option::is_none")]
    pub size_mb: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct PeriodicConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prohibit_overlap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ParameterizedJobConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_required: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_optional: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct LogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_files: Option<i32>,
    #[serde(rename = "MaxFileSizeMB", skip_serializing_if = "Option::is_none")]
    pub max_file_size_mb: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DispatchPayloadConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Vault {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_signal: Option<String>,
}

/// Remote artifact fetched into the task directory before start
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct TaskArtifact {
    #[serde(rename = "GetterSource", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "GetterDestination", skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(rename = "GetterOptions", skip_serializing_if = "Option::is_none")]
    pub options: Option<HashMap<String, String>>,
    #[serde(rename = "GetterMode", skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Template {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,
    #[serde(rename = "DestPath", skip_serializing_if = "Option::is_none")]
    pub dest_path: Option<String>,
    #[serde(rename = "EmbeddedTmpl", skip_serializing_if = "Option::is_none")]
    pub embedded_tmpl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_signal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splay: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perms: Option<String>,
    #[serde(rename = "LeftDelim", skip_serializing_if = "Option::is_none")]
    pub left_delim: Option<String>,
    #[serde(rename = "RightDelim", skip_serializing_if = "Option::is_none")]
    pub right_delim: Option<String>,
    #[serde(rename = "Envvars", skip_serializing_if = "Option::is_none")]
    pub envvars: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault_grace: Option<i64>,
}

/// Service registered for a task in the cluster's service catalog
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Service {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canary_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<ServiceCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_restart: Option<CheckRestart>,
}

/// Health check attached to a service
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceCheck {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub check_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_mode: Option<String>,
    /// Interval between checks, nanos
    #[serde(default)]
    pub interval: i64,
    #[serde(default)]
    pub timeout: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_status: Option<String>,
    #[serde(rename = "TLSSkipVerify", default)]
    pub tls_skip_verify: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_restart: Option<CheckRestart>,
    #[serde(rename = "GRPCService", skip_serializing_if = "Option::is_none")]
    pub grpc_service: Option<String>,
    #[serde(rename = "GRPCUseTLS", default)]
    pub grpc_use_tls: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CheckRestart {
    #[serde(default)]
    pub limit: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grace: Option<i64>,
    #[serde(default)]
    pub ignore_warnings: bool,
}

/// Resource ask for a task
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Resources {
    #[serde(rename = "CPU", skip_serializing_if = "Option::is_none")]
    pub cpu: Option<i32>,
    #[serde(rename = "MemoryMB", skip_serializing_if = "Option::is_none")]
    pub memory_mb: Option<i32>,
    #[serde(rename = "DiskMB", skip_serializing_if = "Option::is_none")]
    pub disk_mb: Option<i32>,
    #[serde(rename = "IOPS", skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networks: Option<Vec<NetworkResource>>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    /// CPU ask in MHz
    pub fn cpu(mut self, mhz: i32) -> Self {
        self.cpu = Some(mhz);
        self
    }

    /// Memory ask in MB
    pub fn memory_mb(mut self, mb: i32) -> Self {
        self.memory_mb = Some(mb);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(rename = "CIDR", skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
    #[serde(rename = "IP", skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(rename = "MBits", skip_serializing_if = "Option::is_none")]
    pub m_bits: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_ports: Option<Vec<Port>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_ports: Option<Vec<Port>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Port {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub value: i64,
}

/// Volume mount inside a task
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct VolumeMount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub propagation_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default)]
    pub read_only: bool,
}

// ============================================================================
// Summaries
// ============================================================================

/// Per-group allocation counts for a job
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct JobSummary {
    #[serde(rename = "JobID", skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default)]
    pub summary: HashMap<String, TaskGroupSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<JobChildrenSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_index: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_index: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct TaskGroupSummary {
    #[serde(default)]
    pub queued: u64,
    #[serde(default)]
    pub complete: u64,
    #[serde(default)]
    pub failed: u64,
    #[serde(default)]
    pub running: u64,
    #[serde(default)]
    pub starting: u64,
    #[serde(default)]
    pub lost: u64,
}

/// Counts for the children of a periodic or parameterized job
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct JobChildrenSummary {
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub running: u64,
    #[serde(default)]
    pub dead: u64,
}

// ============================================================================
// Request envelopes
// ============================================================================

/// Body of a job registration: the spec wrapped under a `Job` key
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobRegistration<'a> {
    pub job: &'a Job,
}

/// Body of a job update with optional check-and-set on the modify index
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobUpdateRequest<'a> {
    pub job: &'a Job,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce_index: Option<bool>,
    pub job_modify_index: u64,
    pub policy_override: bool,
}
