//! Structured builders for job specifications
//!
//! Required fields are taken up front so `build()` stays infallible, except
//! for tasks where a driver configuration must have been chosen.
//!
//! ```
//! use nomad_client::builder::DockerConfig;
//! use nomad_client::models::{Job, Resources, Task, TaskGroup};
//!
//! let job = Job::builder("web", "web")
//!     .datacenter("dc1")
//!     .group(
//!         TaskGroup::builder("frontend")
//!             .count(2)
//!             .task(
//!                 Task::builder("nginx")
//!                     .docker(DockerConfig::new("nginx:1.25").ports(["http"]))
//!                     .resources(Resources::new().cpu(500).memory_mb(256))
//!                     .build()
//!                     .unwrap(),
//!             )
//!             .build(),
//!     )
//!     .build();
//! assert_eq!(job.task_groups[0].tasks[0].driver, "docker");
//! ```

mod driver;

pub use driver::{DockerAuth, DockerConfig, JavaConfig, RawExecConfig};

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::{
    Constraint, EphemeralDisk, Job, LogConfig, MigrateStrategy, ReschedulePolicy, Resources,
    RestartPolicy, Service, Task, TaskArtifact, TaskGroup, Template, UpdateStrategy,
};

impl Job {
    /// Start building a job spec
    pub fn builder(id: impl Into<String>, name: impl Into<String>) -> JobBuilder {
        JobBuilder::new(id, name)
    }
}

impl TaskGroup {
    /// Start building a task group
    pub fn builder(name: impl Into<String>) -> TaskGroupBuilder {
        TaskGroupBuilder::new(name)
    }
}

impl Task {
    /// Start building a task
    pub fn builder(name: impl Into<String>) -> TaskBuilder {
        TaskBuilder::new(name)
    }
}

/// Builder for [`Job`]
#[derive(Debug, Clone)]
pub struct JobBuilder {
    job: Job,
}

impl JobBuilder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            job: Job {
                id: id.into(),
                name: name.into(),
                ..Default::default()
            },
        }
    }

    /// Add a datacenter the job may run in; "dc1" is assumed when none are
    /// added
    pub fn datacenter(mut self, name: impl Into<String>) -> Self {
        self.job.datacenters.push(name.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.job.region = Some(region.into());
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.job.namespace = Some(namespace.into());
        self
    }

    /// Scheduler type: "service", "batch" or "system"
    pub fn job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job.job_type = Some(job_type.into());
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.job.priority = Some(priority);
        self
    }

    pub fn all_at_once(mut self, all_at_once: bool) -> Self {
        self.job.all_at_once = Some(all_at_once);
        self
    }

    pub fn meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.job
            .meta
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.job
            .constraints
            .get_or_insert_with(Vec::new)
            .push(constraint);
        self
    }

    pub fn update(mut self, strategy: UpdateStrategy) -> Self {
        self.job.update = Some(strategy);
        self
    }

    pub fn reschedule(mut self, policy: ReschedulePolicy) -> Self {
        self.job.reschedule = Some(policy);
        self
    }

    pub fn migrate(mut self, strategy: MigrateStrategy) -> Self {
        self.job.migrate = Some(strategy);
        self
    }

    pub fn group(mut self, group: TaskGroup) -> Self {
        self.job.task_groups.push(group);
        self
    }

    pub fn build(mut self) -> Job {
        if self.job.datacenters.is_empty() {
            self.job.datacenters.push("dc1".to_string());
        }
        self.job
    }
}

/// Builder for [`TaskGroup`]
#[derive(Debug, Clone)]
pub struct TaskGroupBuilder {
    group: TaskGroup,
}

impl TaskGroupBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            group: TaskGroup {
                name: name.into(),
                ..Default::default()
            },
        }
    }

    /// Number of instances of the group
    pub fn count(mut self, count: i32) -> Self {
        self.group.count = Some(count);
        self
    }

    pub fn task(mut self, task: Task) -> Self {
        self.group.tasks.push(task);
        self
    }

    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.group
            .constraints
            .get_or_insert_with(Vec::new)
            .push(constraint);
        self
    }

    pub fn restart(mut self, policy: RestartPolicy) -> Self {
        self.group.restart_policy = Some(policy);
        self
    }

    pub fn reschedule(mut self, policy: ReschedulePolicy) -> Self {
        self.group.reschedule_policy = Some(policy);
        self
    }

    pub fn update(mut self, strategy: UpdateStrategy) -> Self {
        self.group.update = Some(strategy);
        self
    }

    pub fn ephemeral_disk(mut self, disk: EphemeralDisk) -> Self {
        self.group.ephemeral_disk = Some(disk);
        self
    }

    pub fn meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.group
            .meta
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> TaskGroup {
        self.group
    }
}

/// Builder for [`Task`]
///
/// Exactly one driver configuration must be chosen before `build()`.
#[derive(Debug, Clone)]
pub struct TaskBuilder {
    task: Task,
    config_error: Option<String>,
}

impl TaskBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            task: Task {
                name: name.into(),
                ..Default::default()
            },
            config_error: None,
        }
    }

    /// Use the `raw_exec` driver
    pub fn raw_exec(self, config: RawExecConfig) -> Self {
        self.driver("raw_exec", &config)
    }

    /// Use the `java` driver
    pub fn java(self, config: JavaConfig) -> Self {
        self.driver("java", &config)
    }

    /// Use the `docker` driver
    pub fn docker(self, config: DockerConfig) -> Self {
        self.driver("docker", &config)
    }

    /// Use an arbitrary driver with its serialized configuration
    pub fn driver(mut self, driver: impl Into<String>, config: &impl Serialize) -> Self {
        match serde_json::to_value(config) {
            Ok(value) => {
                self.task.driver = driver.into();
                self.task.config = Some(value);
            }
            Err(e) => self.config_error = Some(e.to_string()),
        }
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.task
            .env
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn resources(mut self, resources: Resources) -> Self {
        self.task.resources = Some(resources);
        self
    }

    pub fn artifact(mut self, artifact: TaskArtifact) -> Self {
        self.task
            .artifacts
            .get_or_insert_with(Vec::new)
            .push(artifact);
        self
    }

    pub fn template(mut self, template: Template) -> Self {
        self.task
            .templates
            .get_or_insert_with(Vec::new)
            .push(template);
        self
    }

    pub fn service(mut self, service: Service) -> Self {
        self.task
            .services
            .get_or_insert_with(Vec::new)
            .push(service);
        self
    }

    pub fn meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.task
            .meta
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.task.user = Some(user.into());
        self
    }

    /// Grace period before force-kill, nanos
    pub fn kill_timeout(mut self, nanos: i64) -> Self {
        self.task.kill_timeout = Some(nanos);
        self
    }

    pub fn kill_signal(mut self, signal: impl Into<String>) -> Self {
        self.task.kill_signal = Some(signal.into());
        self
    }

    pub fn leader(mut self, leader: bool) -> Self {
        self.task.leader = leader;
        self
    }

    pub fn log_config(mut self, config: LogConfig) -> Self {
        self.task.log_config = Some(config);
        self
    }

    pub fn build(self) -> Result<Task> {
        if let Some(error) = self.config_error {
            return Err(Error::InvalidSpec(format!(
                "task '{}': driver config failed to serialize: {}",
                self.task.name, error
            )));
        }
        if self.task.driver.is_empty() {
            return Err(Error::InvalidSpec(format!(
                "task '{}' has no driver configured",
                self.task.name
            )));
        }
        Ok(self.task)
    }
}

impl TaskArtifact {
    /// Artifact fetched from the given source URL
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..Default::default()
        }
    }

    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_exec_task(name: &str) -> Task {
        Task::builder(name)
            .raw_exec(RawExecConfig::new("/usr/local/bin/serve"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_job_builder_defaults_datacenter() {
        let job = Job::builder("web", "web").build();
        assert_eq!(job.datacenters, vec!["dc1".to_string()]);
    }

    #[test]
    fn test_job_builder_explicit_datacenters() {
        let job = Job::builder("web", "web")
            .datacenter("us-east-1")
            .datacenter("us-west-1")
            .build();
        assert_eq!(job.datacenters.len(), 2);
    }

    #[test]
    fn test_nested_build() {
        let job = Job::builder("web", "web")
            .job_type("service")
            .group(
                TaskGroup::builder("frontend")
                    .count(3)
                    .task(raw_exec_task("server"))
                    .restart(RestartPolicy {
                        attempts: Some(2),
                        mode: Some("fail".to_string()),
                        ..Default::default()
                    })
                    .build(),
            )
            .build();

        assert_eq!(job.task_groups.len(), 1);
        let group = &job.task_groups[0];
        assert_eq!(group.count, Some(3));
        assert_eq!(group.tasks[0].driver, "raw_exec");
        assert_eq!(group.restart_policy.as_ref().unwrap().attempts, Some(2));
    }

    #[test]
    fn test_task_requires_driver() {
        let result = Task::builder("empty").build();
        assert!(matches!(result, Err(Error::InvalidSpec(_))));
    }

    #[test]
    fn test_task_driver_config_value() {
        let task = Task::builder("db")
            .docker(DockerConfig::new("postgres:16").ports(["db"]))
            .env("POSTGRES_PASSWORD", "secret")
            .build()
            .unwrap();

        assert_eq!(task.driver, "docker");
        let config = task.config.unwrap();
        assert_eq!(config["image"], "postgres:16");
        assert_eq!(task.env.unwrap()["POSTGRES_PASSWORD"], "secret");
    }

    #[test]
    fn test_java_task_uses_java_driver() {
        let task = Task::builder("svc")
            .java(JavaConfig::new("service.jar").jvm_options(["-Xmx256m"]))
            .build()
            .unwrap();
        assert_eq!(task.driver, "java");
        assert_eq!(task.config.unwrap()["jar_path"], "service.jar");
    }

    #[test]
    fn test_artifact_builder() {
        let artifact = TaskArtifact::new("https://example.com/app.tar.gz")
            .destination("local/app")
            .option("checksum", "sha256:abc");

        assert_eq!(
            artifact.source.as_deref(),
            Some("https://example.com/app.tar.gz")
        );
        assert_eq!(artifact.options.unwrap()["checksum"], "sha256:abc");
    }
}
