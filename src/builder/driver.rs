//! Driver configurations for tasks
//!
//! Driver config travels as a free-form JSON object with snake_case keys,
//! unlike the PascalCase job structure around it.

use std::collections::HashMap;

use serde::Serialize;

/// `raw_exec` driver: run a command directly on the host
#[derive(Debug, Clone, Serialize, Default)]
pub struct RawExecConfig {
    pub command: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl RawExecConfig {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }
}

/// `java` driver: run a jar under the node's JVM
#[derive(Debug, Clone, Serialize, Default)]
pub struct JavaConfig {
    pub jar_path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub jvm_options: Vec<String>,
}

impl JavaConfig {
    pub fn new(jar_path: impl Into<String>) -> Self {
        Self {
            jar_path: jar_path.into(),
            jvm_options: Vec::new(),
        }
    }

    pub fn jvm_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.jvm_options = options.into_iter().map(Into::into).collect();
        self
    }
}

/// Registry credentials for the docker driver
#[derive(Debug, Clone, Serialize, Default)]
pub struct DockerAuth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper: Option<String>,
}

/// `docker` driver: run a container image
///
/// Only the common knobs get chained setters; the long tail of fields is
/// public and can be set directly.
#[derive(Debug, Clone, Serialize, Default)]
pub struct DockerConfig {
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrypoint: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<DockerAuth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_soft_fail: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_search_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_servers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_hosts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_pull: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sysctl: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ulimit: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privileged: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipc_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_hard_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_aliases: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_opt: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shm_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_opt: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uts_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_driver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mounts: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<HashMap<String, String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cap_add: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cap_drop: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_hard_limit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_cfs_period: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertise_ipv6_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readonly_rootfs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
}

impl DockerConfig {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            ..Default::default()
        }
    }

    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    pub fn entrypoint<I, S>(mut self, entrypoint: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entrypoint = Some(entrypoint.into_iter().map(Into::into).collect());
        self
    }

    /// Port labels published from the group network
    pub fn ports<I, S>(mut self, ports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ports = Some(ports.into_iter().map(Into::into).collect());
        self
    }

    pub fn network_mode(mut self, mode: impl Into<String>) -> Self {
        self.network_mode = Some(mode.into());
        self
    }

    pub fn volumes<I, S>(mut self, volumes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.volumes = Some(volumes.into_iter().map(Into::into).collect());
        self
    }

    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn auth(mut self, auth: DockerAuth) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn force_pull(mut self, force: bool) -> Self {
        self.force_pull = Some(force);
        self
    }

    pub fn work_dir(mut self, dir: impl Into<String>) -> Self {
        self.work_dir = Some(dir.into());
        self
    }

    pub fn privileged(mut self, privileged: bool) -> Self {
        self.privileged = Some(privileged);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_exec_wire_keys() {
        let config = RawExecConfig::new("/usr/local/bin/serve").args(["--port", "8080"]);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["command"], "/usr/local/bin/serve");
        assert_eq!(json["args"][1], "8080");
    }

    #[test]
    fn test_raw_exec_skips_empty_args() {
        let config = RawExecConfig::new("/bin/true");
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("args").is_none());
    }

    #[test]
    fn test_java_wire_keys() {
        let config = JavaConfig::new("app.jar").jvm_options(["-Xmx512m"]);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["jar_path"], "app.jar");
        assert_eq!(json["jvm_options"][0], "-Xmx512m");
    }

    #[test]
    fn test_docker_wire_keys() {
        let config = DockerConfig::new("nginx:1.25")
            .ports(["http"])
            .network_mode("bridge")
            .label("tier", "frontend")
            .force_pull(true);

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["image"], "nginx:1.25");
        assert_eq!(json["ports"][0], "http");
        assert_eq!(json["network_mode"], "bridge");
        assert_eq!(json["labels"]["tier"], "frontend");
        assert_eq!(json["force_pull"], true);
        // Unset knobs stay off the wire
        assert!(json.get("privileged").is_none());
    }
}
