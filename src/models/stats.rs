//! Host and allocation resource usage records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct HostStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<HostMemoryStats>,
    #[serde(rename = "CPU", default)]
    pub cpu: Vec<HostCpuStats>,
    #[serde(default)]
    pub disk_stats: Vec<HostDiskStats>,
    #[serde(default)]
    pub device_stats: Vec<DeviceGroupStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    #[serde(rename = "CPUTicksConsumed", skip_serializing_if = "Option::is_none")]
    pub cpu_ticks_consumed: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct HostMemoryStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct HostCpuStats {
    #[serde(rename = "CPU", skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct HostDiskStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(rename = "Mountpoint", skip_serializing_if = "Option::is_none")]
    pub mountpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inodes_used_percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceGroupStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_stats: Option<serde_json::Value>,
}

/// Resource usage of one allocation, as reported by its node
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct AllocResourceUsage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_usage: Option<ResourceUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceUsage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_stats: Option<MemoryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_stats: Option<CpuStats>,
    #[serde(default)]
    pub device_stats: Vec<DeviceGroupStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct MemoryStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<u64>,
    #[serde(rename = "RSS", skip_serializing_if = "Option::is_none")]
    pub rss: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_usage: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_usage: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_max_usage: Option<u64>,
    #[serde(default)]
    pub measured: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct CpuStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_mode: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_mode: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_ticks: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throttled_periods: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throttled_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
    #[serde(default)]
    pub measured: Vec<String>,
}

/// Directory entry in an allocation's filesystem
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct AllocFileInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default)]
    pub is_dir: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mod_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_stats_deserialization() {
        let json = r#"{
            "Memory": {"Total": 17179869184, "Available": 8589934592},
            "CPU": [{"CPU": "cpu0", "User": 12.5, "System": 3.1, "Idle": 84.4}],
            "Uptime": 123456
        }"#;

        let stats: HostStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.memory.unwrap().total, Some(17179869184));
        assert_eq!(stats.cpu[0].cpu.as_deref(), Some("cpu0"));
        assert_eq!(stats.uptime, Some(123456));
    }

    #[test]
    fn test_alloc_file_info() {
        let json = r#"{"Name": "alloc", "IsDir": true, "Size": 4096, "FileMode": "drwxrwxr-x"}"#;
        let info: AllocFileInfo = serde_json::from_str(json).unwrap();
        assert!(info.is_dir);
        assert_eq!(info.size, Some(4096));
    }
}
