//! Node-client endpoints: host stats and allocation filesystems
//!
//! These are served by client nodes; when asked of a server they are
//! forwarded to the node given by `node_id`.

use crate::error::Result;
use crate::http::Http;
use crate::models::{AllocFileInfo, AllocResourceUsage, HostStats};

/// Handle for the node-client endpoints
pub struct Client<'a> {
    http: &'a Http,
}

impl<'a> Client<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Host resource usage of a client node
    pub async fn stats(&self, node_id: Option<&str>) -> Result<HostStats> {
        self.http
            .get("client/stats")
            .query_opt("node_id", node_id)
            .recv()
            .await
    }

    /// Resource usage of a single allocation
    pub async fn allocation_stats(&self, alloc_id: &str) -> Result<AllocResourceUsage> {
        self.http
            .get(&format!("client/allocation/{}/stats", alloc_id))
            .recv()
            .await
    }

    /// List files under a path in an allocation's working directory
    pub async fn list_files(
        &self,
        alloc_id: &str,
        path: Option<&str>,
    ) -> Result<Vec<AllocFileInfo>> {
        self.http
            .get(&format!("client/fs/ls/{}", alloc_id))
            .query_opt("path", path)
            .recv()
            .await
    }

    /// Read a file from an allocation's working directory
    pub async fn read_file(&self, alloc_id: &str, path: &str) -> Result<String> {
        self.http
            .get(&format!("client/fs/cat/{}", alloc_id))
            .query("path", path)
            .recv_string()
            .await
    }

    /// Open a task's log file; the caller consumes the raw byte stream
    ///
    /// `log_type` is "stdout" or "stderr". With `follow` the response body
    /// stays open and streams new output as the task writes it.
    pub async fn logs(
        &self,
        alloc_id: &str,
        task: &str,
        log_type: &str,
        follow: bool,
    ) -> Result<reqwest::Response> {
        self.http
            .get(&format!("client/fs/logs/{}", alloc_id))
            .query("task", task)
            .query("type", log_type)
            .query("follow", follow)
            .recv_response()
            .await
    }
}
