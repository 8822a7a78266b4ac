//! CSI volume endpoints

use crate::error::Result;
use crate::http::Http;
use crate::models::{CsiVolume, VolumeRegistration};

/// Handle for the CSI volume endpoints
pub struct Volumes<'a> {
    http: &'a Http,
}

impl<'a> Volumes<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// List volumes, optionally filtered by type, node or plugin
    pub async fn list(
        &self,
        volume_type: Option<&str>,
        node_id: Option<&str>,
        plugin_id: Option<&str>,
    ) -> Result<Vec<CsiVolume>> {
        self.http
            .get("volumes")
            .query_opt("type", volume_type)
            .query_opt("node_id", node_id)
            .query_opt("plugin_id", plugin_id)
            .recv()
            .await
    }

    /// Read a volume; unknown IDs map to `None`
    pub async fn read(&self, volume_id: &str) -> Result<Option<CsiVolume>> {
        self.http
            .get(&format!("volume/csi/{}", volume_id))
            .recv_optional()
            .await
    }

    /// Register externally created volumes under the given ID
    pub async fn register(&self, volume_id: &str, volumes: &[CsiVolume]) -> Result<()> {
        self.http
            .put(&format!("volume/csi/{}", volume_id))
            .json(&VolumeRegistration { volumes })
            .recv_unit()
            .await
    }

    /// Deregister a volume; `force` ignores existing claims
    pub async fn deregister(&self, volume_id: &str, force: Option<bool>) -> Result<()> {
        self.http
            .delete(&format!("volume/csi/{}", volume_id))
            .query_opt("force", force)
            .recv_unit()
            .await
    }

    /// Detach a volume from the given node
    pub async fn detach(&self, volume_id: &str, node: &str) -> Result<()> {
        self.http
            .delete(&format!("volume/csi/{}/detach", volume_id))
            .query("node", node)
            .recv_unit()
            .await
    }
}
