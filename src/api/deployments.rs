//! Deployment endpoints

use crate::error::Result;
use crate::http::Http;
use crate::models::{Deployment, EvaluationResponse};

/// Handle for the deployment endpoints
pub struct Deployments<'a> {
    http: &'a Http,
}

impl<'a> Deployments<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// List deployments, optionally filtered by ID prefix
    pub async fn list(
        &self,
        index: Option<u64>,
        prefix: Option<&str>,
        wait: Option<&str>,
    ) -> Result<Vec<Deployment>> {
        self.http
            .get("deployments")
            .query_opt("index", index)
            .query_opt("prefix", prefix)
            .query_opt("wait", wait)
            .recv()
            .await
    }

    /// Read a deployment; unknown IDs map to `None`
    pub async fn read(
        &self,
        deployment_id: &str,
        index: Option<u64>,
        wait: Option<&str>,
    ) -> Result<Option<Deployment>> {
        self.http
            .get(&format!("deployment/{}", deployment_id))
            .query_opt("index", index)
            .query_opt("wait", wait)
            .recv_optional()
            .await
    }

    /// Mark a deployment as failed, stopping its rollout
    pub async fn fail(&self, deployment_id: &str) -> Result<EvaluationResponse> {
        self.http
            .post(&format!("deployment/fail/{}", deployment_id))
            .recv()
            .await
    }
}
