//! Job endpoints: submit, inspect, stop and watch rollouts

use std::time::Duration;

use tracing::debug;

use crate::error::Result;
use crate::http::Http;
use crate::models::{
    Allocation, Deployment, Evaluation, EvaluationResponse, Job, JobPlanRequest, JobPlanResponse,
    JobRegistration, JobSummary, JobUpdateRequest,
};

/// Handle for the job endpoints
pub struct Jobs<'a> {
    http: &'a Http,
}

impl<'a> Jobs<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// List jobs, optionally filtered by ID prefix
    pub async fn list(&self, prefix: Option<&str>) -> Result<Vec<Job>> {
        self.http
            .get("jobs")
            .query_opt("prefix", prefix)
            .recv()
            .await
    }

    /// Register (or update) a job, enqueueing an evaluation
    pub async fn create(&self, job: &Job) -> Result<EvaluationResponse> {
        self.http
            .post("jobs")
            .json(&JobRegistration { job })
            .recv()
            .await
    }

    /// Read a single job spec
    pub async fn read(&self, job_id: &str) -> Result<Job> {
        self.http.get(&format!("job/{}", job_id)).recv().await
    }

    /// Update a job, optionally enforcing the expected modify index
    pub async fn update(
        &self,
        job: &Job,
        enforce_index: Option<bool>,
        job_modify_index: u64,
        policy_override: bool,
    ) -> Result<EvaluationResponse> {
        self.http
            .post(&format!("job/{}", job.id))
            .json(&JobUpdateRequest {
                job,
                enforce_index,
                job_modify_index,
                policy_override,
            })
            .recv()
            .await
    }

    /// Stop a job; `purge` also removes it from the server's state
    pub async fn stop(&self, job_id: &str, purge: Option<bool>) -> Result<EvaluationResponse> {
        self.http
            .delete(&format!("job/{}", job_id))
            .query_opt("purge", purge)
            .recv()
            .await
    }

    /// Dry-run a job spec against the scheduler
    pub async fn plan(
        &self,
        job: &Job,
        diff: Option<bool>,
        policy_override: bool,
    ) -> Result<JobPlanResponse> {
        self.http
            .post(&format!("job/{}/plan", job.id))
            .json(&JobPlanRequest {
                job,
                diff,
                policy_override,
            })
            .recv()
            .await
    }

    /// Allocations belonging to a job
    pub async fn allocations(
        &self,
        job_id: &str,
        all: Option<bool>,
        index: Option<u64>,
        wait: Option<&str>,
    ) -> Result<Vec<Allocation>> {
        self.http
            .get(&format!("job/{}/allocations", job_id))
            .query_opt("all", all)
            .query_opt("index", index)
            .query_opt("wait", wait)
            .recv()
            .await
    }

    /// Evaluations created for a job
    pub async fn evaluations(
        &self,
        job_id: &str,
        index: Option<u64>,
        wait: Option<&str>,
    ) -> Result<Vec<Evaluation>> {
        self.http
            .get(&format!("job/{}/evaluations", job_id))
            .query_opt("index", index)
            .query_opt("wait", wait)
            .recv()
            .await
    }

    /// Deployments created for a job, newest first
    pub async fn deployments(
        &self,
        job_id: &str,
        all: Option<bool>,
        index: Option<u64>,
        wait: Option<&str>,
    ) -> Result<Vec<Deployment>> {
        self.http
            .get(&format!("job/{}/deployments", job_id))
            .query_opt("all", all)
            .query_opt("index", index)
            .query_opt("wait", wait)
            .recv()
            .await
    }

    /// The job's most recent deployment, if any
    pub async fn deployment(&self, job_id: &str) -> Result<Option<Deployment>> {
        self.http
            .get(&format!("job/{}/deployment", job_id))
            .recv_optional()
            .await
    }

    /// Allocation counts per task group
    pub async fn summary(&self, job_id: &str) -> Result<JobSummary> {
        self.http
            .get(&format!("job/{}/summary", job_id))
            .recv()
            .await
    }

    /// The deployment for the job's current spec, or `None` when the
    /// active deployment belongs to an older submission
    async fn current_deployment(&self, job_id: &str) -> Result<Option<Deployment>> {
        let job = self.read(job_id).await?;
        let Some(modify_index) = job.job_modify_index else {
            return Ok(None);
        };
        let deployment = self.deployment(&job.id).await?;
        Ok(deployment.filter(|d| d.job_spec_modify_index == Some(modify_index)))
    }

    /// Watch the rollout of a job's current spec until it is healthy
    ///
    /// Polls the current deployment, sleeping between probes, until it
    /// reports healthy (`Some`), reaches a terminal failure, or the wait
    /// budget runs out (`None`). A zero wait gives exactly one probe.
    pub async fn await_healthy_deployment(
        &self,
        job_id: &str,
        wait: Duration,
    ) -> Result<Option<Deployment>> {
        let mut remaining = wait;
        loop {
            match self.current_deployment(job_id).await? {
                Some(deployment) if deployment.is_healthy() => {
                    debug!(
                        "job [{}] deployment {:?} is healthy [{}]",
                        job_id,
                        deployment.id,
                        deployment.status_description.as_deref().unwrap_or("")
                    );
                    return Ok(Some(deployment));
                }
                Some(deployment) if deployment.is_terminal() => {
                    debug!(
                        "job [{}] deployment {:?} ended {:?} [{}]",
                        job_id,
                        deployment.id,
                        deployment.status,
                        deployment.status_description.as_deref().unwrap_or("")
                    );
                    return Ok(None);
                }
                Some(deployment) => {
                    let unhealthy: u64 = deployment
                        .task_groups
                        .values()
                        .map(|g| g.unhealthy_allocs)
                        .sum();
                    debug!(
                        "job [{}] deployment {:?} {:?}: {} unhealthy",
                        job_id, deployment.id, deployment.status, unhealthy
                    );
                }
                None => debug!("no active deployment for job [{}]", job_id),
            }

            if remaining.is_zero() {
                return Ok(None);
            }
            let step = self.http.poll_interval.min(remaining);
            tokio::time::sleep(step).await;
            remaining -= step;
        }
    }
}
