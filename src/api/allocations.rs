//! Allocation endpoints

use crate::error::Result;
use crate::http::Http;
use crate::models::{Allocation, EvaluationResponse};

/// Handle for the allocation endpoints
pub struct Allocations<'a> {
    http: &'a Http,
}

impl<'a> Allocations<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// List allocations, optionally filtered by ID prefix
    pub async fn list(&self, prefix: Option<&str>) -> Result<Vec<Allocation>> {
        self.http
            .get("allocations")
            .query_opt("prefix", prefix)
            .recv()
            .await
    }

    /// Read a single allocation
    pub async fn read(&self, alloc_id: &str) -> Result<Allocation> {
        self.http
            .get(&format!("allocation/{}", alloc_id))
            .recv()
            .await
    }

    /// Stop and reschedule an allocation
    pub async fn stop(&self, alloc_id: &str) -> Result<EvaluationResponse> {
        self.http
            .post(&format!("allocation/{}/stop", alloc_id))
            .recv()
            .await
    }
}
