//! Evaluation endpoints

use crate::error::Result;
use crate::http::Http;
use crate::models::{Allocation, Evaluation};

/// Handle for the evaluation endpoints
pub struct Evaluations<'a> {
    http: &'a Http,
}

impl<'a> Evaluations<'a> {
    pub(crate) fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Read a single evaluation
    pub async fn read(
        &self,
        eval_id: &str,
        index: Option<u64>,
        wait: Option<&str>,
    ) -> Result<Evaluation> {
        self.http
            .get(&format!("evaluation/{}", eval_id))
            .query_opt("index", index)
            .query_opt("wait", wait)
            .recv()
            .await
    }

    /// Allocations created by an evaluation
    pub async fn allocations(
        &self,
        eval_id: &str,
        index: Option<u64>,
        wait: Option<&str>,
    ) -> Result<Vec<Allocation>> {
        self.http
            .get(&format!("evaluation/{}/allocations", eval_id))
            .query_opt("index", index)
            .query_opt("wait", wait)
            .recv()
            .await
    }
}
