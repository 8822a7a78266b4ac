//! Endpoint groups of the control-plane API
//!
//! [`NomadClient`] is the entry point; each accessor hands out a borrowed
//! handle for one group of endpoints.

pub mod acl;
pub mod agent;
pub mod allocations;
pub mod client;
pub mod deployments;
pub mod evaluations;
pub mod jobs;
pub mod nodes;
pub mod operator;
pub mod search;
pub mod volumes;

pub use acl::{AclPolicies, AclTokens};
pub use agent::Agent;
pub use allocations::Allocations;
pub use client::Client;
pub use deployments::Deployments;
pub use evaluations::Evaluations;
pub use jobs::Jobs;
pub use nodes::Nodes;
pub use operator::Operator;
pub use search::Search;
pub use volumes::Volumes;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::Http;

/// Typed client for the control-plane API
pub struct NomadClient {
    http: Http,
}

impl NomadClient {
    /// Create a client from the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: Http::new(&config)?,
        })
    }

    /// Create a client from `NOMAD_ADDR` / `NOMAD_REGION` / `NOMAD_TOKEN`
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Job endpoints
    pub fn jobs(&self) -> Jobs<'_> {
        Jobs::new(&self.http)
    }

    /// Allocation endpoints
    pub fn allocations(&self) -> Allocations<'_> {
        Allocations::new(&self.http)
    }

    /// Node endpoints
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes::new(&self.http)
    }

    /// Evaluation endpoints
    pub fn evaluations(&self) -> Evaluations<'_> {
        Evaluations::new(&self.http)
    }

    /// Deployment endpoints
    pub fn deployments(&self) -> Deployments<'_> {
        Deployments::new(&self.http)
    }

    /// ACL token endpoints
    pub fn acl_tokens(&self) -> AclTokens<'_> {
        AclTokens::new(&self.http)
    }

    /// ACL policy endpoints
    pub fn acl_policies(&self) -> AclPolicies<'_> {
        AclPolicies::new(&self.http)
    }

    /// Agent endpoints
    pub fn agent(&self) -> Agent<'_> {
        Agent::new(&self.http)
    }

    /// Node-client endpoints (stats, allocation filesystems)
    pub fn client(&self) -> Client<'_> {
        Client::new(&self.http)
    }

    /// Operator endpoints (raft)
    pub fn operator(&self) -> Operator<'_> {
        Operator::new(&self.http)
    }

    /// Fuzzy search endpoint
    pub fn search(&self) -> Search<'_> {
        Search::new(&self.http)
    }

    /// CSI volume endpoints
    pub fn volumes(&self) -> Volumes<'_> {
        Volumes::new(&self.http)
    }
}
