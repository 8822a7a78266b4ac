//! # nomad-client
//!
//! Typed async client for the Nomad HTTP control-plane API.
//!
//! The client covers the job lifecycle (submit, plan, inspect, stop),
//! the read side of the scheduler's records (allocations, evaluations,
//! deployments, nodes), ACL tokens and policies, CSI volumes, and the
//! agent/operator surface. Job specs are assembled with structured
//! builders; responses deserialize into the typed wire model under
//! [`models`].
//!
//! Two pieces carry the interesting behavior:
//!
//! - the HTTP layer retries transient transport failures with exponential
//!   backoff ([`RetryPolicy`]) and maps 404 to `None` for lookups that can
//!   legitimately miss;
//! - [`api::Jobs::await_healthy_deployment`] polls a job's rollout until
//!   every task group is healthy or the wait budget runs out.
//!
//! ## Quick start
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use nomad_client::builder::RawExecConfig;
//! use nomad_client::models::{Job, Task, TaskGroup};
//! use nomad_client::{ClientConfig, NomadClient};
//!
//! # async fn run() -> nomad_client::Result<()> {
//! let config = ClientConfig::new("http://127.0.0.1:4646").with_token("my-token");
//! let client = NomadClient::new(config)?;
//!
//! let job = Job::builder("example", "example")
//!     .group(
//!         TaskGroup::builder("group")
//!             .task(
//!                 Task::builder("serve")
//!                     .raw_exec(RawExecConfig::new("/usr/local/bin/serve"))
//!                     .build()?,
//!             )
//!             .build(),
//!     )
//!     .build();
//!
//! let response = client.jobs().create(&job).await?;
//! println!("evaluation {}", response.eval_id);
//!
//! let deployment = client
//!     .jobs()
//!     .await_healthy_deployment("example", Duration::from_secs(30))
//!     .await?;
//! match deployment {
//!     Some(d) => println!("rollout healthy: {:?}", d.id),
//!     None => println!("rollout did not become healthy in time"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod builder;
pub mod config;
pub mod error;
mod http;
pub mod models;

pub use api::NomadClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::RetryPolicy;
