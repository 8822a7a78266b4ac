//! Typed mirror of the control plane's wire schema
//!
//! Field names on the wire are PascalCase (`ID`, `JobID`, `CreateIndex`);
//! records here keep snake_case and map via serde renames. Optional wire
//! fields are `Option<T>` and are omitted from request bodies when unset.

pub mod acl;
pub mod agent;
pub mod allocation;
pub mod deployment;
pub mod evaluation;
pub mod job;
pub mod node;
pub mod plan;
pub mod stats;
pub mod volume;

pub use acl::*;
pub use agent::*;
pub use allocation::*;
pub use deployment::*;
pub use evaluation::*;
pub use job::*;
pub use node::*;
pub use plan::*;
pub use stats::*;
pub use volume::*;
