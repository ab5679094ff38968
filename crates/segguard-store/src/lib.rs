//! Store seams consumed by the evaluation pipeline, with in-memory
//! reference implementations.
//!
//! The control server persists agents and findings elsewhere; this crate
//! fixes the contracts the core relies on: agent lookup by GUID, and the
//! idempotent finding upsert keyed by unordered subnet pair.

#![forbid(unsafe_code)]

mod agents;
mod error;
mod findings;

pub use agents::{AgentStore, InMemoryAgentStore};
pub use error::StoreError;
pub use findings::{FindingStore, InMemoryFindingStore};
