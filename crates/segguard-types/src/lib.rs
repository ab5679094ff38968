//! Stable DTOs and IDs used across the segguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for zero-trust events and finding aggregates
//! - stable string IDs and event titles
//! - canonical subnet-descriptor and unordered-pair handling

#![forbid(unsafe_code)]

pub mod event;
pub mod finding;
pub mod guid;
pub mod ids;
pub mod subnet;

pub use event::{Event, EventType};
pub use finding::{FindingStatus, SegmentationFinding};
pub use guid::AgentGuid;
pub use subnet::{Subnet, SubnetPair};
