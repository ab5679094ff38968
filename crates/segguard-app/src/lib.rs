//! Use-case orchestration for segguard.
//!
//! The host ingestion pipeline hands this crate loose telemetry JSON plus
//! its store handles; everything heavier lives in the domain and net
//! crates. This layer validates the boundary, resolves the reporting agent,
//! and wires detections into the finding store.

#![forbid(unsafe_code)]

mod error;
mod scan;
mod telemetry;

pub use error::ScanError;
pub use scan::{ScanContext, handle_scan_payload, handle_scan_telemetry, handle_segmentation_done};
pub use telemetry::{ScanRequest, TelemetryError, parse_scan_telemetry};
