//! Configuration parsing and policy resolution for segguard.
//!
//! The host server hands this crate the raw `segguard.toml` text; resolution
//! validates every subnet descriptor and produces the typed policy the
//! handlers consume. No ambient state: the resolved policy is injected as an
//! explicit parameter wherever it is needed.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::SegguardConfigV1;
pub use resolve::{SegmentationPolicy, parse_config_toml, resolve_policy};
