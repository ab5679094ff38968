//! Pure segmentation-policy evaluation (no IO).
//!
//! Input: an agent, a telemetry target address, and the configured segment
//! groups. Output: detections ready for recording. Store access and
//! telemetry parsing live in the outer crates.

#![forbid(unsafe_code)]

pub mod model;

mod engine;
mod evaluator;
mod event;

pub use engine::{Detection, detect_violations, segmentation_done_detections};
pub use evaluator::is_segmentation_violation;

#[cfg(test)]
mod proptests;
#[cfg(test)]
pub(crate) mod test_support;
