//! Stable identifiers for zero-trust tests and event titles.
//!
//! `test` names the zero-trust test a finding is reported under. Titles are
//! the human-facing headers on individual events.

// Zero-trust tests
pub const TEST_SEGMENTATION: &str = "segmentation";

// Event titles: segmentation
pub const TITLE_SEGMENTATION_VIOLATION: &str = "Segmentation event";
pub const TITLE_SEGMENTATION_DONE: &str = "Segmentation test done";
