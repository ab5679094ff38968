use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `segguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy. Validation happens during resolution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SegguardConfigV1 {
    /// Optional schema string for tooling (`segguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Toggle for the segmentation test as a whole.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Groups of subnet descriptors declared mutually isolated.
    #[serde(default)]
    pub segment_groups: Vec<Vec<String>>,
}
