use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable agent identifier, assigned when the agent first phones home.
///
/// Kept opaque: the control server treats it as a lookup key and never
/// inspects its structure.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct AgentGuid(String);

impl AgentGuid {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AgentGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
