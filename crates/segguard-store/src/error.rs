use segguard_types::AgentGuid;
use thiserror::Error;

/// Store-level failures surfaced to the evaluation pipeline.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The reporting GUID is unknown. Fatal for the current telemetry
    /// record; the pipeline does not retry.
    #[error("agent not found: {0}")]
    AgentNotFound(AgentGuid),
}
