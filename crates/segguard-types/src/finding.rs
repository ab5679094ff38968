use crate::event::Event;
use crate::ids;
use crate::subnet::SubnetPair;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status of a segmentation finding aggregate.
///
/// Ordered by severity so merges can keep the most severe observation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum FindingStatus {
    /// The agent finished its attempts without crossing the pair.
    Passed,
    /// Evidence exists but is not decisive.
    Inconclusive,
    /// A violation was demonstrated.
    Conclusive,
}

/// Persisted, mergeable record of violations for one subnet pair.
///
/// Invariant: at most one finding exists per unordered pair. Repeated
/// detections append events; they never duplicate aggregates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SegmentationFinding {
    /// Zero-trust test this finding was reported under.
    pub test: String,
    pub subnets: SubnetPair,
    pub status: FindingStatus,
    pub events: Vec<Event>,
}

impl SegmentationFinding {
    pub fn new(subnets: SubnetPair, status: FindingStatus, event: Event) -> Self {
        Self {
            test: ids::TEST_SEGMENTATION.to_string(),
            subnets,
            status,
            events: vec![event],
        }
    }

    /// Merge one more observation into the aggregate.
    ///
    /// Events are append-only; the status keeps the most severe value seen,
    /// so a late `Passed` report never downgrades a recorded violation.
    pub fn add_event(&mut self, status: FindingStatus, event: Event) {
        self.status = self.status.max(status);
        self.events.push(event);
    }
}
