use crate::error::StoreError;
use segguard_types::{Event, FindingStatus, SegmentationFinding, SubnetPair};
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// Recorder seam for segmentation findings.
///
/// Implementations must keep the upsert atomic per pair key: the enclosing
/// pipeline may process telemetry concurrently, and two records can target
/// the same pair.
pub trait FindingStore {
    /// Append `event` to the finding for `subnets`, creating the aggregate
    /// on first contact. The merged status keeps the most severe value.
    fn create_or_add_to_existing_finding(
        &self,
        subnets: SubnetPair,
        status: FindingStatus,
        event: Event,
    ) -> Result<(), StoreError>;
}

/// Process-local finding store. One lock guards the whole map, which makes
/// every upsert atomic per key.
#[derive(Debug, Default)]
pub struct InMemoryFindingStore {
    findings: Mutex<BTreeMap<SubnetPair, SegmentationFinding>>,
}

impl InMemoryFindingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finding(&self, subnets: &SubnetPair) -> Option<SegmentationFinding> {
        let findings = self.findings.lock().unwrap_or_else(PoisonError::into_inner);
        findings.get(subnets).cloned()
    }

    /// Snapshot of every aggregate, in canonical pair order.
    pub fn findings(&self) -> Vec<SegmentationFinding> {
        let findings = self.findings.lock().unwrap_or_else(PoisonError::into_inner);
        findings.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        let findings = self.findings.lock().unwrap_or_else(PoisonError::into_inner);
        findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FindingStore for InMemoryFindingStore {
    fn create_or_add_to_existing_finding(
        &self,
        subnets: SubnetPair,
        status: FindingStatus,
        event: Event,
    ) -> Result<(), StoreError> {
        let mut findings = self.findings.lock().unwrap_or_else(PoisonError::into_inner);
        match findings.get_mut(&subnets) {
            Some(existing) => existing.add_event(status, event),
            None => {
                findings.insert(
                    subnets.clone(),
                    SegmentationFinding::new(subnets, status, event),
                );
            }
        }
        Ok(())
    }
}
