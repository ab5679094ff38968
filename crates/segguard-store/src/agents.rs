use crate::error::StoreError;
use segguard_domain::model::Agent;
use segguard_types::AgentGuid;
use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// Lookup seam for the agent registry.
pub trait AgentStore {
    /// Resolve an agent by its GUID. Unknown GUIDs are
    /// [`StoreError::AgentNotFound`].
    fn agent_by_guid(&self, guid: &AgentGuid) -> Result<Agent, StoreError>;
}

/// Process-local registry, used by tests and by hosts that have not wired
/// an external store yet.
#[derive(Debug, Default)]
pub struct InMemoryAgentStore {
    agents: Mutex<BTreeMap<AgentGuid, Agent>>,
}

impl InMemoryAgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, agent: Agent) {
        let mut agents = self.agents.lock().unwrap_or_else(PoisonError::into_inner);
        agents.insert(agent.guid.clone(), agent);
    }
}

impl AgentStore for InMemoryAgentStore {
    fn agent_by_guid(&self, guid: &AgentGuid) -> Result<Agent, StoreError> {
        let agents = self.agents.lock().unwrap_or_else(PoisonError::into_inner);
        agents
            .get(guid)
            .cloned()
            .ok_or_else(|| StoreError::AgentNotFound(guid.clone()))
    }
}
