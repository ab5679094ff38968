use segguard_types::{AgentGuid, Subnet};
use std::net::IpAddr;

/// A simulated compromise agent as the control server knows it.
///
/// Read-only to this crate; the store owns persistence and identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Agent {
    pub guid: AgentGuid,
    pub hostname: String,
    /// Interface addresses in the order the agent reported them.
    pub ip_addresses: Vec<IpAddr>,
}

/// Ordered set of subnets declared mutually isolated by policy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SegmentGroup {
    pub subnets: Vec<Subnet>,
}

impl SegmentGroup {
    pub fn new(subnets: Vec<Subnet>) -> Self {
        Self { subnets }
    }
}
