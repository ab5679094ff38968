use crate::model::{Agent, SegmentGroup};
use segguard_types::{AgentGuid, Subnet};
use std::net::IpAddr;

pub fn agent(guid: &str, hostname: &str, addresses: &[&str]) -> Agent {
    Agent {
        guid: AgentGuid::new(guid),
        hostname: hostname.to_string(),
        ip_addresses: addresses
            .iter()
            .map(|a| a.parse().expect("test address"))
            .collect(),
    }
}

pub fn group(subnets: &[&str]) -> SegmentGroup {
    SegmentGroup::new(subnets.iter().map(Subnet::new).collect())
}

pub fn ip(text: &str) -> IpAddr {
    text.parse().expect("test ip")
}
