use crate::model::Agent;
use segguard_types::{Event, EventType, Subnet, ids};
use std::net::IpAddr;

/// Human-readable record of one demonstrated crossing.
///
/// `source_ip` is the agent's address inside the source segment; when
/// several qualify the caller picks the first in address order.
pub(crate) fn violation_event(
    agent: &Agent,
    source_ip: IpAddr,
    source_subnet: &Subnet,
    target_ip: IpAddr,
    target_subnet: &Subnet,
) -> Event {
    Event::new(
        ids::TITLE_SEGMENTATION_VIOLATION,
        format!(
            "Segmentation violation! Monkey on '{}', with the {} IP address (in segment {}) \
             managed to communicate cross segment to {} (in segment {}).",
            agent.hostname, source_ip, source_subnet, target_ip, target_subnet
        ),
        EventType::Network,
    )
}

/// Record that the agent finished probing towards one segment.
pub(crate) fn segmentation_done_event(agent: &Agent, target_subnet: &Subnet) -> Event {
    Event::new(
        ids::TITLE_SEGMENTATION_DONE,
        format!(
            "Monkey on {} is done attempting cross-segment communication to the {} segment.",
            agent.hostname, target_subnet
        ),
        EventType::Network,
    )
}
