use crate::evaluator::is_segmentation_violation;
use crate::event;
use crate::model::{Agent, SegmentGroup};
use segguard_net::{NetworkRange, RangeError, ip_if_in_subnet};
use segguard_types::{Event, FindingStatus, SubnetPair};
use std::net::IpAddr;

/// One recordable observation: the unordered pair it belongs to, the status
/// it carries, and the event to append.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    pub subnets: SubnetPair,
    pub status: FindingStatus,
    pub event: Event,
}

/// Evaluate one scan observation against every segment pair implied by
/// policy.
///
/// Every group contributes its full ordered Cartesian product, self-pairs
/// and both directions included: direction decides which subnet acts as the
/// agent's segment and which as the reached one, and the evaluator rejects
/// the degenerate pairs cheaply. Positive pairs are independent; collapsing
/// both directions onto one unordered aggregate is the recorder's job.
pub fn detect_violations(
    agent: &Agent,
    target_ip: IpAddr,
    segment_groups: &[SegmentGroup],
) -> Result<Vec<Detection>, RangeError> {
    let mut out = Vec::new();

    for group in segment_groups {
        for source_subnet in &group.subnets {
            for target_subnet in &group.subnets {
                if !is_segmentation_violation(agent, target_ip, source_subnet, target_subnet)? {
                    continue;
                }

                let source_range = NetworkRange::resolve(source_subnet.as_str())?;
                // A positive evaluation implies at least one source address.
                let Some(source_ip) = ip_if_in_subnet(&agent.ip_addresses, &source_range) else {
                    continue;
                };

                out.push(Detection {
                    subnets: SubnetPair::new(source_subnet.clone(), target_subnet.clone()),
                    status: FindingStatus::Conclusive,
                    event: event::violation_event(
                        agent,
                        source_ip,
                        source_subnet,
                        target_ip,
                        target_subnet,
                    ),
                });
            }
        }
    }

    Ok(out)
}

/// Build the `Passed` observations recorded once an agent reports that its
/// cross-segment probing is finished.
///
/// Within each group: (subnets the agent has an address in) x (the group's
/// other subnets). Cross-group pairs are not declared isolated by policy,
/// so no finding is issued for them.
pub fn segmentation_done_detections(
    agent: &Agent,
    segment_groups: &[SegmentGroup],
) -> Result<Vec<Detection>, RangeError> {
    let mut out = Vec::new();

    for group in segment_groups {
        let mut member_subnets = Vec::new();
        let mut other_subnets = Vec::new();
        for subnet in &group.subnets {
            let range = NetworkRange::resolve(subnet.as_str())?;
            if ip_if_in_subnet(&agent.ip_addresses, &range).is_some() {
                member_subnets.push(subnet);
            } else {
                other_subnets.push(subnet);
            }
        }

        for source_subnet in &member_subnets {
            for target_subnet in &other_subnets {
                out.push(Detection {
                    subnets: SubnetPair::new((*source_subnet).clone(), (*target_subnet).clone()),
                    status: FindingStatus::Passed,
                    event: event::segmentation_done_event(agent, target_subnet),
                });
            }
        }
    }

    Ok(out)
}
