use crate::model::Agent;
use segguard_net::{NetworkRange, RangeError, ip_in_src_and_not_in_dst};
use segguard_types::Subnet;
use std::net::IpAddr;

/// Decide whether one (agent, target, source segment, target segment) tuple
/// demonstrates a segmentation violation.
///
/// The tuple violates iff the telemetry target sits inside `target_subnet`
/// and the agent owns a crossing address: one inside `source_subnet` but not
/// inside `target_subnet`. A same-segment pair never violates, and an agent
/// with no presence in `source_subnet` establishes no crossing identity.
pub fn is_segmentation_violation(
    agent: &Agent,
    target_ip: IpAddr,
    source_subnet: &Subnet,
    target_subnet: &Subnet,
) -> Result<bool, RangeError> {
    if source_subnet == target_subnet {
        return Ok(false);
    }

    let source_range = NetworkRange::resolve(source_subnet.as_str())?;
    let target_range = NetworkRange::resolve(target_subnet.as_str())?;

    if !target_range.contains(target_ip) {
        return Ok(false);
    }

    Ok(ip_in_src_and_not_in_dst(&agent.ip_addresses, &source_range, &target_range).is_some())
}
