use crate::range::NetworkRange;
use std::net::IpAddr;

/// First address in `addresses` that falls inside `range`.
///
/// Address order is the agent's declared interface order, which keeps the
/// choice deterministic when several interfaces sit in the same segment.
pub fn ip_if_in_subnet(addresses: &[IpAddr], range: &NetworkRange) -> Option<IpAddr> {
    addresses.iter().copied().find(|ip| range.contains(*ip))
}

/// First address that proves a crossing: inside `src`, outside `dst`.
pub fn ip_in_src_and_not_in_dst(
    addresses: &[IpAddr],
    src: &NetworkRange,
    dst: &NetworkRange,
) -> Option<IpAddr> {
    addresses
        .iter()
        .copied()
        .find(|ip| src.contains(*ip) && !dst.contains(*ip))
}
