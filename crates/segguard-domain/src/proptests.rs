//! Property-based tests for the evaluation core.
//!
//! Invariants covered:
//! - a same-segment pair never violates, whatever the agent looks like
//! - unordered-pair canonicalization is symmetric
//! - a target outside the target segment never produces a violation
//! - a crossing address plus a reached target always produces one

use crate::evaluator::is_segmentation_violation;
use crate::model::Agent;
use proptest::prelude::*;
use segguard_types::{AgentGuid, Subnet, SubnetPair};
use std::net::{IpAddr, Ipv4Addr};

fn arb_ipv4() -> impl Strategy<Value = IpAddr> {
    any::<u32>().prop_map(|bits| IpAddr::V4(Ipv4Addr::from(bits)))
}

fn arb_agent() -> impl Strategy<Value = Agent> {
    prop::collection::vec(arb_ipv4(), 0..6).prop_map(|ip_addresses| Agent {
        guid: AgentGuid::new("prop-agent"),
        hostname: "prop-host".to_string(),
        ip_addresses,
    })
}

fn arb_descriptor() -> impl Strategy<Value = String> {
    prop_oneof![
        (any::<u32>(), 0u8..=32)
            .prop_map(|(bits, prefix)| format!("{}/{prefix}", Ipv4Addr::from(bits))),
        any::<u32>().prop_map(|bits| Ipv4Addr::from(bits).to_string()),
    ]
}

proptest! {
    #[test]
    fn same_segment_never_violates(agent in arb_agent(), target in arb_ipv4(), descriptor in arb_descriptor()) {
        let subnet = Subnet::new(&descriptor);
        let violation = is_segmentation_violation(&agent, target, &subnet, &subnet).unwrap();
        prop_assert!(!violation);
    }

    #[test]
    fn pair_canonicalization_is_symmetric(a in arb_descriptor(), b in arb_descriptor()) {
        let ab = SubnetPair::new(Subnet::new(&a), Subnet::new(&b));
        let ba = SubnetPair::new(Subnet::new(&b), Subnet::new(&a));
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn unreached_target_never_violates(agent in arb_agent(), host in any::<u16>()) {
        // Targets are drawn from 192.168.0.0/16, disjoint from both segments.
        let [hi, lo] = host.to_be_bytes();
        let target = IpAddr::V4(Ipv4Addr::new(192, 168, hi, lo));
        let violation = is_segmentation_violation(
            &agent,
            target,
            &Subnet::new("10.0.0.0/24"),
            &Subnet::new("10.0.1.0/24"),
        )
        .unwrap();
        prop_assert!(!violation);
    }

    #[test]
    fn crossing_address_with_reached_target_always_violates(source_host in 1u8..255, target_host in 1u8..255) {
        let agent = Agent {
            guid: AgentGuid::new("prop-agent"),
            hostname: "prop-host".to_string(),
            ip_addresses: vec![IpAddr::V4(Ipv4Addr::new(10, 0, 0, source_host))],
        };
        let target = IpAddr::V4(Ipv4Addr::new(10, 0, 1, target_host));
        let violation = is_segmentation_violation(
            &agent,
            target,
            &Subnet::new("10.0.0.0/24"),
            &Subnet::new("10.0.1.0/24"),
        )
        .unwrap();
        prop_assert!(violation);
    }
}
