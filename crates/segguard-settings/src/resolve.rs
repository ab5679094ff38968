use crate::model::SegguardConfigV1;
use anyhow::{Context, bail};
use segguard_domain::model::SegmentGroup;
use segguard_net::NetworkRange;
use segguard_types::Subnet;
use std::collections::BTreeSet;

/// Policy handed to the handlers: validated segment groups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SegmentationPolicy {
    pub enabled: bool,
    pub segment_groups: Vec<SegmentGroup>,
}

pub fn parse_config_toml(text: &str) -> anyhow::Result<SegguardConfigV1> {
    toml::from_str(text).context("parse segguard.toml")
}

/// Validate the raw config into the policy the handlers consume.
///
/// Every descriptor must resolve, groups must be non-empty, and a group may
/// not list the same descriptor twice.
pub fn resolve_policy(cfg: SegguardConfigV1) -> anyhow::Result<SegmentationPolicy> {
    let mut segment_groups = Vec::with_capacity(cfg.segment_groups.len());

    for (index, raw_group) in cfg.segment_groups.iter().enumerate() {
        if raw_group.is_empty() {
            bail!("segment group #{index} is empty");
        }

        let mut seen = BTreeSet::new();
        let mut subnets = Vec::with_capacity(raw_group.len());
        for descriptor in raw_group {
            NetworkRange::resolve(descriptor)
                .with_context(|| format!("segment group #{index}: descriptor '{descriptor}'"))?;
            let subnet = Subnet::new(descriptor);
            if !seen.insert(subnet.clone()) {
                bail!("segment group #{index} lists '{descriptor}' twice");
            }
            subnets.push(subnet);
        }
        segment_groups.push(SegmentGroup::new(subnets));
    }

    Ok(SegmentationPolicy {
        enabled: cfg.enabled.unwrap_or(true),
        segment_groups,
    })
}
