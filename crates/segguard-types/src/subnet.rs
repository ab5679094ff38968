use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical subnet descriptor as declared in policy.
///
/// Normalization rules are intentionally simple and deterministic:
/// - surrounding whitespace is trimmed
/// - the text is otherwise kept verbatim, so findings echo exactly what the
///   operator configured
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct Subnet(String);

impl Subnet {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Subnet {
    fn from(value: &str) -> Self {
        Subnet::new(value)
    }
}

/// Unordered pair of subnets identifying one finding aggregate.
///
/// Detection is direction-sensitive but the aggregate key is not: the two
/// descriptors are sorted on construction, so `{A, B}` and `{B, A}` address
/// the same finding.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct SubnetPair {
    first: Subnet,
    second: Subnet,
}

impl SubnetPair {
    pub fn new(a: Subnet, b: Subnet) -> Self {
        if b < a {
            Self { first: b, second: a }
        } else {
            Self { first: a, second: b }
        }
    }

    pub fn first(&self) -> &Subnet {
        &self.first
    }

    pub fn second(&self) -> &Subnet {
        &self.second
    }
}

impl fmt::Display for SubnetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subnet_trims_surrounding_whitespace() {
        assert_eq!(Subnet::new("  10.0.0.0/24 "), Subnet::new("10.0.0.0/24"));
        assert_eq!(Subnet::new("10.0.0.0/24").as_str(), "10.0.0.0/24");
    }

    #[test]
    fn pair_is_direction_insensitive() {
        let ab = SubnetPair::new(Subnet::new("10.0.0.0/24"), Subnet::new("10.0.1.0/24"));
        let ba = SubnetPair::new(Subnet::new("10.0.1.0/24"), Subnet::new("10.0.0.0/24"));
        assert_eq!(ab, ba);
        assert_eq!(ab.first().as_str(), "10.0.0.0/24");
        assert_eq!(ab.second().as_str(), "10.0.1.0/24");
    }

    #[test]
    fn self_pair_keeps_both_slots() {
        let aa = SubnetPair::new(Subnet::new("10.0.0.0/24"), Subnet::new("10.0.0.0/24"));
        assert_eq!(aa.first(), aa.second());
    }

    #[test]
    fn pair_serializes_in_canonical_order() {
        let pair = SubnetPair::new(Subnet::new("192.168.1.0/24"), Subnet::new("10.0.0.0/24"));
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json["first"], "10.0.0.0/24");
        assert_eq!(json["second"], "192.168.1.0/24");
    }
}
