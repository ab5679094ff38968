use ipnetwork::IpNetwork;
use std::net::IpAddr;
use std::str::FromStr;
use thiserror::Error;

/// A subnet descriptor failed to resolve into a range.
///
/// Descriptors are operator-supplied policy, so this is a configuration
/// error: fatal for whatever operation needed the range, never retried.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("empty subnet descriptor")]
    Empty,
    #[error("invalid network descriptor '{descriptor}': {reason}")]
    Invalid { descriptor: String, reason: String },
    #[error("bounded range '{descriptor}' mixes address families")]
    MixedFamilies { descriptor: String },
    #[error("bounded range '{descriptor}' has its start above its end")]
    Inverted { descriptor: String },
}

/// Resolved network segment supporting membership queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkRange {
    /// CIDR block, e.g. `10.0.0.0/24`.
    Cidr(IpNetwork),
    /// Inclusive bounded range, e.g. `10.0.0.5-10.0.0.20`.
    Bounded { start: IpAddr, end: IpAddr },
    /// One address.
    Single(IpAddr),
}

impl NetworkRange {
    /// Parse a policy descriptor into a range.
    pub fn resolve(descriptor: &str) -> Result<Self, RangeError> {
        let text = descriptor.trim();
        if text.is_empty() {
            return Err(RangeError::Empty);
        }

        if text.contains('/') {
            let network = IpNetwork::from_str(text).map_err(|e| RangeError::Invalid {
                descriptor: text.to_string(),
                reason: e.to_string(),
            })?;
            return Ok(NetworkRange::Cidr(network));
        }

        if let Some((start_text, end_text)) = text.split_once('-') {
            let start = parse_addr(text, start_text)?;
            let end = parse_addr(text, end_text)?;
            if start.is_ipv4() != end.is_ipv4() {
                return Err(RangeError::MixedFamilies {
                    descriptor: text.to_string(),
                });
            }
            if start > end {
                return Err(RangeError::Inverted {
                    descriptor: text.to_string(),
                });
            }
            return Ok(NetworkRange::Bounded { start, end });
        }

        Ok(NetworkRange::Single(parse_addr(text, text)?))
    }

    /// Membership test. An address from the other family is never in range.
    pub fn contains(&self, ip: IpAddr) -> bool {
        match self {
            NetworkRange::Cidr(network) => network.contains(ip),
            NetworkRange::Bounded { start, end } => {
                start.is_ipv4() == ip.is_ipv4() && *start <= ip && ip <= *end
            }
            NetworkRange::Single(addr) => *addr == ip,
        }
    }
}

fn parse_addr(descriptor: &str, text: &str) -> Result<IpAddr, RangeError> {
    text.trim().parse().map_err(|e: std::net::AddrParseError| {
        RangeError::Invalid {
            descriptor: descriptor.to_string(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(text: &str) -> IpAddr {
        text.parse().expect("test ip")
    }

    #[test]
    fn resolves_cidr_descriptors() {
        let range = NetworkRange::resolve("10.0.0.0/24").unwrap();
        assert!(range.contains(ip("10.0.0.1")));
        assert!(range.contains(ip("10.0.0.255")));
        assert!(!range.contains(ip("10.0.1.1")));
    }

    #[test]
    fn resolves_bounded_descriptors_inclusive() {
        let range = NetworkRange::resolve("10.0.0.5-10.0.0.20").unwrap();
        assert!(range.contains(ip("10.0.0.5")));
        assert!(range.contains(ip("10.0.0.20")));
        assert!(!range.contains(ip("10.0.0.4")));
        assert!(!range.contains(ip("10.0.0.21")));
    }

    #[test]
    fn resolves_single_address_descriptors() {
        let range = NetworkRange::resolve("192.168.1.7").unwrap();
        assert!(range.contains(ip("192.168.1.7")));
        assert!(!range.contains(ip("192.168.1.8")));
    }

    #[test]
    fn trims_descriptor_whitespace() {
        let range = NetworkRange::resolve(" 10.0.0.0/24 ").unwrap();
        assert!(range.contains(ip("10.0.0.9")));
    }

    #[test]
    fn other_family_is_never_in_range() {
        let cidr = NetworkRange::resolve("10.0.0.0/24").unwrap();
        assert!(!cidr.contains(ip("::1")));

        let bounded = NetworkRange::resolve("10.0.0.1-10.0.0.9").unwrap();
        assert!(!bounded.contains(ip("::1")));
    }

    #[test]
    fn rejects_noise() {
        assert_eq!(NetworkRange::resolve("   "), Err(RangeError::Empty));
        assert!(matches!(
            NetworkRange::resolve("not-a-subnet"),
            Err(RangeError::Invalid { .. })
        ));
        assert!(matches!(
            NetworkRange::resolve("10.0.0.0/99"),
            Err(RangeError::Invalid { .. })
        ));
    }

    #[test]
    fn rejects_inverted_and_mixed_family_bounds() {
        assert!(matches!(
            NetworkRange::resolve("10.0.0.20-10.0.0.5"),
            Err(RangeError::Inverted { .. })
        ));
        assert!(matches!(
            NetworkRange::resolve("10.0.0.1-::1"),
            Err(RangeError::MixedFamilies { .. })
        ));
    }
}
