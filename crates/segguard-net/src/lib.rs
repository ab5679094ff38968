//! Subnet-descriptor resolution and membership testing.
//!
//! Descriptors come from operator policy and take one of three forms: a
//! CIDR block (`10.0.0.0/24`), a bounded range (`10.0.0.5-10.0.0.20`), or a
//! single address. Resolution is pure string parsing; nothing in this crate
//! touches the network.

#![forbid(unsafe_code)]

mod range;
mod segmentation;

pub use range::{NetworkRange, RangeError};
pub use segmentation::{ip_if_in_subnet, ip_in_src_and_not_in_dst};
