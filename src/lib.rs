//! iprange - Fast IP membership checks against CIDR range lists.
//!
//! This crate answers "is this address inside any of these CIDR blocks?"
//! for IPv4 and IPv6 with an O(log n) binary search over ranges sorted by
//! their first address.
//!
//! # Features
//!
//! - **Typed families**: `Range<V4>` and `Range<V6>` cannot be mixed
//! - **Tolerant ingestion**: malformed lines are skipped, not fatal
//! - **Sorted by construction**: [`SortedRanges`] is only built by sorting
//! - **Hot reload**: [`SharedRanges`] swaps whole collections atomically
//! - **Dual-family set**: [`IpRangeSet`] routes `IpAddr` queries per family
//!
//! # Quick Start
//!
//! ```
//! use iprange::{parse_ipv4_ranges, SortedRanges};
//! use std::net::Ipv4Addr;
//!
//! let ranges = SortedRanges::new(parse_ipv4_ranges("103.67.32.0/22\n3.0.0.0/15\n"));
//!
//! assert!(ranges.contains(Ipv4Addr::new(103, 67, 32, 1)));
//! assert!(!ranges.contains(Ipv4Addr::new(103, 67, 100, 77)));
//! ```
//!
//! # Preconditions
//!
//! Searching assumes ranges sorted ascending by start (guaranteed by
//! [`SortedRanges`]) and non-overlapping blocks. With nested or
//! overlapping blocks an address may be reported as missing even though a
//! block containing it exists; use [`SortedRanges::has_overlaps`] to check
//! input once when it is not known to be disjoint.

mod config;
mod error;
mod family;
mod parse;
mod range;
mod search;
mod set;
mod shared;

// Re-export core types
pub use config::ParseOptions;
pub use error::{Error, Result};
pub use family::{ipv4_to_u32, ipv6_to_u128, u128_to_ipv6, u32_to_ipv4, AddressFamily, V4, V6};
pub use ipnet::{Ipv4Net, Ipv6Net};
pub use range::{Ipv4Range, Ipv6Range, Range};

// Re-export ingestion
pub use parse::{
    parse_file, parse_file_with, parse_ipv4_ranges, parse_ipv4_ranges_from_file,
    parse_ipv6_ranges, parse_ipv6_ranges_from_file, parse_reader, parse_reader_with, parse_str,
    parse_str_with,
};

// Re-export search
pub use search::{contains, find, Ipv4Ranges, Ipv6Ranges, SortedRanges};

// Re-export containers
pub use set::IpRangeSet;
pub use shared::SharedRanges;
