//! Dual-family range set.

use std::fs::File;
use std::io::Read;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::path::Path;

use crate::config::ParseOptions;
use crate::family::{V4, V6};
use crate::parse::{parse_reader_with, parse_str_with};
use crate::search::{Ipv4Ranges, Ipv6Ranges, SortedRanges};
use crate::{Error, Result};

/// IPv4 and IPv6 ranges read from one mixed source.
///
/// Each family is kept in its own sorted collection; a query is routed by
/// the variant of the [`IpAddr`] it carries.
///
/// # Examples
/// ```
/// use iprange::IpRangeSet;
/// use std::net::IpAddr;
///
/// let set = IpRangeSet::from_str("10.0.0.0/8\nfc00::/7\n");
/// assert_eq!(set.v4_count(), 1);
/// assert_eq!(set.v6_count(), 1);
///
/// let ip: IpAddr = "fd00::1".parse().unwrap();
/// assert!(set.contains(ip));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IpRangeSet {
    v4: Ipv4Ranges,
    v6: Ipv6Ranges,
}

impl IpRangeSet {
    /// Build from already sorted per-family collections.
    pub fn new(v4: Ipv4Ranges, v6: Ipv6Ranges) -> Self {
        Self { v4, v6 }
    }

    /// Parse a mixed IPv4/IPv6 range list.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        Self::from_str_with(text, &ParseOptions::default())
    }

    /// Parse a mixed range list with custom options.
    pub fn from_str_with(text: &str, options: &ParseOptions) -> Self {
        Self {
            v4: SortedRanges::new(parse_str_with::<V4>(text, options)),
            v6: SortedRanges::new(parse_str_with::<V6>(text, options)),
        }
    }

    /// Read a mixed range file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_with(path, &ParseOptions::default())
    }

    /// Read a mixed range file with custom options.
    ///
    /// The file is read once and parsed for both families. Fails with
    /// [`Error::Open`] if it cannot be opened and [`Error::Io`] if reading
    /// it fails afterwards.
    pub fn from_file_with(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        Ok(Self {
            v4: SortedRanges::new(parse_reader_with::<V4, _>(data.as_slice(), options)?),
            v6: SortedRanges::new(parse_reader_with::<V6, _>(data.as_slice(), options)?),
        })
    }

    /// Check whether an address of either family is in the set.
    pub fn contains(&self, ip: IpAddr) -> bool {
        match ip {
            IpAddr::V4(v4) => self.contains_v4(v4),
            IpAddr::V6(v6) => self.contains_v6(v6),
        }
    }

    /// Check an IPv4 address.
    pub fn contains_v4(&self, ip: Ipv4Addr) -> bool {
        self.v4.contains(ip)
    }

    /// Check an IPv6 address.
    pub fn contains_v6(&self, ip: Ipv6Addr) -> bool {
        self.v6.contains(ip)
    }

    /// The IPv4 ranges.
    pub fn v4(&self) -> &Ipv4Ranges {
        &self.v4
    }

    /// The IPv6 ranges.
    pub fn v6(&self) -> &Ipv6Ranges {
        &self.v6
    }

    /// Get the number of IPv4 ranges.
    pub fn v4_count(&self) -> usize {
        self.v4.len()
    }

    /// Get the number of IPv6 ranges.
    pub fn v6_count(&self) -> usize {
        self.v6.len()
    }

    /// Get the total number of ranges.
    pub fn len(&self) -> usize {
        self.v4_count() + self.v6_count()
    }

    /// Check if the set holds no ranges.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
