//! CIDR range record.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::family::{AddressFamily, V4, V6};

/// A CIDR block paired with the integer key of its first address.
///
/// The key is stored so that searching can compare starts without
/// deriving them from the block on every step. `Range::new` normalizes the
/// block to its network address, so `start` always equals the key of
/// `block().network()`.
///
/// # Examples
/// ```
/// use iprange::Ipv4Range;
///
/// let range = Ipv4Range::new("103.67.32.0/22".parse().unwrap());
/// assert_eq!(range.start(), 0x6743_2000);
/// assert!(range.contains("103.67.35.255".parse().unwrap()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<F: AddressFamily> {
    start: F::Int,
    block: F::Net,
}

/// IPv4 range keyed by `u32`.
pub type Ipv4Range = Range<V4>;

/// IPv6 range keyed by `u128`.
pub type Ipv6Range = Range<V6>;

impl<F: AddressFamily> Range<F> {
    /// Create a range from a CIDR block.
    ///
    /// Host bits set in the block address are cleared.
    pub fn new(block: F::Net) -> Self {
        let block = F::trunc(&block);
        Self {
            start: F::to_int(F::network(&block)),
            block,
        }
    }

    /// Integer key of the first address.
    #[inline]
    pub fn start(&self) -> F::Int {
        self.start
    }

    /// The CIDR block.
    #[inline]
    pub fn block(&self) -> &F::Net {
        &self.block
    }

    /// First address of the block.
    pub fn first(&self) -> F::Addr {
        F::network(&self.block)
    }

    /// Last address of the block.
    pub fn last(&self) -> F::Addr {
        F::broadcast(&self.block)
    }

    /// Check whether the block contains an address.
    #[inline]
    pub fn contains(&self, addr: F::Addr) -> bool {
        F::net_contains(&self.block, &addr)
    }

    /// Check whether two ranges share any address.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.first() <= other.last() && other.first() <= self.last()
    }
}

impl<F: AddressFamily> fmt::Debug for Range<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Range")
            .field("start", &self.start)
            .field("block", &self.block)
            .finish()
    }
}

impl<F: AddressFamily> fmt::Display for Range<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.block, f)
    }
}

impl From<ipnet::Ipv4Net> for Range<V4> {
    fn from(block: ipnet::Ipv4Net) -> Self {
        Range::new(block)
    }
}

impl From<ipnet::Ipv6Net> for Range<V6> {
    fn from(block: ipnet::Ipv6Net) -> Self {
        Range::new(block)
    }
}

impl Range<V4> {
    /// Check an IPv4 address given as octets.
    pub fn contains_octets(&self, octets: [u8; 4]) -> bool {
        self.contains(Ipv4Addr::from(octets))
    }
}

impl Range<V6> {
    /// Check an IPv6 address given as octets.
    pub fn contains_octets(&self, octets: [u8; 16]) -> bool {
        self.contains(Ipv6Addr::from(octets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v4(s: &str) -> Ipv4Range {
        Range::new(s.parse().unwrap())
    }

    fn v6(s: &str) -> Ipv6Range {
        Range::new(s.parse().unwrap())
    }

    #[test]
    fn test_start_matches_network() {
        let range = v4("216.255.240.0/20");
        assert_eq!(range.start(), u32::from(Ipv4Addr::new(216, 255, 240, 0)));
        assert_eq!(range.first(), Ipv4Addr::new(216, 255, 240, 0));
        assert_eq!(range.last(), Ipv4Addr::new(216, 255, 255, 255));
    }

    #[test]
    fn test_host_bits_cleared() {
        let range = v4("10.1.2.3/8");
        assert_eq!(range.to_string(), "10.0.0.0/8");
        assert_eq!(range.start(), 0x0A00_0000);

        let range = v6("2607:d200::1/32");
        assert_eq!(range.to_string(), "2607:d200::/32");
        assert_eq!(range.start(), u128::from("2607:d200::".parse::<Ipv6Addr>().unwrap()));
    }

    #[test]
    fn test_contains() {
        let range = v4("103.67.32.0/22");
        assert!(range.contains(Ipv4Addr::new(103, 67, 32, 0)));
        assert!(range.contains(Ipv4Addr::new(103, 67, 35, 255)));
        assert!(!range.contains(Ipv4Addr::new(103, 67, 31, 255)));
        assert!(!range.contains(Ipv4Addr::new(103, 67, 36, 0)));
        assert!(range.contains_octets([103, 67, 33, 1]));
    }

    #[test]
    fn test_contains_v6() {
        let range = v6("2a03:cd00::/32");
        assert!(range.contains("2a03:cd00:ffff:ffff:ffff:ffff:ffff:ffff".parse().unwrap()));
        assert!(!range.contains("2a03:cd01::".parse().unwrap()));
    }

    #[test]
    fn test_single_address_block() {
        let range = v4("8.8.8.8/32");
        assert_eq!(range.first(), range.last());
        assert!(range.contains(Ipv4Addr::new(8, 8, 8, 8)));
        assert!(!range.contains(Ipv4Addr::new(8, 8, 8, 9)));
    }

    #[test]
    fn test_from_block() {
        let block: ipnet::Ipv4Net = "172.16.5.1/12".parse().unwrap();
        let range = Ipv4Range::from(block);
        assert_eq!(range, v4("172.16.0.0/12"));
        assert_eq!(range.first(), Ipv4Addr::new(172, 16, 0, 0));

        let block: ipnet::Ipv6Net = "fe80::1/10".parse().unwrap();
        let range: Ipv6Range = block.into();
        assert_eq!(range.to_string(), "fe80::/10");
        assert!(range.contains("febf::1".parse().unwrap()));
    }

    #[test]
    fn test_overlaps() {
        assert!(v4("10.0.0.0/8").overlaps(&v4("10.20.0.0/16")));
        assert!(v4("10.20.0.0/16").overlaps(&v4("10.0.0.0/8")));
        assert!(!v4("10.0.0.0/8").overlaps(&v4("11.0.0.0/8")));
    }
}
