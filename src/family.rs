//! Address families and address/integer conversion.
//!
//! Search keys are the unsigned integer form of an address: `u32` for IPv4
//! and `u128` for IPv6. Both conversions are big-endian, so integer order
//! matches address order.

use ipnet::{Ipv4Net, Ipv6Net};
use std::fmt;
use std::hash::Hash;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

mod private {
    pub trait Sealed {}
    impl Sealed for super::V4 {}
    impl Sealed for super::V6 {}
}

/// An IP address family.
///
/// Ties together the address type, the CIDR block type and the integer
/// type used as search key. Ranges and queries of different families have
/// different types, so they cannot be mixed in one search.
///
/// This trait is sealed; it is implemented by [`V4`] and [`V6`] only.
pub trait AddressFamily: private::Sealed + Copy + fmt::Debug + Send + Sync + 'static {
    /// Native address type.
    type Addr: Copy + Eq + Ord + fmt::Debug + fmt::Display;
    /// CIDR block type.
    type Net: Copy + Eq + Hash + fmt::Debug + fmt::Display + FromStr;
    /// Unsigned integer key.
    type Int: Copy + Ord + Hash + fmt::Debug;

    /// Human readable family name, used in log output.
    const NAME: &'static str;

    /// Convert an address into its integer key.
    fn to_int(addr: Self::Addr) -> Self::Int;

    /// Convert an integer key back into an address.
    fn from_int(n: Self::Int) -> Self::Addr;

    /// Normalize a block so its address is the network address.
    fn trunc(net: &Self::Net) -> Self::Net;

    /// First address of a block.
    fn network(net: &Self::Net) -> Self::Addr;

    /// Last address of a block.
    fn broadcast(net: &Self::Net) -> Self::Addr;

    /// Check whether a block contains an address.
    fn net_contains(net: &Self::Net, addr: &Self::Addr) -> bool;
}

/// IPv4 family marker: `Ipv4Addr` / `Ipv4Net` / `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum V4 {}

/// IPv6 family marker: `Ipv6Addr` / `Ipv6Net` / `u128`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum V6 {}

impl AddressFamily for V4 {
    type Addr = Ipv4Addr;
    type Net = Ipv4Net;
    type Int = u32;

    const NAME: &'static str = "IPv4";

    #[inline]
    fn to_int(addr: Ipv4Addr) -> u32 {
        u32::from(addr)
    }

    #[inline]
    fn from_int(n: u32) -> Ipv4Addr {
        u32_to_ipv4(n)
    }

    fn trunc(net: &Ipv4Net) -> Ipv4Net {
        net.trunc()
    }

    fn network(net: &Ipv4Net) -> Ipv4Addr {
        net.network()
    }

    fn broadcast(net: &Ipv4Net) -> Ipv4Addr {
        net.broadcast()
    }

    #[inline]
    fn net_contains(net: &Ipv4Net, addr: &Ipv4Addr) -> bool {
        net.contains(addr)
    }
}

impl AddressFamily for V6 {
    type Addr = Ipv6Addr;
    type Net = Ipv6Net;
    type Int = u128;

    const NAME: &'static str = "IPv6";

    #[inline]
    fn to_int(addr: Ipv6Addr) -> u128 {
        u128::from(addr)
    }

    #[inline]
    fn from_int(n: u128) -> Ipv6Addr {
        u128_to_ipv6(n)
    }

    fn trunc(net: &Ipv6Net) -> Ipv6Net {
        net.trunc()
    }

    fn network(net: &Ipv6Net) -> Ipv6Addr {
        net.network()
    }

    fn broadcast(net: &Ipv6Net) -> Ipv6Addr {
        net.broadcast()
    }

    #[inline]
    fn net_contains(net: &Ipv6Net, addr: &Ipv6Addr) -> bool {
        net.contains(addr)
    }
}

/// Convert an address to its IPv4 integer key.
///
/// An IPv6 address contributes its trailing 4 bytes, which is where an
/// IPv4-mapped (`::ffff:a.b.c.d`) or IPv4-compatible address carries the
/// IPv4 part.
pub fn ipv4_to_u32(ip: IpAddr) -> u32 {
    match ip {
        IpAddr::V4(v4) => u32::from(v4),
        IpAddr::V6(v6) => {
            let o = v6.octets();
            u32::from_be_bytes([o[12], o[13], o[14], o[15]])
        }
    }
}

/// Convert an IPv4 integer key back to an address.
pub fn u32_to_ipv4(n: u32) -> Ipv4Addr {
    Ipv4Addr::from(n.to_be_bytes())
}

/// Convert an address to its IPv6 integer key.
///
/// An IPv4 address is widened to its IPv4-mapped IPv6 form first.
pub fn ipv6_to_u128(ip: IpAddr) -> u128 {
    match ip {
        IpAddr::V4(v4) => u128::from(v4.to_ipv6_mapped()),
        IpAddr::V6(v6) => u128::from(v6),
    }
}

/// Convert an IPv6 integer key back to an address.
pub fn u128_to_ipv6(n: u128) -> Ipv6Addr {
    Ipv6Addr::from(n.to_be_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_to_u32() {
        let ip: IpAddr = "103.67.32.1".parse().unwrap();
        assert_eq!(ipv4_to_u32(ip), 0x6743_2001);
        assert_eq!(ipv4_to_u32("0.0.0.0".parse().unwrap()), 0);
        assert_eq!(ipv4_to_u32("255.255.255.255".parse().unwrap()), u32::MAX);
    }

    #[test]
    fn test_ipv4_to_u32_mapped() {
        let mapped: IpAddr = "::ffff:10.1.2.3".parse().unwrap();
        assert_eq!(ipv4_to_u32(mapped), 0x0A01_0203);

        let compat: IpAddr = "::10.1.2.3".parse().unwrap();
        assert_eq!(ipv4_to_u32(compat), 0x0A01_0203);
    }

    #[test]
    fn test_u32_to_ipv4() {
        assert_eq!(u32_to_ipv4(0x0300_0000), Ipv4Addr::new(3, 0, 0, 0));
        assert_eq!(u32_to_ipv4(u32::MAX), Ipv4Addr::BROADCAST);
    }

    #[test]
    fn test_ipv6_to_u128() {
        let ip: IpAddr = "2607:d200::1".parse().unwrap();
        assert_eq!(ipv6_to_u128(ip), 0x2607_d200_0000_0000_0000_0000_0000_0001);
        assert_eq!(ipv6_to_u128("::".parse().unwrap()), 0);
        assert_eq!(
            ipv6_to_u128("ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff".parse().unwrap()),
            u128::MAX
        );
    }

    #[test]
    fn test_ipv6_to_u128_from_v4() {
        let ip: IpAddr = "1.2.3.4".parse().unwrap();
        assert_eq!(ipv6_to_u128(ip), 0xffff_0102_0304);
    }

    #[test]
    fn test_u128_to_ipv6() {
        let addr: Ipv6Addr = "2a03:cd00::".parse().unwrap();
        assert_eq!(u128_to_ipv6(u128::from(addr)), addr);
    }

    #[test]
    fn test_key_order_matches_address_order() {
        let a: Ipv4Addr = "9.255.255.255".parse().unwrap();
        let b: Ipv4Addr = "10.0.0.0".parse().unwrap();
        assert!(V4::to_int(a) < V4::to_int(b));

        let a: Ipv6Addr = "2001:17ff:ffff:ffff:ffff:ffff:ffff:ffff".parse().unwrap();
        let b: Ipv6Addr = "2001:1800::".parse().unwrap();
        assert!(V6::to_int(a) < V6::to_int(b));
    }

    #[test]
    fn test_family_block_bounds() {
        let net: Ipv4Net = "103.67.32.7/22".parse().unwrap();
        let net = V4::trunc(&net);
        assert_eq!(V4::network(&net), Ipv4Addr::new(103, 67, 32, 0));
        assert_eq!(V4::broadcast(&net), Ipv4Addr::new(103, 67, 35, 255));
        assert!(V4::net_contains(&net, &Ipv4Addr::new(103, 67, 33, 9)));
        assert!(!V4::net_contains(&net, &Ipv4Addr::new(103, 67, 36, 0)));

        let net: Ipv6Net = "2607:d200::/32".parse().unwrap();
        assert_eq!(
            V6::broadcast(&net),
            "2607:d200:ffff:ffff:ffff:ffff:ffff:ffff".parse::<Ipv6Addr>().unwrap()
        );
    }
}
