//! Candidate endpoint representation.
//!
//! Mirrors the shape of a POSIX `addrinfo` entry: a family, a socket type,
//! a protocol, an optional canonical name, and a family-shaped address.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddrV4, SocketAddrV6};

/// Numeric socket type constants, matching the values `getaddrinfo` uses.
pub const SOCK_STREAM: i32 = 1;
pub const SOCK_DGRAM: i32 = 2;

/// Numeric protocol constants, matching `getaddrinfo`'s `IPPROTO_*` values.
pub const IPPROTO_TCP: i32 = 6;
pub const IPPROTO_UDP: i32 = 17;

/// The address family of a resolved [`AddrInfo`].
///
/// Unlike [`crate::request::Family`], this has no `Unspec` variant — a
/// resolved candidate always belongs to exactly one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddrFamily {
    Inet,
    Inet6,
}

impl fmt::Display for AddrFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddrFamily::Inet => f.write_str("INET"),
            AddrFamily::Inet6 => f.write_str("INET6"),
        }
    }
}

/// A family-shaped socket address: `(ip, port)` for INET, `(ip, port,
/// flowinfo, scope_id)` for INET6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SockAddr {
    V4(SocketAddrV4),
    V6(SocketAddrV6),
}

impl SockAddr {
    pub fn family(&self) -> AddrFamily {
        match self {
            SockAddr::V4(_) => AddrFamily::Inet,
            SockAddr::V6(_) => AddrFamily::Inet6,
        }
    }

    pub fn v4(ip: Ipv4Addr, port: u16) -> Self {
        SockAddr::V4(SocketAddrV4::new(ip, port))
    }

    pub fn v6(ip: Ipv6Addr, port: u16) -> Self {
        SockAddr::V6(SocketAddrV6::new(ip, port, 0, 0))
    }
}

impl fmt::Display for SockAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SockAddr::V4(a) => write!(f, "{a}"),
            SockAddr::V6(a) => write!(f, "{a}"),
        }
    }
}

/// One candidate endpoint, ready for an immediate dial attempt.
///
/// Equality is structural: two `AddrInfo`s are equal iff every field
/// matches. There is no timestamp or provenance — ordering is carried
/// entirely by the position in the stream that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddrInfo {
    pub family: AddrFamily,
    pub socktype: i32,
    pub proto: i32,
    pub canonname: String,
    pub sockaddr: SockAddr,
}

impl AddrInfo {
    pub fn new(socktype: i32, proto: i32, canonname: impl Into<String>, sockaddr: SockAddr) -> Self {
        Self {
            family: sockaddr.family(),
            socktype,
            proto,
            canonname: canonname.into(),
            sockaddr,
        }
    }
}

impl fmt::Display for AddrInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.sockaddr, self.family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sockaddr_family_matches_variant() {
        let v4 = SockAddr::v4(Ipv4Addr::new(127, 0, 0, 1), 80);
        assert_eq!(v4.family(), AddrFamily::Inet);

        let v6 = SockAddr::v6(Ipv6Addr::LOCALHOST, 80);
        assert_eq!(v6.family(), AddrFamily::Inet6);
    }

    #[test]
    fn addr_info_equality_is_structural() {
        let a = AddrInfo::new(
            SOCK_STREAM,
            IPPROTO_TCP,
            "",
            SockAddr::v4(Ipv4Addr::new(1, 2, 3, 4), 80),
        );
        let b = AddrInfo::new(
            SOCK_STREAM,
            IPPROTO_TCP,
            "",
            SockAddr::v4(Ipv4Addr::new(1, 2, 3, 4), 80),
        );
        assert_eq!(a, b);
    }
}
