//! The IP-literal fast path: synthesize an [`AddrInfo`] for numeric
//! IPv4 and IPv6 hosts without invoking the lookup primitive.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::addr::{AddrInfo, SockAddr, IPPROTO_TCP, IPPROTO_UDP, SOCK_DGRAM, SOCK_STREAM};
use crate::request::{Family, ResolverRequest};

/// If `host` is a numeric IPv4/IPv6 literal compatible with the
/// request's family constraint, returns the single synthesized
/// [`AddrInfo`]. Returns `None` when `host` is not a literal, or when
/// the literal's family conflicts with a restricted `family` (in which
/// case the caller falls through to the lookup primitive, which will
/// itself fail or synthesize as appropriate).
pub fn try_literal(request: &ResolverRequest) -> Option<AddrInfo> {
    if let Ok(ip) = request.host.parse::<Ipv4Addr>() {
        if request.family == Family::Inet6 {
            return None;
        }
        return Some(AddrInfo::new(
            request.socktype,
            resolve_proto(request),
            "",
            SockAddr::v4(ip, request.port),
        ));
    }

    if let Ok(ip) = request.host.parse::<Ipv6Addr>() {
        if request.family == Family::Inet {
            return None;
        }
        return Some(AddrInfo::new(
            request.socktype,
            resolve_proto(request),
            "",
            SockAddr::v6(ip, request.port),
        ));
    }

    None
}

/// `getaddrinfo` fills in the protocol from the socket type when the
/// caller leaves `proto` unspecified; the literal fast-path has to
/// replicate that since it never calls the real primitive.
fn resolve_proto(request: &ResolverRequest) -> i32 {
    if request.proto != 0 {
        return request.proto;
    }
    match request.socktype {
        SOCK_STREAM => IPPROTO_TCP,
        SOCK_DGRAM => IPPROTO_UDP,
        _ => 0,
    }
}
