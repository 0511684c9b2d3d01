//! Request configuration for a single [`crate::resolve`] call.

use std::fmt;
use std::time::Duration;

use crate::addr::SOCK_STREAM;

/// Default resolution delay: the time the Merger holds back v4 results
/// while waiting for v6 (RFC 8305 recommends 50ms-ish hold windows).
pub const DEFAULT_RESOLUTION_DELAY: Duration = Duration::from_millis(50);

/// Default first-family burst size.
pub const DEFAULT_FIRST_ADDR_FAMILY_COUNT: usize = 1;

/// Address family constraint for a [`ResolverRequest`].
///
/// `Unspec` (the default) asks for both IPv6 and IPv4; `Inet`/`Inet6`
/// degenerate the request to a single family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Family {
    #[default]
    Unspec,
    Inet,
    Inet6,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Unspec => f.write_str("UNSPEC"),
            Family::Inet => f.write_str("INET"),
            Family::Inet6 => f.write_str("INET6"),
        }
    }
}

/// The configuration of one [`crate::resolve`]/[`crate::async_resolve`] call.
///
/// Construct with [`ResolverRequest::new`] and adjust fields with the
/// builder methods, or use `..ResolverRequest::new(host, port)` directly.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverRequest {
    pub host: String,
    pub port: u16,
    pub family: Family,
    pub socktype: i32,
    pub proto: i32,
    pub flags: i32,
    pub resolution_delay: Duration,
    pub first_addr_family_count: usize,
}

impl ResolverRequest {
    /// Creates a request with every field at its spec-mandated default.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            family: Family::Unspec,
            socktype: SOCK_STREAM,
            proto: 0,
            flags: 0,
            resolution_delay: DEFAULT_RESOLUTION_DELAY,
            first_addr_family_count: DEFAULT_FIRST_ADDR_FAMILY_COUNT,
        }
    }

    pub fn with_family(mut self, family: Family) -> Self {
        self.family = family;
        self
    }

    pub fn with_socktype(mut self, socktype: i32) -> Self {
        self.socktype = socktype;
        self
    }

    pub fn with_proto(mut self, proto: i32) -> Self {
        self.proto = proto;
        self
    }

    pub fn with_flags(mut self, flags: i32) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_resolution_delay(mut self, delay: Duration) -> Self {
        self.resolution_delay = delay;
        self
    }

    /// Sets the first-family burst size. Must be `>= 1`; values of `0`
    /// are clamped to `1` since the burst always starts at one element.
    pub fn with_first_addr_family_count(mut self, count: usize) -> Self {
        self.first_addr_family_count = count.max(1);
        self
    }
}
