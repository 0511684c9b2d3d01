//! Hickory-dns backed lookup service.
//!
//! A lazily initialized, statically shared `TokioResolver` configured for
//! dual-stack (`Ipv4AndIpv6`) lookups, reused across calls instead of
//! rebuilding DNS client state per resolution. Unlike [`super::SystemLookup`],
//! there is no `spawn_blocking` round trip through the OS resolver —
//! hickory speaks the DNS wire protocol itself.

use std::net::IpAddr;
use std::sync::LazyLock;

use hickory_resolver::config::{LookupIpStrategy, ResolverConfig};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;

use super::{normalize_empty, Lookup, LookupService};
use crate::addr::{AddrInfo, SockAddr};
use crate::error::LookupError;
use crate::request::Family;

/// Resolves via `hickory-resolver`, fully async and DoH/DoT-capable.
#[derive(Debug, Clone)]
pub struct HickoryLookup {
    resolver: &'static LazyLock<TokioResolver>,
}

impl HickoryLookup {
    /// Creates a lookup service backed by the process-wide hickory
    /// resolver, lazily built on first use from the system's DNS
    /// configuration (falling back to defaults if that can't be read).
    pub fn new() -> Self {
        static RESOLVER: LazyLock<TokioResolver> = LazyLock::new(|| {
            let mut builder = match TokioResolver::builder_tokio() {
                Ok(builder) => {
                    tracing::debug!("using system DNS configuration");
                    builder
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read system DNS config, using defaults");
                    TokioResolver::builder_with_config(
                        ResolverConfig::default(),
                        TokioConnectionProvider::default(),
                    )
                }
            };
            builder.options_mut().ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
            builder.build()
        });

        Self {
            resolver: &RESOLVER,
        }
    }
}

impl Default for HickoryLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupService for HickoryLookup {
    fn lookup(
        &self,
        host: String,
        port: u16,
        family: Family,
        socktype: i32,
        proto: i32,
        _flags: i32,
    ) -> Lookup {
        let resolver = self.resolver;
        Box::pin(async move {
            tracing::debug!(host = %host, %family, "resolving via hickory-dns");

            let lookup = resolver.lookup_ip(host.as_str()).await.map_err(|e| {
                tracing::debug!(host = %host, %family, error = %e, "hickory-dns lookup failed");
                LookupError::failed(host.clone(), family, e)
            })?;

            let addrs: Vec<AddrInfo> = lookup
                .iter()
                .filter(|ip| family_matches(family, *ip))
                .map(|ip| to_addr_info(ip, port, socktype, proto))
                .collect();

            tracing::debug!(host = %host, %family, count = addrs.len(), "hickory-dns resolution complete");
            normalize_empty(addrs, &host, family)
        })
    }
}

fn family_matches(family: Family, ip: IpAddr) -> bool {
    match family {
        Family::Unspec => true,
        Family::Inet => ip.is_ipv4(),
        Family::Inet6 => ip.is_ipv6(),
    }
}

fn to_addr_info(ip: IpAddr, port: u16, socktype: i32, proto: i32) -> AddrInfo {
    let sockaddr = match ip {
        IpAddr::V4(v4) => SockAddr::v4(v4, port),
        IpAddr::V6(v6) => SockAddr::V6(std::net::SocketAddrV6::new(v6, port, 0, 0)),
    };
    AddrInfo::new(socktype, proto, "", sockaddr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addr::SOCK_STREAM;

    #[tokio::test]
    async fn resolves_localhost() {
        let svc = HickoryLookup::new();
        let result = svc
            .lookup(
                "localhost".to_string(),
                80,
                Family::Unspec,
                SOCK_STREAM,
                0,
                0,
            )
            .await;

        match result {
            Ok(addrs) => assert!(!addrs.is_empty()),
            Err(e) => {
                println!("localhost resolution unavailable in this environment: {e}");
            }
        }
    }
}
