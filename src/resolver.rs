//! Consumer-facing entry points: the IP-literal fast path, the
//! dual-family selection policy, and the two surface forms
//! `builtin_resolver` (simple) and `async_builtin_resolver` (full
//! staggering).

use std::sync::Arc;

use futures_util::stream::{self, StreamExt};

use crate::addr::AddrFamily;
use crate::error::HappyEyeballsConnectError;
use crate::interleave::interleave;
use crate::literal::try_literal;
use crate::lookup::LookupService;
use crate::merger::{merge_dual, merge_single, ResolveStream};
use crate::request::{Family, ResolverRequest};

/// The full staggering resolver: one task per requested family, the
/// v6-favouring resolution-delay hold, and the ordering rule. This is
/// what RFC 8305 calls "Happy Eyeballs" proper.
pub fn async_builtin_resolver(
    request: ResolverRequest,
    service: Arc<dyn LookupService>,
) -> ResolveStream {
    if let Some(literal) = try_literal(&request) {
        return Box::pin(stream::once(async move { Ok(literal) }));
    }

    match request.family {
        Family::Inet => merge_single(service, request, AddrFamily::Inet),
        Family::Inet6 => merge_single(service, request, AddrFamily::Inet6),
        Family::Unspec => merge_dual(service, request),
    }
}

/// The simple, non-staggering resolver: a single combined lookup
/// (or a single-family lookup when `family` is restricted), split by
/// family and interleaved with the same ordering rule — but with no
/// resolution-delay hold, since there is only ever one lookup call to
/// wait for.
pub fn builtin_resolver(
    request: ResolverRequest,
    service: Arc<dyn LookupService>,
) -> ResolveStream {
    if let Some(literal) = try_literal(&request) {
        return Box::pin(stream::once(async move { Ok(literal) }));
    }

    let host = request.host.clone();
    let first_count = request.first_addr_family_count;
    let family = request.family;

    Box::pin(async_stream::stream! {
        let result = service
            .lookup(
                request.host.clone(),
                request.port,
                family,
                request.socktype,
                request.proto,
                request.flags,
            )
            .await;

        match result {
            Err(e) => yield Err(HappyEyeballsConnectError::new(host, vec![e])),
            Ok(addrs) => {
                let (primary, secondary) = match family {
                    Family::Inet => (Vec::new(), addrs),
                    Family::Inet6 => (addrs, Vec::new()),
                    Family::Unspec => {
                        let (v6, v4): (Vec<_>, Vec<_>) = addrs
                            .into_iter()
                            .partition(|a| a.family == AddrFamily::Inet6);
                        (v6, v4)
                    }
                };
                for addr in interleave(primary, secondary, first_count) {
                    yield Ok(addr);
                }
            }
        }
    })
}

/// Drains [`async_builtin_resolver`] eagerly into a `Vec`, for callers
/// who don't need backpressure-aware consumption.
pub async fn resolve_all(
    request: ResolverRequest,
    service: Arc<dyn LookupService>,
) -> Result<Vec<crate::addr::AddrInfo>, HappyEyeballsConnectError> {
    let mut stream = async_builtin_resolver(request, service);
    let mut out = Vec::new();
    while let Some(item) = stream.next().await {
        out.push(item?);
    }
    Ok(out)
}
