//! The lookup primitive abstraction.
//!
//! Name resolution is an external collaborator: an async function
//! `lookup(host, port, family, socktype, proto, flags) ->
//! sequence<AddrInfo>` that may fail. Here that's [`LookupService`], a
//! trait with one method returning a boxed future, so callers can
//! dependency-inject any implementation (the default system resolver,
//! hickory-dns, or a test double) instead of the resolver core
//! hardwiring one.

#[cfg(feature = "hickory")]
mod hickory;
mod system;

#[cfg(feature = "hickory")]
pub use hickory::HickoryLookup;
pub use system::SystemLookup;

use std::future::Future;
use std::pin::Pin;

use crate::addr::AddrInfo;
use crate::error::LookupError;
use crate::request::Family;

/// What [`LookupService::lookup`] returns once awaited.
pub type LookupResult = Result<Vec<AddrInfo>, LookupError>;

/// The boxed future returned by a [`LookupService`].
pub type Lookup = Pin<Box<dyn Future<Output = LookupResult> + Send>>;

/// A pluggable name-resolution primitive.
///
/// Implementations must be `Send + Sync` so a single resolver instance
/// can service concurrent `resolve` calls. An empty successful result
/// is normalized by the implementation into a
/// [`LookupError::EmptyResult`] — callers of this trait never see an
/// empty `Ok(vec![])`.
pub trait LookupService: Send + Sync {
    /// Resolves `host:port` restricted to `family` (never `Unspec` when
    /// called by the staggering dispatcher; `Unspec` is only used by
    /// the non-staggering `builtin_resolver` surface to request a
    /// single combined lookup).
    fn lookup(
        &self,
        host: String,
        port: u16,
        family: Family,
        socktype: i32,
        proto: i32,
        flags: i32,
    ) -> Lookup;
}

pub(crate) fn normalize_empty(
    addrs: Vec<AddrInfo>,
    host: &str,
    family: Family,
) -> LookupResult {
    if addrs.is_empty() {
        Err(LookupError::empty(host, family))
    } else {
        Ok(addrs)
    }
}
