//! # dualstack-resolver
//!
//! A Happy Eyeballs v2 (RFC 8305) address-resolution core: given a
//! hostname and port, produces a lazy, ordered stream of candidate
//! socket endpoints ready for an immediate dial attempt, staggered so
//! that the first endpoints tried give the fastest time-to-first-byte
//! on dual-stack hosts.
//!
//! This crate is the resolution core only — it does not open sockets.
//! A connection-establishment layer consumes [`AddrInfo`] values from
//! the stream and races dial attempts against them; that layer lives
//! outside this crate's scope.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use dualstack_resolver::{resolve_all, LookupService, ResolverRequest, SystemLookup};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service: Arc<dyn LookupService> = Arc::new(SystemLookup::new());
//! let request = ResolverRequest::new("example.com", 443);
//! let addrs = resolve_all(request, service).await?;
//! for addr in addrs {
//!     println!("candidate: {addr}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`addr`] - the `AddrInfo` candidate-endpoint type
//! - [`request`] - `ResolverRequest`, the per-call configuration
//! - [`literal`] - the IP-literal fast path
//! - [`lookup`] - the pluggable `LookupService` trait and its backends
//! - [`interleave`] - the pure ordering rule
//! - [`merger`] - the staggering state machine
//! - `resolver` - the consumer-facing entry points (re-exported at the crate root)
//! - [`error`] - `LookupError` and `HappyEyeballsConnectError`

pub mod addr;
pub mod error;
pub mod interleave;
pub mod literal;
pub mod lookup;
pub mod merger;
pub mod request;
mod resolver;

pub use addr::{AddrFamily, AddrInfo, SockAddr};
pub use error::{HappyEyeballsConnectError, LookupError};
pub use lookup::{LookupResult, LookupService, SystemLookup};
#[cfg(feature = "hickory")]
pub use lookup::HickoryLookup;
pub use merger::ResolveStream;
pub use request::{Family, ResolverRequest};
pub use resolver::{async_builtin_resolver, builtin_resolver, resolve_all};
