//! Error taxonomy for the resolver core.
//!
//! Two error types: [`LookupError`] (a single-family lookup failure,
//! never surfaced directly) and [`HappyEyeballsConnectError`] (the
//! aggregate raised to callers when every requested family fails).

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::request::Family;

/// A single-family lookup failed, or returned an empty result (which is
/// normalized to this variant with a synthetic diagnostic).
///
/// `Clone`, via an `Arc`-wrapped source, so the same error can be held
/// by both the failed family's task and the aggregate error.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    #[error("lookup for {host} ({family}) failed: {source}")]
    Failed {
        host: String,
        family: Family,
        #[source]
        source: Arc<dyn std::error::Error + Send + Sync + 'static>,
    },
    #[error("lookup for {host} ({family}) returned empty list")]
    EmptyResult { host: String, family: Family },
    #[error("lookup for {host} ({family}) was cancelled")]
    Cancelled { host: String, family: Family },
}

impl LookupError {
    pub fn failed(
        host: impl Into<String>,
        family: Family,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        LookupError::Failed {
            host: host.into(),
            family,
            source: Arc::new(source),
        }
    }

    pub fn empty(host: impl Into<String>, family: Family) -> Self {
        LookupError::EmptyResult {
            host: host.into(),
            family,
        }
    }

    pub fn cancelled(host: impl Into<String>, family: Family) -> Self {
        LookupError::Cancelled {
            host: host.into(),
            family,
        }
    }
}

/// Raised to the caller on the first pull when every requested family
/// failed to resolve. Carries the underlying [`LookupError`]s in the
/// order `[v6_error, v4_error]`, or a length-1 payload when only one
/// family was queried.
#[derive(Debug, Clone)]
pub struct HappyEyeballsConnectError {
    pub host: String,
    pub errors: Vec<LookupError>,
}

impl std::error::Error for HappyEyeballsConnectError {}

impl HappyEyeballsConnectError {
    pub fn new(host: impl Into<String>, errors: Vec<LookupError>) -> Self {
        Self {
            host: host.into(),
            errors,
        }
    }
}

impl fmt::Display for HappyEyeballsConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not resolve {} for dialing: {} underlying error(s)",
            self.host,
            self.errors.len()
        )?;
        for (i, e) in self.errors.iter().enumerate() {
            write!(f, "; [{i}] {e}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn empty_result_display_mentions_family_and_host() {
        let e = LookupError::empty("example.com", Family::Inet6);
        let msg = e.to_string();
        assert!(msg.contains("example.com"));
        assert!(msg.contains("INET6"));
        assert!(msg.contains("empty list"));
    }

    #[test]
    fn aggregate_error_carries_ordered_payload() {
        let v6 = LookupError::failed(
            "h",
            Family::Inet6,
            io::Error::new(io::ErrorKind::Other, "boom"),
        );
        let v4 = LookupError::empty("h", Family::Inet);
        let agg = HappyEyeballsConnectError::new("h", vec![v6, v4]);
        assert_eq!(agg.errors.len(), 2);
        assert!(matches!(agg.errors[0], LookupError::Failed { .. }));
        assert!(matches!(agg.errors[1], LookupError::EmptyResult { .. }));
    }
}
