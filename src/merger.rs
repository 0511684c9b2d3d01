//! The interleaving merger — the heart of the resolver.
//!
//! Drives two per-family [`LookupTask`]s to completion under the timing
//! rule and hands whatever queues result to
//! [`crate::interleave::interleave`] for the ordering rule. Implemented
//! as an explicit state machine driven by `tokio::select!` over the two
//! task handles and the v4-hold timer, rather than a channel-per-task
//! rendezvous.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use async_stream::stream;
use futures_core::Stream;
use tokio::task::JoinHandle;

use crate::addr::{AddrFamily, AddrInfo};
use crate::error::{HappyEyeballsConnectError, LookupError};
use crate::interleave::interleave;
use crate::lookup::{LookupResult, LookupService};
use crate::request::{Family, ResolverRequest};

/// What the resolver entry points hand back to the caller: a lazy,
/// pull-based, finite stream of `AddrInfo`, or a single terminal
/// [`HappyEyeballsConnectError`].
pub type ResolveStream = Pin<Box<dyn Stream<Item = Result<AddrInfo, HappyEyeballsConnectError>> + Send>>;

/// Owns a spawned per-family lookup. Aborting on drop is how
/// cancellation propagates: dropping the `ResolveStream` drops every
/// `LookupTask` still live in the generator's suspended state, which
/// aborts the underlying `tokio::spawn`ed future.
struct LookupTask {
    handle: JoinHandle<LookupResult>,
    host: String,
    family: Family,
}

impl LookupTask {
    fn spawn(
        service: Arc<dyn LookupService>,
        request: &ResolverRequest,
        family: AddrFamily,
    ) -> Self {
        let host = request.host.clone();
        let port = request.port;
        let socktype = request.socktype;
        let proto = request.proto;
        let flags = request.flags;
        let req_family = match family {
            AddrFamily::Inet => Family::Inet,
            AddrFamily::Inet6 => Family::Inet6,
        };
        let handle = tokio::spawn({
            let host = host.clone();
            async move {
                service
                    .lookup(host, port, req_family, socktype, proto, flags)
                    .await
            }
        });
        LookupTask {
            handle,
            host,
            family: req_family,
        }
    }
}

impl Drop for LookupTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl Future for LookupTask {
    type Output = LookupResult;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.handle).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(join_err)) => {
                // The task panicked or was externally aborted; surface it
                // the same way a failed lookup would be surfaced.
                Poll::Ready(Err(LookupError::failed(
                    self.host.clone(),
                    self.family,
                    join_err,
                )))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Which task settled first, carrying its result.
enum Settled {
    Primary(LookupResult),
    Secondary(LookupResult),
}

/// What happened while holding for the primary during the resolution
/// delay: it arrived, or the timer ran out first.
enum Hold {
    Primary(LookupResult),
    TimerFired,
}

/// Drives the dual-family state machine and yields the merged stream.
/// `primary` is always v6, `secondary` is always v4.
pub fn merge_dual(
    service: Arc<dyn LookupService>,
    request: ResolverRequest,
) -> ResolveStream {
    let host = request.host.clone();
    let first_count = request.first_addr_family_count;
    let resolution_delay = request.resolution_delay;

    Box::pin(stream! {
        let mut primary_task = LookupTask::spawn(service.clone(), &request, AddrFamily::Inet6);
        let mut secondary_task = LookupTask::spawn(service.clone(), &request, AddrFamily::Inet);

        // `select!` arms must stay yield-free — `async-stream` rewrites
        // `yield` by scanning the block's own syntax tree, and can't see
        // through another macro's arms. So every select here only
        // produces a plain value; the `yield`s all live directly in this
        // generator body, driven by matching on that value afterward.

        // Race the two tasks. `biased` makes a tie (both ready on the
        // same poll) resolve in primary's favour.
        let first = tokio::select! {
            biased;
            res = &mut primary_task => Settled::Primary(res),
            res = &mut secondary_task => Settled::Secondary(res),
        };

        match first {
            Settled::Primary(Ok(primary_list)) => {
                // Primary resolved first: don't sit on ready addresses
                // while the secondary is still pending (possibly slow,
                // not failed) — emit the burst now and splice the rest
                // in once the secondary settles.
                let burst = first_count.min(primary_list.len());
                let mut primary_iter = primary_list.into_iter();
                for addr in (&mut primary_iter).take(burst) {
                    yield Ok(addr);
                }
                let primary_tail: Vec<AddrInfo> = primary_iter.collect();

                let secondary_list = (&mut secondary_task).await.unwrap_or_default();
                // The burst already consumed `first_addr_family_count`;
                // round-robin the remainder against whatever the
                // secondary produced (empty if it failed).
                for item in interleave(primary_tail, secondary_list, 0) {
                    yield Ok(item);
                }
            }
            Settled::Primary(Err(primary_err)) => {
                let secondary_res = (&mut secondary_task).await;
                for item in finish_after_both(&host, Err(primary_err), secondary_res, first_count) {
                    yield item;
                }
            }
            Settled::Secondary(Err(secondary_err)) => {
                // No hold: the timer only arms on secondary *success*.
                let primary_res = (&mut primary_task).await;
                for item in finish_after_both(&host, primary_res, Err(secondary_err), first_count) {
                    yield item;
                }
            }
            Settled::Secondary(Ok(secondary_list)) => {
                // HOLDING: give the primary up to `resolution_delay` to
                // show up before committing to secondary-only.
                let hold = tokio::select! {
                    biased;
                    res = &mut primary_task => Hold::Primary(res),
                    _ = tokio::time::sleep(resolution_delay) => Hold::TimerFired,
                };

                match hold {
                    Hold::Primary(primary_res) => {
                        for item in finish_after_both(&host, primary_res, Ok(secondary_list), first_count) {
                            yield item;
                        }
                    }
                    Hold::TimerFired => {
                        // Timer fired first: commit to secondary-only,
                        // appending the primary's tail later with no
                        // reordering of what's already been emitted.
                        for addr in secondary_list {
                            yield Ok(addr);
                        }
                        if let Ok(primary_list) = (&mut primary_task).await {
                            for addr in primary_list {
                                yield Ok(addr);
                            }
                        }
                    }
                }
            }
        }
    })
}

/// Both tasks are now settled (in whatever order); combine per the
/// failure rules and the ordering rule.
fn finish_after_both(
    host: &str,
    primary_res: LookupResult,
    secondary_res: LookupResult,
    first_count: usize,
) -> Vec<Result<AddrInfo, HappyEyeballsConnectError>> {
    match (primary_res, secondary_res) {
        (Ok(primary), Ok(secondary)) => interleave(primary, secondary, first_count)
            .into_iter()
            .map(Ok)
            .collect(),
        (Ok(primary), Err(_)) => primary.into_iter().map(Ok).collect(),
        (Err(_), Ok(secondary)) => secondary.into_iter().map(Ok).collect(),
        (Err(primary_err), Err(secondary_err)) => {
            vec![Err(HappyEyeballsConnectError::new(
                host,
                vec![primary_err, secondary_err],
            ))]
        }
    }
}

/// Drives a single-family lookup (no merge, no timing rule) and yields
/// either its results or a length-1 aggregate error — single-family
/// failures still wrap into `HappyEyeballsConnectError`, for a uniform
/// error type on the stream.
pub fn merge_single(
    service: Arc<dyn LookupService>,
    request: ResolverRequest,
    family: AddrFamily,
) -> ResolveStream {
    let host = request.host.clone();
    Box::pin(stream! {
        let task = LookupTask::spawn(service, &request, family);
        match task.await {
            Ok(addrs) => {
                for addr in addrs {
                    yield Ok(addr);
                }
            }
            Err(e) => yield Err(HappyEyeballsConnectError::new(host, vec![e])),
        }
    })
}
