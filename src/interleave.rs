//! The ordering rule: first-family burst, then strict round-robin
//! starting from the secondary queue, then the remainder of whichever
//! queue outlasts the other.
//!
//! This is pure and synchronous — both queues' full contents must
//! already be known. The timing rule, which decides *when* this gets
//! called relative to arrival order, lives in [`crate::merger`].

use crate::addr::AddrInfo;

/// Merges `primary` and `secondary` per the ordering rule, given
/// `first_addr_family_count` primary-family elements to emit before
/// round-robin begins.
///
/// `first_addr_family_count` is clamped to `primary.len()` — a burst
/// larger than the queue degenerates to "primary then secondary".
pub fn interleave(
    primary: Vec<AddrInfo>,
    secondary: Vec<AddrInfo>,
    first_addr_family_count: usize,
) -> Vec<AddrInfo> {
    let mut out = Vec::with_capacity(primary.len() + secondary.len());

    let burst = first_addr_family_count.min(primary.len());
    let mut p = primary.into_iter();
    let mut s = secondary.into_iter();
    out.extend((&mut p).take(burst));

    loop {
        match (s.next(), p.next()) {
            (Some(sv), Some(pv)) => {
                out.push(sv);
                out.push(pv);
            }
            (Some(sv), None) => {
                out.push(sv);
                out.extend(s);
                break;
            }
            (None, Some(pv)) => {
                out.push(pv);
                out.extend(p);
                break;
            }
            (None, None) => break,
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addr::{AddrInfo, SockAddr, IPPROTO_TCP, SOCK_STREAM};
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn v6(n: u16) -> AddrInfo {
        AddrInfo::new(
            SOCK_STREAM,
            IPPROTO_TCP,
            "",
            SockAddr::v6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, n), n),
        )
    }

    fn v4(n: u16) -> AddrInfo {
        AddrInfo::new(
            SOCK_STREAM,
            IPPROTO_TCP,
            "",
            SockAddr::v4(Ipv4Addr::new(192, 0, 2, n as u8), n),
        )
    }

    #[test]
    fn burst_two_worked_example() {
        let primary = vec![v6(1), v6(2), v6(3), v6(4)];
        let secondary = vec![v4(1), v4(2), v4(3), v4(4)];
        let got = interleave(primary, secondary, 2);
        let want = vec![
            v6(1),
            v6(2),
            v4(1),
            v6(3),
            v4(2),
            v6(4),
            v4(3),
            v4(4),
        ];
        assert_eq!(got, want);
    }

    #[test]
    fn classic_round_robin_burst_one() {
        let primary = vec![v6(1), v6(2), v6(3), v6(4)];
        let secondary = vec![v4(1), v4(2), v4(3), v4(4)];
        let got = interleave(primary, secondary, 1);
        let want = vec![
            v6(1),
            v4(1),
            v6(2),
            v4(2),
            v6(3),
            v4(3),
            v6(4),
            v4(4),
        ];
        assert_eq!(got, want);
    }

    #[test]
    fn burst_at_least_primary_len_degenerates_to_primary_then_secondary() {
        let primary = vec![v6(1), v6(2)];
        let secondary = vec![v4(1), v4(2)];
        let got = interleave(primary, secondary, 100);
        assert_eq!(got, vec![v6(1), v6(2), v4(1), v4(2)]);
    }

    #[test]
    fn empty_secondary_yields_primary_native_order() {
        let primary = vec![v6(1), v6(2), v6(3)];
        let got = interleave(primary.clone(), vec![], 1);
        assert_eq!(got, primary);
    }

    #[test]
    fn empty_primary_yields_secondary_native_order() {
        let secondary = vec![v4(1), v4(2), v4(3)];
        let got = interleave(vec![], secondary.clone(), 1);
        assert_eq!(got, secondary);
    }

    #[test]
    fn unequal_lengths_append_longer_tail() {
        let primary = vec![v6(1)];
        let secondary = vec![v4(1), v4(2), v4(3)];
        let got = interleave(primary, secondary, 1);
        assert_eq!(got, vec![v6(1), v4(1), v4(2), v4(3)]);
    }
}
