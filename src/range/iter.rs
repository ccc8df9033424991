//! Lazy, forward-only iteration over an expanded range.

use super::OctetSpan;
use std::iter::FusedIterator;
use std::net::Ipv4Addr;

/// Ordered, finite sequence of address strings produced on demand.
///
/// The iterator owns its cursor and cannot be rewound; expand the range again
/// for a fresh pass. The total length is known up front.
#[derive(Debug, Clone)]
pub struct RangeIter {
    cursor: Cursor,
    total: u64,
    yielded: u64,
}

#[derive(Debug, Clone)]
enum Cursor {
    /// Contiguous integers, `next..=last`. `u64` so the final step past
    /// `u32::MAX` cannot overflow.
    Span { next: u64, last: u64 },
    /// One cursor per octet field; the rightmost field turns fastest.
    Odometer {
        fields: [OctetSpan; 4],
        current: [u8; 4],
        exhausted: bool,
    },
}

impl RangeIter {
    /// Every address from `start` to `end` inclusive. Requires `start <= end`.
    pub(crate) fn span(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self {
            cursor: Cursor::Span {
                next: u64::from(start),
                last: u64::from(end),
            },
            total: u64::from(end) - u64::from(start) + 1,
            yielded: 0,
        }
    }

    /// Every combination of the four field spans, leftmost field slowest.
    pub(crate) fn octets(fields: [OctetSpan; 4]) -> Self {
        Self {
            cursor: Cursor::Odometer {
                fields,
                current: fields.map(|f| f.lo()),
                exhausted: false,
            },
            total: fields.iter().map(|f| u64::from(f.len())).product(),
            yielded: 0,
        }
    }

    /// Check if another address is available.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.yielded < self.total
    }

    /// Number of addresses in the whole range.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of addresses not yet produced.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.total - self.yielded
    }

    /// Produce the next address without formatting it.
    pub fn next_addr(&mut self) -> Option<Ipv4Addr> {
        let addr = self.cursor.advance()?;
        self.yielded += 1;
        Some(addr)
    }

    /// Adapt into an iterator of [`Ipv4Addr`] values.
    pub fn addrs(self) -> Addrs {
        Addrs(self)
    }
}

impl Cursor {
    fn advance(&mut self) -> Option<Ipv4Addr> {
        match self {
            Self::Span { next, last } => {
                if *next > *last {
                    return None;
                }
                let addr = Ipv4Addr::from(*next as u32);
                *next += 1;
                Some(addr)
            }
            Self::Odometer {
                fields,
                current,
                exhausted,
            } => {
                if *exhausted {
                    return None;
                }
                let addr = Ipv4Addr::from(*current);

                // Carry leftward; overflowing the leftmost field ends the run.
                *exhausted = true;
                for idx in (0..current.len()).rev() {
                    if current[idx] < fields[idx].hi() {
                        current[idx] += 1;
                        *exhausted = false;
                        break;
                    }
                    current[idx] = fields[idx].lo();
                }

                Some(addr)
            }
        }
    }
}

impl Iterator for RangeIter {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_addr().map(|addr| addr.to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for RangeIter {}

/// Iterator of [`Ipv4Addr`] values over an expanded range.
#[derive(Debug, Clone)]
pub struct Addrs(RangeIter);

impl Iterator for Addrs {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next_addr()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl FusedIterator for Addrs {}
