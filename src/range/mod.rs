//! IPv4 range expressions and their lazy expansion.
//!
//! A range expression is text in one of three grammars:
//! - CIDR: `192.168.1.0/24`
//! - Hyphen-part: per-octet ranges such as `192.168.1-2.10-20` or `10.0.0.-`
//! - Hyphen-full: two full addresses such as `10.0.0.1-10.0.0.50`
//!
//! [`expand_range`] turns such text into a [`RangeIter`] that produces
//! addresses on demand, so even `0.0.0.0/0` costs constant memory.

mod classify;
mod iter;

pub use classify::{classify, is_cidr, is_hyphen_full, is_hyphen_part, is_range, MAX_PREFIX};
pub use iter::{Addrs, RangeIter};

use crate::codec::{address_to_int, int_to_address};
use crate::error::{RangeError, RangeResult};
use ipnetwork::Ipv4Network;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use tracing::debug;

/// The grammar a range expression was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeKind {
    /// `address/prefix`
    Cidr,
    /// Four octet fields, each a value or a `lo-hi` span
    HyphenPart,
    /// `address-address`
    HyphenFull,
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cidr => write!(f, "cidr"),
            Self::HyphenPart => write!(f, "hyphen-part"),
            Self::HyphenFull => write!(f, "hyphen-full"),
        }
    }
}

/// An inclusive span of octet values for one hyphen-part field.
///
/// A reversed span collapses its lower bound up to the upper one rather than
/// swapping: `5-3` covers only `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OctetSpan {
    lo: u8,
    hi: u8,
}

impl OctetSpan {
    /// Create a span, collapsing `lo` to `hi` when `lo > hi`.
    pub const fn new(lo: u8, hi: u8) -> Self {
        if lo > hi {
            Self { lo: hi, hi }
        } else {
            Self { lo, hi }
        }
    }

    /// A span holding one value.
    pub const fn single(value: u8) -> Self {
        Self {
            lo: value,
            hi: value,
        }
    }

    #[inline]
    pub const fn lo(&self) -> u8 {
        self.lo
    }

    #[inline]
    pub const fn hi(&self) -> u8 {
        self.hi
    }

    /// Number of values in the span (1-256).
    pub const fn len(&self) -> u16 {
        (self.hi - self.lo) as u16 + 1
    }

    /// Never true: a span holds at least one value.
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub const fn contains(&self, value: u8) -> bool {
        value >= self.lo && value <= self.hi
    }
}

impl fmt::Display for OctetSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lo == self.hi {
            write!(f, "{}", self.lo)
        } else {
            write!(f, "{}-{}", self.lo, self.hi)
        }
    }
}

/// A parsed, expandable IPv4 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeExpr {
    /// A CIDR block; the host bits of the written address are ignored.
    Cidr(Ipv4Network),
    /// The Cartesian product of four octet spans.
    HyphenPart([OctetSpan; 4]),
    /// An inclusive span, always stored with `start <= end`.
    HyphenFull { start: Ipv4Addr, end: Ipv4Addr },
}

impl RangeExpr {
    /// Parse a range expression.
    ///
    /// Grammars are tried in the order CIDR, hyphen-part, hyphen-full. IPv6
    /// text that matches a grammar is rejected with
    /// [`RangeError::UnsupportedFamily`].
    pub fn parse(text: &str) -> RangeResult<Self> {
        let not_a_range = || RangeError::NotARange(text.to_string());
        let unsupported = || RangeError::UnsupportedFamily(text.to_string());

        match classify(text).ok_or_else(not_a_range)? {
            RangeKind::Cidr => {
                let (addr, prefix) = classify::split_cidr(text).ok_or_else(not_a_range)?;
                let addr: Ipv4Addr = addr.parse().map_err(|_| unsupported())?;
                let network = Ipv4Network::new(addr, prefix).map_err(|_| not_a_range())?;
                Ok(Self::Cidr(network))
            }
            RangeKind::HyphenPart => {
                let fields = classify::parse_hyphen_part(text).ok_or_else(not_a_range)?;
                Ok(Self::HyphenPart(fields))
            }
            RangeKind::HyphenFull => {
                let (start, end) = classify::split_hyphen_full(text).ok_or_else(not_a_range)?;
                let start: Ipv4Addr = start.parse().map_err(|_| unsupported())?;
                let end: Ipv4Addr = end.parse().map_err(|_| unsupported())?;
                Ok(Self::full(start, end))
            }
        }
    }

    /// A hyphen-full range; the endpoints are swapped if given high to low.
    pub fn full(start: Ipv4Addr, end: Ipv4Addr) -> Self {
        if start > end {
            Self::HyphenFull {
                start: end,
                end: start,
            }
        } else {
            Self::HyphenFull { start, end }
        }
    }

    /// The grammar this range came from.
    pub const fn kind(&self) -> RangeKind {
        match self {
            Self::Cidr(_) => RangeKind::Cidr,
            Self::HyphenPart(_) => RangeKind::HyphenPart,
            Self::HyphenFull { .. } => RangeKind::HyphenFull,
        }
    }

    /// Number of addresses the range expands to.
    pub fn len(&self) -> u64 {
        match self {
            Self::Cidr(network) => 1u64 << (u32::from(MAX_PREFIX) - u32::from(network.prefix())),
            Self::HyphenPart(fields) => fields.iter().map(|f| u64::from(f.len())).product(),
            Self::HyphenFull { start, end } => {
                u64::from(address_to_int(*end)) - u64::from(address_to_int(*start)) + 1
            }
        }
    }

    /// Never true: every range holds at least one address.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The lowest address in the range.
    pub fn first(&self) -> Ipv4Addr {
        match self {
            Self::Cidr(network) => network.network(),
            Self::HyphenPart(fields) => Ipv4Addr::from(fields.map(|f| f.lo())),
            Self::HyphenFull { start, .. } => *start,
        }
    }

    /// The highest address in the range.
    pub fn last(&self) -> Ipv4Addr {
        match self {
            Self::Cidr(network) => {
                let base = address_to_int(network.network());
                let host_bits = (self.len() - 1) as u32;
                int_to_address(base | host_bits)
            }
            Self::HyphenPart(fields) => Ipv4Addr::from(fields.map(|f| f.hi())),
            Self::HyphenFull { end, .. } => *end,
        }
    }

    /// Check if `addr` is one of the addresses this range expands to.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        match self {
            Self::HyphenPart(fields) => fields
                .iter()
                .zip(addr.octets())
                .all(|(field, octet)| field.contains(octet)),
            _ => self.first() <= addr && addr <= self.last(),
        }
    }

    /// A fresh iterator over the range, in ascending order.
    pub fn iter(&self) -> RangeIter {
        match self {
            Self::Cidr(_) | Self::HyphenFull { .. } => {
                RangeIter::span(address_to_int(self.first()), address_to_int(self.last()))
            }
            Self::HyphenPart(fields) => RangeIter::octets(*fields),
        }
    }
}

impl FromStr for RangeExpr {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RangeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cidr(network) => write!(f, "{}/{}", network.network(), network.prefix()),
            Self::HyphenPart([a, b, c, d]) => write!(f, "{a}.{b}.{c}.{d}"),
            Self::HyphenFull { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

impl IntoIterator for RangeExpr {
    type Item = String;
    type IntoIter = RangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &RangeExpr {
    type Item = String;
    type IntoIter = RangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Expand a range expression into a lazy sequence of address strings.
///
/// The grammar is re-derived from `text` on every call and each call returns
/// an independent iterator.
///
/// # Errors
///
/// [`RangeError::NotARange`] if `text` matches no grammar, and
/// [`RangeError::UnsupportedFamily`] for IPv6 CIDR or hyphen-full text.
pub fn expand_range(text: &str) -> RangeResult<RangeIter> {
    let expr = RangeExpr::parse(text)?;
    debug!(range = text, kind = %expr.kind(), count = expr.len(), "expanding ip range");
    Ok(expr.iter())
}
