//! Range grammar recognition.
//!
//! Three grammars are recognized, always tested in this order:
//! - CIDR: `10.0.0.0/24`
//! - hyphen-part: `10.0.1-3.0-`
//! - hyphen-full: `10.0.0.1-10.0.0.20`

use super::{OctetSpan, RangeKind};
use crate::codec::is_address;

/// Highest prefix length accepted after the `/`.
pub const MAX_PREFIX: u8 = 32;

/// Check if `text` is `<address>/<prefix>` with a prefix in `0..=32`.
///
/// Any address family is accepted on the left; only IPv4 expands.
pub fn is_cidr(text: &str) -> bool {
    split_cidr(text).is_some()
}

/// Check if `text` is four dot-separated fields, each an octet or `lo-hi`.
pub fn is_hyphen_part(text: &str) -> bool {
    parse_hyphen_part(text).is_some()
}

/// Check if `text` is two addresses joined by a single hyphen.
pub fn is_hyphen_full(text: &str) -> bool {
    split_hyphen_full(text).is_some()
}

/// Check if `text` is a range expression. A bare address is never a range.
pub fn is_range(text: &str) -> bool {
    !is_address(text) && classify(text).is_some()
}

/// Find the first grammar `text` matches.
///
/// Unlike [`is_range`] this does not exclude bare addresses: a plain IPv4
/// address matches hyphen-part and expands to itself.
pub fn classify(text: &str) -> Option<RangeKind> {
    if is_cidr(text) {
        Some(RangeKind::Cidr)
    } else if is_hyphen_part(text) {
        Some(RangeKind::HyphenPart)
    } else if is_hyphen_full(text) {
        Some(RangeKind::HyphenFull)
    } else {
        None
    }
}

/// Split a CIDR expression into its address text and prefix length.
pub(crate) fn split_cidr(text: &str) -> Option<(&str, u8)> {
    let (addr, prefix) = text.split_once('/')?;
    if !is_address(addr) {
        return None;
    }
    let prefix = parse_decimal(prefix)?;
    (prefix <= MAX_PREFIX).then_some((addr, prefix))
}

/// Parse the four fields of a hyphen-part expression.
pub(crate) fn parse_hyphen_part(text: &str) -> Option<[OctetSpan; 4]> {
    let mut fields = [OctetSpan::single(0); 4];
    let mut parts = text.split('.');

    for field in fields.iter_mut() {
        *field = parse_field(parts.next()?)?;
    }
    if parts.next().is_some() {
        return None;
    }

    Some(fields)
}

/// Split a hyphen-full expression into its two address texts.
pub(crate) fn split_hyphen_full(text: &str) -> Option<(&str, &str)> {
    let (start, end) = text.split_once('-')?;
    (is_address(start) && is_address(end)).then_some((start, end))
}

/// A single field: `v`, `lo-hi`, `lo-`, `-hi` or `-`.
fn parse_field(field: &str) -> Option<OctetSpan> {
    let Some((lo, hi)) = field.split_once('-') else {
        return parse_decimal(field).map(OctetSpan::single);
    };

    let lo = if lo.is_empty() { 0 } else { parse_decimal(lo)? };
    // A second hyphen makes `hi` non-numeric, which is rejected here.
    let hi = if hi.is_empty() { u8::MAX } else { parse_decimal(hi)? };

    Some(OctetSpan::new(lo, hi))
}

/// Non-empty ASCII decimal digits fitting in a `u8`.
fn parse_decimal(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_cidr() {
        assert!(is_cidr("127.0.0.1/32"));
        assert!(is_cidr("10.0.0.0/0"));
        assert!(is_cidr("2001:db8::/32"));
        assert!(!is_cidr("10.0.0.0/33"));
        assert!(!is_cidr("10.0.0.0/"));
        assert!(!is_cidr("10.0.0.0/-1"));
        assert!(!is_cidr("10.0.0.0/24/8"));
        assert!(!is_cidr("10.0.0/24"));
        assert!(!is_cidr("10.0.0.0"));
    }

    #[test]
    fn test_is_hyphen_part() {
        assert!(is_hyphen_part("127.0.0.0-255"));
        assert!(is_hyphen_part("127.0.1-2.1"));
        assert!(is_hyphen_part("127.0.0.-"));
        assert!(is_hyphen_part("127.0.0.5-"));
        assert!(is_hyphen_part("127.0.0.-5"));
        assert!(is_hyphen_part("127.0.0.1"));
        assert!(!is_hyphen_part("127.0.0"));
        assert!(!is_hyphen_part("127.0.0.0.1"));
        assert!(!is_hyphen_part("127.0.0.256"));
        assert!(!is_hyphen_part("127.0.0.1-256"));
        assert!(!is_hyphen_part("127.0.0.1-2-3"));
        assert!(!is_hyphen_part("127..0.1"));
        assert!(!is_hyphen_part("127.0.0.x"));
    }

    #[test]
    fn test_is_hyphen_full() {
        assert!(is_hyphen_full("127.0.0.1-127.0.0.255"));
        assert!(is_hyphen_full("::1-::2"));
        assert!(!is_hyphen_full("127.0.0.1-127.0.0"));
        assert!(!is_hyphen_full("127.0.0.1-127.0.0.2-127.0.0.3"));
    }

    #[test]
    fn test_is_range() {
        assert!(is_range("127.0.0.1/32"));
        assert!(is_range("127.0.0.0-255"));
        assert!(is_range("127.0.0.1-127.0.0.255"));
        assert!(!is_range("127.0"));
        assert!(!is_range("127.0.0.1"));
        assert!(!is_range("::1"));
    }

    #[test]
    fn test_addresses_are_never_ranges() {
        for text in ["0.0.0.0", "255.255.255.255", "10.1.2.3", "::", "fe80::1"] {
            assert!(is_address(text));
            assert!(!is_range(text), "{text}");
        }
    }

    #[test]
    fn test_classify_priority() {
        assert_eq!(classify("10.0.0.0/8"), Some(RangeKind::Cidr));
        assert_eq!(classify("10.0.0.1-5"), Some(RangeKind::HyphenPart));
        assert_eq!(classify("10.0.0.1-10.0.0.5"), Some(RangeKind::HyphenFull));
        assert_eq!(classify("10.0.0.1"), Some(RangeKind::HyphenPart));
        assert_eq!(classify("10.0.1"), None);
    }

    #[test]
    fn test_field_collapse() {
        let fields = parse_hyphen_part("1.2.3.5-3").unwrap();
        assert_eq!(fields[3], OctetSpan::single(3));

        let fields = parse_hyphen_part("1.2.3.-").unwrap();
        assert_eq!(fields[3], OctetSpan::new(0, 255));
    }
}
