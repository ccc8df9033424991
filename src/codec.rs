//! Conversion between address text and binary form.
//!
//! Handles:
//! - Validation and family detection of address text
//! - Text to 4/16 byte buffers, including `::` expansion
//! - Buffers back to text, with canonical IPv6 compression
//! - 32-bit integers to dotted IPv4 text

use crate::error::{AddressError, AddressResult};
use crate::types::{Address, AddressKind};
use std::borrow::Cow;
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::trace;

const IPV6_GROUPS: usize = 8;

/// Check if `text` is a valid IPv4 or IPv6 address.
pub fn is_address(text: &str) -> bool {
    address_kind(text).is_some()
}

/// Detect the family of an address, or `None` if `text` is not an address.
///
/// IPv4 must be a dotted quad of decimal octets without leading zeros. IPv6
/// accepts `::` compression and an embedded IPv4 tail.
pub fn address_kind(text: &str) -> Option<AddressKind> {
    if text.parse::<Ipv4Addr>().is_ok() {
        Some(AddressKind::Ipv4)
    } else if text.parse::<Ipv6Addr>().is_ok() {
        Some(AddressKind::Ipv6)
    } else {
        None
    }
}

/// Format a 32-bit integer as dotted IPv4 text.
pub fn u32_to_address_text(value: u32) -> String {
    int_to_address(value).to_string()
}

/// Convert numeric text (decimal, or hex with a `0x` prefix) to dotted IPv4.
///
/// Anything that is not an integer in `0..=u32::MAX` comes back unchanged, so
/// text that is already an address passes straight through.
pub fn numeric_to_address_text(text: &str) -> Cow<'_, str> {
    let trimmed = text.trim();
    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"));

    let value = match hex {
        Some(digits) if is_all(digits, |b| b.is_ascii_hexdigit()) => {
            u64::from_str_radix(digits, 16).ok()
        }
        Some(_) => None,
        None if is_all(trimmed, |b| b.is_ascii_digit()) => trimmed.parse::<u64>().ok(),
        None => None,
    };

    match value.and_then(|v| u32::try_from(v).ok()) {
        Some(v) => Cow::Owned(u32_to_address_text(v)),
        None => Cow::Borrowed(text),
    }
}

/// Parse address text (or a numeric IPv4 value) into its binary form.
pub fn address_to_binary(text: &str) -> AddressResult<Address> {
    let text = numeric_to_address_text(text);

    if let Ok(v4) = text.parse::<Ipv4Addr>() {
        return Ok(Address::from(v4));
    }
    if let Ok(v6) = text.parse::<Ipv6Addr>() {
        return Ok(Address::from(v6));
    }

    Err(AddressError::InvalidAddress(text.into_owned()))
}

/// Render a 4 or 16 byte buffer as address text.
///
/// Without an explicit `kind`, exactly 4 bytes are read as IPv4 and anything
/// else as IPv6. IPv4 uses the first 4 bytes of the buffer.
pub fn binary_to_address(bytes: &[u8], kind: Option<AddressKind>) -> AddressResult<String> {
    let len = bytes.len();
    if len != 4 && len != 16 {
        return Err(AddressError::InvalidAddressLength(len));
    }

    let kind = kind.unwrap_or(if len == 4 {
        AddressKind::Ipv4
    } else {
        AddressKind::Ipv6
    });

    let text = match kind {
        AddressKind::Ipv4 => bytes[..4]
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join("."),
        AddressKind::Ipv6 => match <&[u8; 16]>::try_from(bytes) {
            Ok(octets) => format_ipv6(octets),
            // Too short for IPv6: render the groups present (a missing low byte
            // reads as 0) and let the validity check below reject the text.
            Err(_) => {
                let groups: Vec<u16> = bytes
                    .chunks(2)
                    .map(|pair| {
                        u16::from_be_bytes([pair[0], pair.get(1).copied().unwrap_or(0)])
                    })
                    .collect();
                join_groups(&groups)
            }
        },
    };

    trace!(%kind, %text, "rendered binary address");

    if is_address(&text) {
        Ok(text)
    } else {
        Err(AddressError::InvalidResult(text))
    }
}

/// Same as [`binary_to_address`] with the kind given by name (`"ipv4"` or `"ipv6"`).
pub fn binary_to_address_with_kind(bytes: &[u8], kind: &str) -> AddressResult<String> {
    let kind: AddressKind = kind.parse()?;
    binary_to_address(bytes, Some(kind))
}

/// Re-render any valid IPv6 text in canonical form.
pub fn canonicalize_ipv6(text: &str) -> AddressResult<String> {
    let addr: Ipv6Addr = text
        .parse()
        .map_err(|_| AddressError::InvalidAddress(text.to_string()))?;
    Ok(format_ipv6(&addr.octets()))
}

/// Spell out all eight IPv6 groups, filling `::` with zero groups.
///
/// `"0:1::7"` becomes `"0:1:0:0:0:0:0:7"`.
pub fn expand_ipv6(text: &str) -> AddressResult<String> {
    let addr: Ipv6Addr = text
        .parse()
        .map_err(|_| AddressError::InvalidAddress(text.to_string()))?;
    Ok(join_groups(&addr.segments()))
}

/// Big-endian integer value of an IPv4 address.
#[inline]
pub fn address_to_int(addr: Ipv4Addr) -> u32 {
    u32::from(addr)
}

/// IPv4 address for a big-endian integer value.
#[inline]
pub fn int_to_address(value: u32) -> Ipv4Addr {
    Ipv4Addr::from(value)
}

/// Canonical IPv6 text: lowercase hex groups without leading zeros, with the
/// longest run of two or more zero groups collapsed to `::` (leftmost wins ties).
pub(crate) fn format_ipv6(octets: &[u8; 16]) -> String {
    let mut groups = [0u16; IPV6_GROUPS];
    for (group, pair) in groups.iter_mut().zip(octets.chunks_exact(2)) {
        *group = u16::from_be_bytes([pair[0], pair[1]]);
    }

    match longest_zero_run(&groups) {
        Some((start, len)) => format!(
            "{}::{}",
            join_groups(&groups[..start]),
            join_groups(&groups[start + len..])
        ),
        None => join_groups(&groups),
    }
}

fn join_groups(groups: &[u16]) -> String {
    groups
        .iter()
        .map(|g| format!("{g:x}"))
        .collect::<Vec<_>>()
        .join(":")
}

/// Start and length of the longest run of at least two zero groups.
fn longest_zero_run(groups: &[u16]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut idx = 0;

    while idx < groups.len() {
        if groups[idx] != 0 {
            idx += 1;
            continue;
        }
        let start = idx;
        while idx < groups.len() && groups[idx] == 0 {
            idx += 1;
        }
        let len = idx - start;
        if len >= 2 && best.map_or(true, |(_, best_len)| len > best_len) {
            best = Some((start, len));
        }
    }

    best
}

fn is_all(s: &str, pred: impl Fn(u8) -> bool) -> bool {
    !s.is_empty() && s.bytes().all(pred)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ipv6_vectors() -> Vec<(&'static str, [u8; 16])> {
        vec![
            ("::", [0; 16]),
            ("::1", [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]),
            ("1::", [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
            ("1::1", [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]),
            ("1:2:3:4:5::", [0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 0, 0, 0, 0, 0]),
            (
                "2001:db8::1428:57ab",
                [
                    0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0x14, 0x28, 0x57, 0xab,
                ],
            ),
        ]
    }

    #[test]
    fn test_is_address() {
        assert!(is_address("127.0.0.1"));
        assert!(is_address("::"));
        assert!(is_address("::ffff:192.168.0.1"));
        assert!(!is_address("127.0.0"));
        assert!(!is_address("256.0.0.1"));
        assert!(!is_address("127.0.0.1/32"));
        assert!(!is_address("abcd"));
        assert!(!is_address(""));
    }

    #[test]
    fn test_address_kind() {
        assert_eq!(address_kind("10.0.0.1"), Some(AddressKind::Ipv4));
        assert_eq!(address_kind("fe80::1"), Some(AddressKind::Ipv6));
        assert_eq!(address_kind("example.com"), None);
    }

    #[test]
    fn test_numeric_to_address_text() {
        assert_eq!(numeric_to_address_text("127.0.0.1"), "127.0.0.1");
        assert_eq!(numeric_to_address_text("16777216"), "1.0.0.0");
        assert_eq!(numeric_to_address_text("0x01000000"), "1.0.0.0");
        assert_eq!(numeric_to_address_text("0xffffffff"), "255.255.255.255");
        assert_eq!(numeric_to_address_text("4294967295"), "255.255.255.255");
    }

    #[test]
    fn test_numeric_pass_through() {
        // One past u32::MAX, negative, fractional and empty inputs are untouched.
        assert_eq!(numeric_to_address_text("4294967296"), "4294967296");
        assert_eq!(numeric_to_address_text("-1"), "-1");
        assert_eq!(numeric_to_address_text("1.5"), "1.5");
        assert_eq!(numeric_to_address_text("0x"), "0x");
        assert_eq!(numeric_to_address_text(""), "");
        assert!(matches!(numeric_to_address_text("::1"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_u32_to_address_text() {
        assert_eq!(u32_to_address_text(0x7f000001), "127.0.0.1");
        assert_eq!(u32_to_address_text(0), "0.0.0.0");
    }

    #[test]
    fn test_address_to_binary_ipv4() {
        let addr = address_to_binary("127.0.0.1").unwrap();
        assert_eq!(addr.octets(), &[127, 0, 0, 1]);

        let addr = address_to_binary("0xffffffff").unwrap();
        assert_eq!(addr.octets(), &[255, 255, 255, 255]);
    }

    #[test]
    fn test_address_to_binary_ipv6() {
        for (text, bytes) in ipv6_vectors() {
            let addr = address_to_binary(text).unwrap();
            assert_eq!(addr.octets(), &bytes, "{text}");
        }
    }

    #[test]
    fn test_address_to_binary_invalid() {
        assert_eq!(
            address_to_binary("abcd"),
            Err(AddressError::InvalidAddress("abcd".to_string()))
        );
        assert!(address_to_binary("1:2:3:4:5:6:7:8:9").is_err());
    }

    #[test]
    fn test_binary_to_address_ipv4() {
        assert_eq!(binary_to_address(&[127, 0, 0, 1], None).unwrap(), "127.0.0.1");
    }

    #[test]
    fn test_binary_to_address_ipv6() {
        for (text, bytes) in ipv6_vectors() {
            assert_eq!(
                binary_to_address(&bytes, Some(AddressKind::Ipv6)).unwrap(),
                text
            );
            // 16 bytes default to IPv6
            assert_eq!(binary_to_address(&bytes, None).unwrap(), text);
        }
    }

    #[test]
    fn test_binary_to_address_ipv4_from_long_buffer() {
        let mut bytes = [0u8; 16];
        bytes[..4].copy_from_slice(&[10, 1, 2, 3]);
        assert_eq!(
            binary_to_address(&bytes, Some(AddressKind::Ipv4)).unwrap(),
            "10.1.2.3"
        );
    }

    #[test]
    fn test_binary_to_address_errors() {
        assert_eq!(
            binary_to_address(&[1, 2, 3], None),
            Err(AddressError::InvalidAddressLength(3))
        );
        assert_eq!(
            binary_to_address_with_kind(&[1, 2, 3, 4], "ipx"),
            Err(AddressError::InvalidAddressKind("ipx".to_string()))
        );
        assert_eq!(
            binary_to_address_with_kind(&[1, 2, 3, 4], "IPv4").unwrap(),
            "1.2.3.4"
        );
    }

    #[test]
    fn test_binary_to_address_short_ipv6_is_invalid_result() {
        assert_eq!(
            binary_to_address(&[127, 0, 0, 1], Some(AddressKind::Ipv6)),
            Err(AddressError::InvalidResult("7f00:1".to_string()))
        );
        assert_eq!(
            binary_to_address_with_kind(&[127, 0, 0, 1], "ipv6"),
            Err(AddressError::InvalidResult("7f00:1".to_string()))
        );
    }

    #[test]
    fn test_zero_run_selection() {
        // Longest run wins over the first one.
        let mut bytes = [0u8; 16];
        bytes[1] = 1;
        bytes[7] = 2;
        bytes[15] = 3;
        assert_eq!(format_ipv6(&bytes), "1:0:0:2::3");

        // Leftmost run wins a tie.
        let mut bytes = [0u8; 16];
        bytes[1] = 1;
        bytes[7] = 2;
        bytes[9] = 3;
        bytes[15] = 4;
        assert_eq!(format_ipv6(&bytes), "1::2:3:0:0:4");

        // A single zero group is never collapsed.
        let mut bytes = [0u8; 16];
        for (i, b) in bytes.iter_mut().enumerate() {
            if i % 2 == 1 && i != 7 {
                *b = 1;
            }
        }
        assert_eq!(format_ipv6(&bytes), "1:1:1:0:1:1:1:1");
    }

    #[test]
    fn test_round_trip() {
        for text in ["0.0.0.0", "192.168.100.200", "::", "fe80::1:2", "2001:DB8:0:0:1::1"] {
            let addr = address_to_binary(text).unwrap();
            let rendered = binary_to_address(addr.octets(), Some(addr.kind())).unwrap();
            assert_eq!(address_to_binary(&rendered).unwrap(), addr);
        }
    }

    #[test]
    fn test_canonicalize_ipv6() {
        assert_eq!(
            canonicalize_ipv6("2001:0DB8:0000:0000:0000:0000:1428:57AB").unwrap(),
            "2001:db8::1428:57ab"
        );
        assert!(canonicalize_ipv6("127.0.0.1").is_err());
    }

    #[test]
    fn test_expand_ipv6() {
        let cases = [
            ("0:1:2:3:4:5:6:7", "0:1:2:3:4:5:6:7"),
            ("::1", "0:0:0:0:0:0:0:1"),
            ("::0", "0:0:0:0:0:0:0:0"),
            ("1::", "1:0:0:0:0:0:0:0"),
            ("0::", "0:0:0:0:0:0:0:0"),
            ("0:1::", "0:1:0:0:0:0:0:0"),
            ("0:1:2:3:4:5::", "0:1:2:3:4:5:0:0"),
            ("0::7", "0:0:0:0:0:0:0:7"),
            ("0:1::7", "0:1:0:0:0:0:0:7"),
            ("0:1::6:7", "0:1:0:0:0:0:6:7"),
            ("0:1:2::6:7", "0:1:2:0:0:0:6:7"),
            ("0:1:2::5:6:7", "0:1:2:0:0:5:6:7"),
            ("0:1:2:3::5:6:7", "0:1:2:3:0:5:6:7"),
        ];
        for (input, expected) in cases {
            assert_eq!(expand_ipv6(input).unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_int_conversion() {
        let addr = Ipv4Addr::new(192, 168, 1, 10);
        assert_eq!(address_to_int(addr), 0xc0a8010a);
        assert_eq!(int_to_address(0xc0a8010a), addr);
    }
}
