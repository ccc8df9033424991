//! # iphelper - IP Address Conversion and Range Expansion
//!
//! iphelper converts single IPv4/IPv6 addresses between text and binary form,
//! and expands textual IPv4 range expressions into individual addresses.
//!
//! ## Features
//!
//! - **Address Codec**: text to 4/16 byte buffers and back, canonical IPv6 output
//! - **Numeric Input**: 32-bit integers such as `0x7f000001` read as IPv4
//! - **Range Grammars**: CIDR (`10.0.0.0/24`), per-octet (`10.0.1-3.-`) and
//!   address spans (`10.0.0.1-10.0.0.50`)
//! - **Lazy Expansion**: ranges up to `0.0.0.0/0` iterate in constant memory
//!
//! ## Example Usage
//!
//! ```rust
//! use iphelper::{address_to_binary, binary_to_address, expand_range, is_range};
//!
//! let addr = address_to_binary("127.0.0.1").unwrap();
//! assert_eq!(addr.octets(), &[127, 0, 0, 1]);
//! assert_eq!(binary_to_address(addr.octets(), None).unwrap(), "127.0.0.1");
//!
//! assert!(is_range("127.0.1-2.1"));
//! let addrs: Vec<String> = expand_range("127.0.1-2.1").unwrap().collect();
//! assert_eq!(addrs, ["127.0.1.1", "127.0.2.1"]);
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`types`] - Binary address types
//! - [`codec`] - Address text/binary conversion
//! - [`range`] - Range classification and lazy expansion
//! - [`error`] - Error types
//! - [`config`], [`cli`], [`output`] - The `iphelper` command-line front end

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod output;
pub mod range;
pub mod types;

// Re-export commonly used items
pub use codec::{
    address_kind, address_to_binary, binary_to_address, binary_to_address_with_kind, is_address,
    numeric_to_address_text,
};
pub use error::{AddressError, RangeError};
pub use range::{expand_range, is_range, RangeExpr, RangeIter, RangeKind};
pub use types::{Address, AddressKind};
