//! Core type definitions using newtype patterns for type safety.
//!
//! These types make invalid addresses unrepresentable: an `Address` only exists
//! once its text or bytes have been validated.

mod address;

pub use address::{Address, AddressKind};
