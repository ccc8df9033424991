//! Error types for iphelper.
//!
//! Uses `thiserror` for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while converting single addresses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("invalid address length: {0} bytes (expected 4 or 16)")]
    InvalidAddressLength(usize),

    #[error("unknown address kind: {0}")]
    InvalidAddressKind(String),

    #[error("conversion produced an invalid address: {0}")]
    InvalidResult(String),
}

/// Errors raised while classifying or expanding range expressions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("{0} is not a valid ip range")]
    NotARange(String),

    #[error("{0} is not an IPv4 range and cannot be expanded")]
    UnsupportedFamily(String),
}

/// Errors raised while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("invalid setting: {0}")]
    Invalid(String),
}

/// Top-level error for command handlers.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for address conversion.
pub type AddressResult<T> = Result<T, AddressError>;

/// Result type alias for range operations.
pub type RangeResult<T> = Result<T, RangeError>;

/// Result type alias for settings.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for command handlers.
pub type CliResult<T> = Result<T, CliError>;
