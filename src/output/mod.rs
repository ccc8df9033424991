//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of command results.

mod csv_format;
mod json_format;
mod plain;

pub use plain::{print_error, print_info};

use crate::cli::OutputFormat;
use crate::codec;
use crate::error::{AddressResult, CliResult};
use crate::range::{self, RangeExpr, RangeIter, RangeKind};
use crate::types::{Address, AddressKind};
use serde::{Serialize, Serializer};

/// What `check` learned about one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub input: String,
    pub address_kind: Option<AddressKind>,
    pub is_range: bool,
    pub range_kind: Option<RangeKind>,
    /// Number of addresses, when the range can be expanded.
    pub count: Option<u64>,
    /// Why a recognized range cannot be expanded.
    pub note: Option<String>,
}

impl CheckReport {
    /// Classify `input` as an address, a range, or neither.
    pub fn inspect(input: &str) -> Self {
        let is_range = range::is_range(input);
        let (range_kind, count, note) = if is_range {
            match RangeExpr::parse(input) {
                Ok(expr) => (Some(expr.kind()), Some(expr.len()), None),
                Err(e) => (range::classify(input), None, Some(e.to_string())),
            }
        } else {
            (None, None, None)
        };

        Self {
            input: input.to_string(),
            address_kind: codec::address_kind(input),
            is_range,
            range_kind,
            count,
            note,
        }
    }

    /// Short human description used by the plain formatter.
    pub fn summary(&self) -> String {
        match (self.address_kind, self.range_kind) {
            (Some(kind), _) => format!("{kind} address"),
            (None, Some(kind)) => match self.count {
                Some(1) => format!("{kind} range, 1 address"),
                Some(n) => format!("{kind} range, {n} addresses"),
                None => format!("{kind} range"),
            },
            (None, None) => "not an address or range".to_string(),
        }
    }
}

/// One address in its binary and canonical text forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressReport {
    pub input: String,
    pub kind: AddressKind,
    /// Hex dump of the binary form.
    pub bytes: String,
    pub canonical: String,
}

impl AddressReport {
    /// Build a report for an already parsed address.
    pub fn new(input: &str, address: Address, uppercase_hex: bool) -> AddressResult<Self> {
        let bytes = if uppercase_hex {
            hex::encode_upper(address.octets())
        } else {
            hex::encode(address.octets())
        };

        Ok(Self {
            input: input.to_string(),
            kind: address.kind(),
            bytes,
            canonical: codec::binary_to_address(address.octets(), Some(address.kind()))?,
        })
    }
}

/// An expanded range, used for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ExpansionRecord {
    pub range: String,
    pub kind: Option<RangeKind>,
    pub count: u64,
    pub addresses: AddressSeq,
}

impl ExpansionRecord {
    pub fn new(range: &str, iter: RangeIter) -> Self {
        Self {
            range: range.to_string(),
            kind: range::classify(range),
            count: iter.total(),
            addresses: AddressSeq(iter),
        }
    }
}

/// Serializes as a JSON array, pulling addresses from the iterator one at a time.
#[derive(Debug, Clone)]
pub struct AddressSeq(RangeIter);

impl Serialize for AddressSeq {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.clone())
    }
}

/// Print `check` results in the requested format.
pub fn print_check(reports: &[CheckReport], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Plain => plain::print_check(reports)?,
        OutputFormat::Json => json_format::print_json(reports)?,
        OutputFormat::Csv => csv_format::print_check(reports)?,
    }
    Ok(())
}

/// Print a converted address in the requested format.
pub fn print_address(report: &AddressReport, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Plain => plain::print_address(report)?,
        OutputFormat::Json => json_format::print_json(report)?,
        OutputFormat::Csv => csv_format::print_address(report)?,
    }
    Ok(())
}

/// Print every address of an expanded range.
///
/// Every format streams one address at a time.
pub fn print_expansion(range: &str, iter: RangeIter, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Plain => plain::print_expansion(iter)?,
        OutputFormat::Csv => csv_format::print_expansion(range, iter)?,
        OutputFormat::Json => json_format::print_json(&ExpansionRecord::new(range, iter))?,
    }
    Ok(())
}
