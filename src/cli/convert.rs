//! Address conversion subcommands.
//!
//! Handles `iphelper to-bytes <address>` and `iphelper from-bytes <hex>`.

use super::Context;
use crate::codec;
use crate::error::{CliError, CliResult};
use crate::output::{self, AddressReport};
use crate::types::Address;
use clap::Parser;
use tracing::debug;

/// Convert an address to its binary form.
#[derive(Parser, Debug)]
pub struct ToBytesCommand {
    /// Address text, or a 32-bit number such as 3232235777 or 0xc0a80101
    #[arg(value_name = "ADDRESS")]
    pub address: String,
}

impl ToBytesCommand {
    /// Execute the to-bytes command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let address = codec::address_to_binary(&self.address)?;
        debug!(input = %self.address, kind = %address.kind(), "parsed address");

        let report = AddressReport::new(&self.address, address, ctx.settings.uppercase_hex)?;
        output::print_address(&report, ctx.format)
    }
}

/// Render bytes as address text.
#[derive(Parser, Debug)]
pub struct FromBytesCommand {
    /// Hex bytes, e.g. "7f000001", "0x7f000001" or "7f:00:00:01"
    #[arg(value_name = "HEX")]
    pub hex: String,

    /// Address kind (ipv4 or ipv6); inferred from the length when omitted
    #[arg(short, long)]
    pub kind: Option<String>,
}

impl FromBytesCommand {
    /// Execute the from-bytes command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let bytes = decode_hex(&self.hex)?;

        let text = match &self.kind {
            Some(kind) => codec::binary_to_address_with_kind(&bytes, kind)?,
            None => codec::binary_to_address(&bytes, None)?,
        };
        let address: Address = text.parse()?;

        let report = AddressReport::new(&self.hex, address, ctx.settings.uppercase_hex)?;
        output::print_address(&report, ctx.format)
    }
}

/// Decode hex text, ignoring an optional `0x` prefix and `:`, `-`, space separators.
fn decode_hex(input: &str) -> CliResult<Vec<u8>> {
    let trimmed = input.trim();
    let digits: String = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
        .chars()
        .filter(|c| !matches!(c, ':' | '-' | ' '))
        .collect();

    hex::decode(&digits).map_err(|e| CliError::Other(format!("invalid hex '{input}': {e}")))
}
