//! Check subcommand implementation.
//!
//! Handles `iphelper check <text>...`, reporting for each input whether it is
//! an address, a range expression, or neither.

use super::Context;
use crate::error::{CliError, CliResult};
use crate::output::{self, CheckReport};
use clap::Parser;
use tracing::debug;

/// Classify inputs as addresses or range expressions.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Text to classify
    ///
    /// Examples:
    ///   192.168.1.1           IPv4 address
    ///   2001:db8::1           IPv6 address
    ///   192.168.1.0/24        CIDR range
    ///   192.168.1-2.-         Per-octet range
    ///   10.0.0.1-10.0.0.9     Address span
    #[arg(value_name = "TEXT", required = true)]
    pub inputs: Vec<String>,

    /// Exit with an error if any input is neither an address nor a range
    #[arg(long)]
    pub strict: bool,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let reports: Vec<CheckReport> = self
            .inputs
            .iter()
            .map(|input| CheckReport::inspect(input))
            .collect();

        debug!(inputs = reports.len(), "classified inputs");
        output::print_check(&reports, ctx.format)?;

        let unknown = reports
            .iter()
            .filter(|r| r.address_kind.is_none() && !r.is_range)
            .count();
        if self.strict && unknown > 0 {
            return Err(CliError::Other(format!(
                "{unknown} input(s) are neither addresses nor ranges"
            )));
        }

        Ok(())
    }
}
