//! Expand subcommand implementation.
//!
//! Handles `iphelper expand <range>...`, streaming every address of each range.

use super::Context;
use crate::error::{CliError, CliResult};
use crate::output;
use crate::range::expand_range;
use clap::Parser;
use tracing::{debug, info};

/// Expand range expressions into addresses.
#[derive(Parser, Debug)]
pub struct ExpandCommand {
    /// Range expressions to expand
    ///
    /// Examples:
    ///   192.168.1.0/24        CIDR block
    ///   192.168.1-2.10-20     Per-octet ranges (a trailing "-" means up to 255)
    ///   10.0.0.1-10.0.0.50    Address span
    #[arg(value_name = "RANGE", required = true)]
    pub ranges: Vec<String>,

    /// Refuse ranges larger than this many addresses (0 = unlimited)
    ///
    /// Defaults to `max_expand` from the settings file.
    #[arg(short, long, value_name = "N")]
    pub limit: Option<u64>,

    /// Only print how many addresses each range holds
    #[arg(long)]
    pub count: bool,
}

impl ExpandCommand {
    /// Execute the expand command.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let limit = self.limit.unwrap_or(ctx.settings.max_expand);

        // Validate every range before printing anything.
        let mut expansions = Vec::with_capacity(self.ranges.len());
        for range in &self.ranges {
            let iter = expand_range(range)?;
            if !self.count && limit != 0 && iter.total() > limit {
                return Err(CliError::Other(format!(
                    "range {} expands to {} addresses, above the limit of {} (use --limit)",
                    range,
                    iter.total(),
                    limit
                )));
            }
            expansions.push((range.as_str(), iter));
        }

        for (range, iter) in expansions {
            if self.count {
                println!("{}\t{}", range, iter.total());
                continue;
            }
            if !ctx.quiet {
                info!(range, count = iter.total(), "expanding");
            }
            debug!(range, format = %ctx.format, "writing addresses");
            output::print_expansion(range, iter, ctx.format)?;
        }

        Ok(())
    }
}
