//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `iphelper check <text>...` - Classify addresses and ranges
//! - `iphelper to-bytes <address>` - Show the binary form of an address
//! - `iphelper from-bytes <hex>` - Render bytes as address text
//! - `iphelper expand <range>...` - List every address in a range

mod check;
mod convert;
mod expand;

pub use check::CheckCommand;
pub use convert::{FromBytesCommand, ToBytesCommand};
pub use expand::ExpandCommand;

use crate::config::Settings;
use crate::error::CliResult;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// iphelper - IP address conversion and range expansion.
///
/// Converts single IPv4/IPv6 addresses between text and bytes, and expands
/// CIDR blocks, per-octet ranges (10.0.1-3.0-255) and address spans
/// (10.0.0.1-10.0.0.50) into individual addresses.
#[derive(Parser, Debug)]
#[command(name = "iphelper")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "IP address conversion and range expansion", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a JSON settings file
    #[arg(long, global = true, value_name = "PATH", env = "IPHELPER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the settings file value)
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,
}

impl Cli {
    /// Log filter matching the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify inputs as addresses or range expressions
    #[command(alias = "c")]
    Check(CheckCommand),

    /// Convert an address to its binary form
    #[command(alias = "b")]
    ToBytes(ToBytesCommand),

    /// Convert bytes (hex) to address text
    #[command(alias = "t")]
    FromBytes(FromBytesCommand),

    /// Expand range expressions into addresses
    #[command(alias = "e")]
    Expand(ExpandCommand),
}

impl Commands {
    /// Run the selected subcommand.
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        match self {
            Self::Check(cmd) => cmd.execute(ctx),
            Self::ToBytes(cmd) => cmd.execute(ctx),
            Self::FromBytes(cmd) => cmd.execute(ctx),
            Self::Expand(cmd) => cmd.execute(ctx),
        }
    }
}

/// Resolved options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: Settings,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Context {
    /// Combine command-line flags with loaded settings; flags win.
    pub fn new(settings: Settings, format: Option<OutputFormat>, quiet: bool) -> Self {
        let format = format.unwrap_or_else(|| {
            OutputFormat::from_str(&settings.default_output_format, true).unwrap_or_default()
        });
        Self {
            settings,
            format,
            quiet,
        }
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Plain
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expand() {
        let cli = Cli::try_parse_from(["iphelper", "-vv", "expand", "10.0.0.0/30", "--limit", "4"])
            .unwrap();
        assert_eq!(cli.log_level(), "debug");
        match cli.command {
            Some(Commands::Expand(cmd)) => {
                assert_eq!(cmd.ranges, vec!["10.0.0.0/30"]);
                assert_eq!(cmd.limit, Some(4));
            }
            other => panic!("Expected expand, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_from_bytes_kind() {
        let cli =
            Cli::try_parse_from(["iphelper", "from-bytes", "7f000001", "--kind", "ipv4"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::FromBytes(_))));
    }

    #[test]
    fn test_context_format_precedence() {
        let settings = Settings {
            default_output_format: "csv".to_string(),
            ..Settings::default()
        };

        let ctx = Context::new(settings.clone(), None, false);
        assert_eq!(ctx.format, OutputFormat::Csv);

        let ctx = Context::new(settings, Some(OutputFormat::Json), false);
        assert_eq!(ctx.format, OutputFormat::Json);
    }
}
