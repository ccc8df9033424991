//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting. Expanded
//! addresses are printed bare, one per line, so they can be piped.

use super::{AddressReport, CheckReport};
use crate::range::RangeIter;
use console::style;
use std::io::{self, BufWriter, Write};

/// Print `check` results as an aligned table.
pub fn print_check(reports: &[CheckReport]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let width = reports.iter().map(|r| r.input.len()).max().unwrap_or(0);

    for report in reports {
        let summary = report.summary();
        let summary = if report.address_kind.is_some() || report.count.is_some() {
            style(summary).green()
        } else if report.is_range {
            style(summary).yellow()
        } else {
            style(summary).red()
        };

        let input = format!("{:<width$}", report.input, width = width);
        writeln!(out, "  {}  {}", style(input).bold(), summary)?;
        if let Some(note) = &report.note {
            writeln!(out, "  {:<width$}  {}", "", style(note).dim(), width = width)?;
        }
    }

    Ok(())
}

/// Print an address conversion.
pub fn print_address(report: &AddressReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "  {} {}", style("Input:").bold(), report.input)?;
    writeln!(out, "  {} {}", style("Kind:").bold(), report.kind)?;
    writeln!(out, "  {} {}", style("Bytes:").bold(), style(&report.bytes).cyan())?;
    writeln!(out, "  {} {}", style("Canonical:").bold(), report.canonical)?;

    Ok(())
}

/// Stream every address, one per line.
pub fn print_expansion(iter: RangeIter) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for addr in iter.addrs() {
        writeln!(out, "{addr}")?;
    }

    out.flush()
}

/// Print an error message to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("[-]").red().bold(), message);
}

/// Print an info message to stderr.
pub fn print_info(message: &str) {
    eprintln!("{} {}", style("[*]").cyan().bold(), message);
}
