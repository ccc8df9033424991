//! CSV output formatting.

use super::{AddressReport, CheckReport};
use crate::range::RangeIter;
use std::io;

/// Print `check` results in CSV format.
pub fn print_check(reports: &[CheckReport]) -> csv::Result<()> {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    wtr.write_record(["input", "address_kind", "is_range", "range_kind", "count", "note"])?;

    for report in reports {
        let address_kind = report.address_kind.map_or(String::new(), |k| k.to_string());
        let range_kind = report.range_kind.map_or(String::new(), |k| k.to_string());
        let count = report.count.map_or(String::new(), |c| c.to_string());

        wtr.write_record([
            report.input.as_str(),
            address_kind.as_str(),
            if report.is_range { "true" } else { "false" },
            range_kind.as_str(),
            count.as_str(),
            report.note.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Print an address conversion in CSV format.
pub fn print_address(report: &AddressReport) -> csv::Result<()> {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    wtr.write_record(["input", "kind", "bytes", "canonical"])?;
    let kind = report.kind.to_string();
    wtr.write_record([
        report.input.as_str(),
        kind.as_str(),
        report.bytes.as_str(),
        report.canonical.as_str(),
    ])?;

    wtr.flush()?;
    Ok(())
}

/// Stream an expanded range as `range,address` rows.
pub fn print_expansion(range: &str, iter: RangeIter) -> csv::Result<()> {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    wtr.write_record(["range", "address"])?;
    for addr in iter {
        wtr.write_record([range, addr.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
