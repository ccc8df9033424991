//! JSON output formatting.

use serde::Serialize;
use std::io::{self, BufWriter, Write};

/// Print any serializable result as pretty JSON.
///
/// Writes straight to stdout so large sequences are never buffered whole.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()
}
