//! JSON output formatting.

use crate::report::ProbeReport;
use std::io::{self, Write};

/// Print a report in JSON format.
pub fn print_json(report: &ProbeReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_json(&mut out, report)
}

/// Write a report as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, report: &ProbeReport) -> io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}
