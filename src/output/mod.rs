//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of probe reports.

mod csv_format;
mod json_format;
mod plain;

pub use csv_format::{print_csv, write_csv};
pub use json_format::{print_json, write_json};
pub use plain::{
    print_error, print_plain, print_probe_header, print_success, print_warning,
    write_plain,
};

use crate::cli::OutputFormat;
use crate::report::ProbeReport;
use std::io;

/// Format and print a report according to the specified format.
pub fn print_report(report: &ProbeReport, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Plain => print_plain(report),
        OutputFormat::Json => print_json(report),
        OutputFormat::Csv => print_csv(report),
    }
}
