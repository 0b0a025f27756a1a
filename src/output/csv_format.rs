//! CSV output formatting.

use crate::report::ProbeReport;
use std::io::{self, Write};

/// Print a report in CSV format.
pub fn print_csv(report: &ProbeReport) -> io::Result<()> {
    let stdout = io::stdout();
    write_csv(stdout.lock(), report)
}

/// Write one CSV row per found chip.
pub fn write_csv<W: Write>(out: W, report: &ProbeReport) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["port", "chip_id", "chip_name", "hwm_base", "hwm_index", "hwm_data"])?;

    for entry in &report.results {
        wtr.write_record(&[
            entry.port.to_string(),
            entry.chip_id.to_string(),
            entry.chip_name.to_string(),
            entry.hwm_base.to_string(),
            entry.hwm_index_port.map_or(String::new(), |p| format!("{:#06X}", p)),
            entry.hwm_data_port.map_or(String::new(), |p| format!("{:#06X}", p)),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
