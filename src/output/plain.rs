//! Plain text output formatting.
//!
//! The first line for each chip keeps the classic `SIO at ...` layout so
//! existing scripts that grep for it keep working; details follow indented.

use crate::report::{ProbeReport, ReportEntry};
use crate::superio::SioChip;
use console::style;
use std::io::{self, Write};

/// Print a report in human-readable plain text format.
pub fn print_plain(report: &ProbeReport) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_plain(&mut out, report)
}

/// Write a report in plain text format.
pub fn write_plain<W: Write>(out: &mut W, report: &ProbeReport) -> io::Result<()> {
    if report.results.is_empty() {
        writeln!(
            out,
            "{} ({})",
            style("No accessible Super I/O chip found").yellow(),
            report.summary()
        )?;
        return Ok(());
    }

    for entry in &report.results {
        write_entry(out, entry)?;
    }

    Ok(())
}

fn write_entry<W: Write>(out: &mut W, entry: &ReportEntry) -> io::Result<()> {
    writeln!(
        out,
        "SIO at {}: DEVID={}  HWM base={} (index/data @ base+5/base+6)",
        entry.port, entry.chip_id, entry.hwm_base
    )?;

    let chip = entry.chip();
    let chip_line = match chip {
        SioChip::Unknown(_) | SioChip::Absent => style(chip.to_string()).yellow(),
        _ => style(format!("{} (revision {})", chip, entry.chip_id.revision())).green(),
    };
    writeln!(out, "  {:<10} {}", style("Chip:").bold(), chip_line)?;

    match (entry.hwm_index_port, entry.hwm_data_port) {
        (Some(index), Some(data)) => {
            writeln!(out, "  {:<10} {:#06X}", style("HWM index:").bold(), index)?;
            writeln!(out, "  {:<10} {:#06X}", style("HWM data:").bold(), data)?;
        }
        _ => {
            writeln!(
                out,
                "  {:<10} {}",
                style("HWM:").bold(),
                style("no I/O window assigned").dim()
            )?;
        }
    }

    Ok(())
}

/// Print a probe header before probing begins.
pub fn print_probe_header(backend: &str, candidates: usize) {
    println!(
        "{} {} v{}",
        style("Starting").cyan(),
        style("sioprobe").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "{} Backend: {}",
        style("•").dim(),
        style(backend).yellow()
    );
    println!(
        "{} Probing {} candidate port(s)...",
        style("•").dim(),
        style(candidates).white().bold()
    );
    println!();
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::superio::ProbeResult;
    use crate::types::{ChipId, HwmBase, IndexPort};

    fn render(report: &ProbeReport) -> String {
        console::set_colors_enabled(false);
        let mut buf = Vec::new();
        write_plain(&mut buf, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_classic_report_line() {
        let report = ProbeReport::new("fake", &IndexPort::DEFAULT_CANDIDATES).finalize(vec![
            ProbeResult::new(IndexPort::PRIMARY, ChipId::new(0xD428), HwmBase::new(0x0290)),
        ]);

        let text = render(&report);

        assert!(text.starts_with(
            "SIO at 0x2E: DEVID=0xD428  HWM base=0x0290 (index/data @ base+5/base+6)\n"
        ));
        assert!(text.contains("Nuvoton NCT6798D (revision 0)"));
        assert!(text.contains("0x0295"));
        assert!(text.contains("0x0296"));
    }

    #[test]
    fn test_unassigned_window() {
        let report = ProbeReport::new("fake", &[IndexPort::SECONDARY]).finalize(vec![
            ProbeResult::new(IndexPort::SECONDARY, ChipId::new(0x8728), HwmBase::new(0)),
        ]);

        let text = render(&report);

        assert!(text.contains("SIO at 0x4E: DEVID=0x8728  HWM base=0x0000"));
        assert!(text.contains("unknown"));
        assert!(text.contains("no I/O window assigned"));
    }

    #[test]
    fn test_nothing_found() {
        let report = ProbeReport::new("fake", &IndexPort::DEFAULT_CANDIDATES).finalize(vec![]);

        let text = render(&report);

        assert!(text.contains("No accessible Super I/O chip found"));
        assert!(text.contains("0 of 2 candidate port(s) answered [0x2E, 0x4E]"));
    }
}
