//! Probe subcommand implementation.
//!
//! Handles `sioprobe probe` (and bare `sioprobe`).

use crate::cli::OutputFormat;
use crate::config::AppSettings;
use crate::error::{CliError, CliResult};
use crate::output;
use crate::report::{Expectation, ProbeReport};
use crate::superio::{self, probe_candidates, PortIo};
use crate::types::{ChipId, IndexPort};
use clap::{Parser, ValueEnum};
use std::collections::HashSet;
use tracing::debug;

/// Probe candidate index ports for a Super I/O chip.
#[derive(Parser, Debug, Default)]
pub struct ProbeCommand {
    /// Index port to probe, in hex (repeatable; replaces the configured list)
    ///
    /// Examples:
    ///   -p 0x2E            Primary Super I/O port only
    ///   -p 4E -p 2E        Secondary first, then primary
    #[arg(short = 'p', long = "port", value_name = "HEX")]
    pub ports: Vec<IndexPort>,

    /// Output format for results [default: from settings, else plain]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Chip ID to expect, in hex (e.g. 0xD428 for NCT6798D)
    #[arg(long, value_name = "HEX")]
    pub expect: Option<ChipId>,

    /// Fail when no chip is found or the expected chip is missing
    #[arg(long)]
    pub strict: bool,
}

impl ProbeCommand {
    /// Execute the probe command.
    pub fn execute(&self, settings: &AppSettings, quiet: bool) -> CliResult<()> {
        let candidates = self.candidates(settings);
        let format = self.output_format(settings)?;
        let expected = self.expect.or(settings.expected_chip_id);

        if !is_root() && !quiet {
            output::print_warning(
                "not running as root; port access will most likely be denied.",
            );
        }

        let mut io = superio::native_backend();

        if !quiet && format == OutputFormat::Plain {
            output::print_probe_header(io.name(), candidates.len());
        }

        let report = run_probe(&mut *io, &candidates, expected);
        output::print_report(&report, format)?;

        check_expectation(&report, self.strict, quiet)
    }

    /// Ports to try: the `--port` flags in the given order, or the
    /// configured list when none were given. Repeats are listed once.
    fn candidates(&self, settings: &AppSettings) -> Vec<IndexPort> {
        if self.ports.is_empty() {
            return settings.candidate_ports.clone();
        }

        let mut seen = HashSet::new();
        let mut ports = self.ports.clone();
        ports.retain(|port| seen.insert(*port));
        ports
    }

    fn output_format(&self, settings: &AppSettings) -> CliResult<OutputFormat> {
        match self.output {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&settings.default_output_format, true)
                .map_err(CliError::Other),
        }
    }
}

/// Run one probe pass over `candidates` and build the report.
pub fn run_probe<P: PortIo + ?Sized>(
    io: &mut P,
    candidates: &[IndexPort],
    expected: Option<ChipId>,
) -> ProbeReport {
    let backend = io.name();
    debug!(backend, candidates = candidates.len(), "starting probe");

    let results = probe_candidates(io, candidates);
    ProbeReport::new(backend, candidates)
        .with_expected(expected)
        .finalize(results)
}

/// Warn about, or with `strict` fail on, a report that does not show the
/// expected chip.
pub fn check_expectation(report: &ProbeReport, strict: bool, quiet: bool) -> CliResult<()> {
    let problem = match report.expectation() {
        Expectation::Met => None,
        Expectation::NotSet if !report.results.is_empty() => None,
        Expectation::NotSet | Expectation::NothingFound => {
            Some("no Super I/O chip could be accessed".to_string())
        }
        Expectation::Mismatch => {
            let found = report
                .results
                .iter()
                .map(|entry| format!("{} at {}", entry.chip_id, entry.port))
                .collect::<Vec<_>>()
                .join(", ");
            let expected = report
                .expected_chip_id
                .map(|id| id.to_string())
                .unwrap_or_default();
            Some(format!("expected chip {} but found {}", expected, found))
        }
    };

    match problem {
        None => Ok(()),
        Some(msg) if strict => Err(CliError::Other(msg)),
        Some(msg) => {
            if !quiet {
                output::print_warning(&msg);
            }
            Ok(())
        }
    }
}

/// Check if running with root privileges.
fn is_root() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid has no preconditions and cannot fail.
        unsafe { libc::geteuid() == 0 }
    }
    #[cfg(not(unix))]
    {
        false
    }
}
