//! CLI subcommand definitions and handlers.
//!
//! - `sioprobe [probe]` - Probe the candidate index ports (default)
//! - `sioprobe chips` - List the chip IDs sioprobe can name
//! - `sioprobe config show|init|path` - Inspect or create the settings file

mod chips;
mod config;
mod probe;

pub use chips::ChipsCommand;
pub use config::{ConfigAction, ConfigCommand};
pub use probe::{check_expectation, run_probe, ProbeCommand};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// sioprobe - Identify a Super I/O chip and locate its hardware monitor.
///
/// Enters the chip's Extended Function Mode on each candidate index port,
/// reads the device ID and the base address of the hardware monitor logical
/// device, and leaves the chip locked again. Needs root for port access.
#[derive(Parser, Debug)]
#[command(name = "sioprobe")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Identify a Super I/O chip and locate its HWM base", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute (defaults to `probe`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH", env = "SIOPROBE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe candidate index ports for a Super I/O chip
    #[command(alias = "p")]
    Probe(ProbeCommand),

    /// List known chip IDs
    #[command(alias = "c")]
    Chips(ChipsCommand),

    /// Show or create the settings file
    Config(ConfigCommand),
}

impl Default for Commands {
    fn default() -> Self {
        Self::Probe(ProbeCommand::default())
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
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
    use crate::types::{ChipId, IndexPort};
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_probe() {
        let cli = Cli::try_parse_from(["sioprobe"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Commands::Probe(_)));
    }

    #[test]
    fn test_probe_flags() {
        let cli = Cli::try_parse_from([
            "sioprobe", "probe", "-p", "0x4E", "--port", "2e", "--expect", "0xD428", "-o", "json",
            "--strict",
        ])
        .unwrap();

        let Some(Commands::Probe(cmd)) = cli.command else {
            panic!("expected probe subcommand");
        };
        assert_eq!(cmd.ports, vec![IndexPort::SECONDARY, IndexPort::PRIMARY]);
        assert_eq!(cmd.expect, Some(ChipId::new(0xD428)));
        assert_eq!(cmd.output, Some(OutputFormat::Json));
        assert!(cmd.strict);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["sioprobe", "probe", "-p", "0xFFFF"]).is_err());
        assert!(Cli::try_parse_from(["sioprobe", "probe", "-p", "lpc"]).is_err());
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Plain.to_string(), "plain");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }
}
