use anyhow::Context;
use clap::Parser;
use sioprobe::cli::{Cli, Commands};
use sioprobe::config::AppSettings;
use sioprobe::output;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config.as_deref();

    match cli.command.unwrap_or_default() {
        Commands::Probe(cmd) => {
            let settings = AppSettings::load(config).context("failed to load settings")?;
            cmd.execute(&settings, cli.quiet)?;
        }
        Commands::Chips(cmd) => cmd.execute()?,
        Commands::Config(cmd) => cmd.execute(config, cli.quiet)?,
    }

    Ok(())
}

/// Log to stderr so JSON and CSV on stdout stay parseable. `RUST_LOG` wins
/// over the verbosity flags.
fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
