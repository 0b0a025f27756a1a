//! Config subcommand implementation.
//!
//! Handles `sioprobe config` for inspecting and creating the settings file.

use crate::config::{AppSettings, Paths};
use crate::error::{CliError, CliResult};
use crate::output;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Show or create the settings file.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Settings actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective settings as JSON
    Show,

    /// Write a settings file with the default values
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the settings file location
    Path,
}

impl ConfigCommand {
    /// Execute the config command.
    ///
    /// `config` is the `--config` override, if one was given.
    pub fn execute(&self, config: Option<&Path>, quiet: bool) -> CliResult<()> {
        match &self.action {
            ConfigAction::Show => {
                let settings = AppSettings::load(config)?;
                println!("{}", serde_json::to_string_pretty(&settings)?);
                Ok(())
            }
            ConfigAction::Init { force } => {
                let path = settings_path(config)?;
                init_settings(&path, *force)?;
                if !quiet {
                    output::print_success(&format!("wrote default settings to {}", path.display()));
                }
                Ok(())
            }
            ConfigAction::Path => {
                println!("{}", settings_path(config)?.display());
                Ok(())
            }
        }
    }
}

fn settings_path(config: Option<&Path>) -> CliResult<PathBuf> {
    match config {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Paths::resolve()?.settings_file()),
    }
}

fn init_settings(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::Other(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    AppSettings::default().save_to(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        init_settings(&path, false).unwrap();

        assert_eq!(AppSettings::load_from(&path).unwrap(), AppSettings::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{}").unwrap();

        assert!(init_settings(&path, false).is_err());
        assert!(init_settings(&path, true).is_ok());
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = Path::new("/tmp/custom.json");
        assert_eq!(settings_path(Some(path)).unwrap(), path.to_path_buf());
    }
}
