//! Application settings and paths.
//!
//! Settings live in an XDG-compliant config directory as `settings.json`.

use crate::error::{ConfigError, ConfigResult};
use crate::types::{ChipId, IndexPort};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Output formats accepted in `default_output_format`.
const OUTPUT_FORMATS: [&str; 3] = ["plain", "json", "csv"];

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/sioprobe)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Resolve paths using XDG directories.
    pub fn resolve() -> ConfigResult<Self> {
        let project =
            ProjectDirs::from("org", "sioprobe", "sioprobe").ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Index ports to probe, in order.
    pub candidate_ports: Vec<IndexPort>,
    /// Chip ID the report should expect, if any.
    pub expected_chip_id: Option<ChipId>,
    /// Default output format (plain, json, csv).
    pub default_output_format: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            candidate_ports: IndexPort::DEFAULT_CANDIDATES.to_vec(),
            expected_chip_id: None,
            default_output_format: "plain".to_string(),
        }
    }
}

impl AppSettings {
    /// Load settings from `path`, or from the default location when `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let file = Paths::resolve()?.settings_file();
                if !file.exists() {
                    return Ok(Self::default());
                }
                Self::load_from(&file)
            }
        }
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a specific file, creating its directory.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Check the settings for values the prober cannot use.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.candidate_ports.is_empty() {
            return Err(ConfigError::Invalid(
                "candidate_ports must name at least one index port".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for port in &self.candidate_ports {
            if !seen.insert(port) {
                return Err(ConfigError::Invalid(format!(
                    "candidate port {} is listed twice",
                    port
                )));
            }
        }

        if !OUTPUT_FORMATS.contains(&self.default_output_format.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown output format '{}' (expected one of: {})",
                self.default_output_format,
                OUTPUT_FORMATS.join(", ")
            )));
        }

        Ok(())
    }
}
