//! Configuration file loading for the terminal front end.
//!
//! Settings are read from `draughts.toml` in the working directory unless
//! another path is given on the command line. Every field is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::render::RenderOptions;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Front end configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// File holding the persisted rule settings.
    /// Defaults to "checkers-settings.toml".
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,
    /// Print row and column labels around the board.
    #[serde(default = "default_true")]
    pub show_coordinates: bool,
    /// Mark the selected piece's targets with `*`.
    #[serde(default = "default_true")]
    pub show_targets: bool,
}

fn default_settings_path() -> PathBuf {
    PathBuf::from("checkers-settings.toml")
}

fn default_true() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            settings_path: default_settings_path(),
            show_coordinates: true,
            show_targets: true,
        }
    }
}

impl CliConfig {
    /// Default location of the configuration file.
    pub const DEFAULT_PATH: &'static str = "draughts.toml";

    /// Loads the configuration from `path`.
    ///
    /// Returns the defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_coordinates: self.show_coordinates,
            show_targets: self.show_targets,
        }
    }
}
