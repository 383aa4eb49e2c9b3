//! Configuration management
//!
//! Merges defaults, an optional TOML config file and command-line flags.

use crate::{cli::Args, error::GenerateError, utils::fs::FileSystemUtils};
use serde::Deserialize;
use std::{env, path::{Path, PathBuf}};
use tracing::debug;

/// Name of the config file looked up in `$HOME`
pub const DEFAULT_CONFIG_FILE: &str = ".opskit.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Render templates without writing them
    pub dry_run: bool,
}

/// Values accepted in the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub debug: Option<bool>,
    pub dry_run: Option<bool>,
}

impl Config {
    /// Create configuration from command line arguments
    ///
    /// An explicit `--config` path must exist and parse. Without it,
    /// `$HOME/.opskit.toml` is used when present.
    pub fn from_args(args: &Args) -> Result<Self, GenerateError> {
        let config_file = match &args.config {
            Some(path) => Some(path.clone()),
            None => default_config_path().filter(|path| path.is_file()),
        };

        let mut config = match &config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        // Flags can only switch these on
        config.debug |= args.debug;
        config.dry_run |= args.dry_run;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, GenerateError> {
        let fs_utils = FileSystemUtils::new();

        if !fs_utils.is_file(path) {
            return Err(GenerateError::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = fs_utils.read_file_to_string(path).map_err(|e| {
            GenerateError::config_with_source(
                format!("Failed to read config file: {}", path.display()),
                e,
            )
        })?;

        let file: FileConfig = toml::from_str(&content).map_err(|e| {
            GenerateError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        debug!("Loaded config file {}: {:?}", path.display(), file);

        Ok(Self {
            debug: file.debug.unwrap_or(false),
            dry_run: file.dry_run.unwrap_or(false),
        })
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(DEFAULT_CONFIG_FILE))
}
