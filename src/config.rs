//! User preferences loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Preferences for the interactive game.
///
/// Loaded from `noughts.toml` in the working directory when present.
/// Every field has a default, so the file is optional and may name
/// only the fields it wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Show the move list newest entry first.
    #[serde(default)]
    newest_first: bool,

    /// File the interactive game writes its tracing output to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            newest_first: false,
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// File name looked up in the working directory when no explicit
    /// `--config` path is given.
    pub const DEFAULT_PATH: &'static str = "noughts.toml";

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("failed to read config file: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("failed to parse config file: {e}")))?;
        info!(newest_first = config.newest_first, "Config loaded");
        Ok(config)
    }

    /// Resolves the effective configuration.
    ///
    /// An explicit path must load or the error propagates. Without one,
    /// [`Config::DEFAULT_PATH`] is used when it exists, and built-in
    /// defaults apply otherwise; a missing default file is not an
    /// error.
    #[instrument]
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(Self::DEFAULT_PATH);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(mut self, newest_first: bool, log_file: Option<PathBuf>) -> Self {
        if newest_first {
            self.newest_first = true;
        }
        if let Some(path) = log_file {
            self.log_file = path;
        }
        self
    }
}

/// Configuration error with caller location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line where the error was created.
    pub line: u32,
    /// Source file where the error was created.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
