//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::theme::Theme;

/// Environment variable overriding the default session directory.
pub const SESSION_DIR_ENV: &str = "TICTACTOE_SESSION_DIR";

/// Configuration for the game binary, read from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", strip_option)]
pub struct AppConfig {
    /// Theme used when a session starts.
    #[serde(default)]
    theme: Theme,

    /// Directory of the session store. Resolved at startup when unset.
    #[serde(default)]
    session_dir: Option<PathBuf>,

    /// File receiving logs while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            session_dir: None,
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(theme = %config.theme, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Session directory: the configured one, else [`default_session_dir`].
    #[instrument(skip(self))]
    pub fn resolve_session_dir(&self) -> PathBuf {
        self.session_dir.clone().unwrap_or_else(default_session_dir)
    }
}

/// Default session directory.
///
/// `$TICTACTOE_SESSION_DIR`, else `$XDG_RUNTIME_DIR/tictactoe` (emptied at
/// logout), else `tictactoe` under the system temp directory.
#[instrument]
pub fn default_session_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(SESSION_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    let base = std::env::var_os("XDG_RUNTIME_DIR")
        .filter(|d| !d.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    base.join("tictactoe")
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
