//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$BUILDGIT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/buildgit/config.toml`
//! 3. `~/.buildgit/config.toml` (canonical location)
//!
//! A missing file is not an error; defaults apply.
//!
//! # Example
//!
//! ```no_run
//! use buildgit::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("untracked files count as changes: {}", config.status_scope().include_untracked);
//! println!("output format: {}", config.output_format());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, OutputConfig, StatusConfig};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::git::StatusScope;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "BUILDGIT_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to serialize config: {0}")]
    SerializeError(String),

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration.
///
/// Accessor methods apply defaults for anything the file leaves unset.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Path the configuration was read from (if any)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated.
    pub fn load() -> Result<Self, ConfigError> {
        let located = Self::locate(|key| std::env::var(key).ok(), dirs::home_dir());
        match located {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let global: GlobalConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        global.validate()?;

        debug!(path = %path.display(), "loaded config");
        Ok(Self {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// Find the first existing config file.
    ///
    /// `env` looks up environment variables and `home` is the user's home
    /// directory; both are injected so the search order can be tested.
    pub fn locate(env: impl Fn(&str) -> Option<String>, home: Option<PathBuf>) -> Option<PathBuf> {
        // 1. Check $BUILDGIT_CONFIG
        if let Some(path) = env(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/buildgit/config.toml
        if let Some(xdg_home) = env("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("buildgit/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.buildgit/config.toml
        if let Some(home) = home {
            let path = home.join(".buildgit/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    /// Get the canonical config path (`~/.buildgit/config.toml`).
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".buildgit/config.toml"))
    }

    /// Path the configuration was loaded from, `None` when using defaults.
    pub fn source_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Status scope for dirty-state queries.
    pub fn status_scope(&self) -> StatusScope {
        let defaults = StatusScope::default();
        let status = self.global.status.as_ref();
        StatusScope {
            include_untracked: status
                .and_then(|s| s.include_untracked)
                .unwrap_or(defaults.include_untracked),
            exclude_submodules: status
                .and_then(|s| s.exclude_submodules)
                .unwrap_or(defaults.exclude_submodules),
        }
    }

    /// Output format, "text" unless configured.
    pub fn output_format(&self) -> &str {
        self.global
            .output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .unwrap_or("text")
    }

    /// Render the effective configuration (defaults filled in) as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        let scope = self.status_scope();
        let effective = GlobalConfig {
            status: Some(StatusConfig {
                include_untracked: Some(scope.include_untracked),
                exclude_submodules: Some(scope.exclude_submodules),
            }),
            output: Some(OutputConfig {
                format: Some(self.output_format().to_string()),
            }),
        };
        toml::to_string_pretty(&effective).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }
}
