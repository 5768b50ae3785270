//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$BUILDGIT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/buildgit/config.toml`
//! 3. `~/.buildgit/config.toml`
//!
//! # Validation
//!
//! Config values are validated after parsing; unknown keys are rejected at
//! parse time.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// [status]
/// include_untracked = false
/// exclude_submodules = true
///
/// [output]
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Status query defaults
    pub status: Option<StatusConfig>,

    /// Output defaults
    pub output: Option<OutputConfig>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(output) = &self.output {
            output.validate()?;
        }
        Ok(())
    }
}

/// Which entries dirty-state queries look at.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StatusConfig {
    /// Count untracked files as changes (default: true)
    pub include_untracked: Option<bool>,

    /// Ignore submodules entirely (default: false)
    pub exclude_submodules: Option<bool>,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format ("text" or "json")
    pub format: Option<String>,
}

impl OutputConfig {
    /// Valid output formats.
    pub const VALID_FORMATS: &'static [&'static str] = &["text", "json"];

    /// Validate the output configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(format) = &self.format {
            if !Self::VALID_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid output format '{}', must be one of: {}",
                    format,
                    Self::VALID_FORMATS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[test]
    fn parses_all_sections() {
        let config: GlobalConfig = toml::from_str(
            r#"
            [status]
            include_untracked = false
            exclude_submodules = true

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        let status = config.status.unwrap();
        assert_eq!(status.include_untracked, Some(false));
        assert_eq!(status.exclude_submodules, Some(true));
        assert_eq!(config.output.unwrap().format.as_deref(), Some("json"));
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<GlobalConfig, _> = toml::from_str("colour = true");
        assert!(result.is_err());

        let result: Result<GlobalConfig, _> = toml::from_str("[status]\nuntracked = true");
        assert!(result.is_err());
    }

    #[test]
    fn invalid_format_rejected() {
        let config = GlobalConfig {
            output: Some(OutputConfig {
                format: Some("yaml".into()),
            }),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn valid_formats_accepted() {
        for format in OutputConfig::VALID_FORMATS {
            let output = OutputConfig {
                format: Some(format.to_string()),
            };
            assert!(output.validate().is_ok());
        }
    }
}
