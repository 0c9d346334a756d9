//! Configuration loading and management for distill.
//!
//! Loads defaults from `distill.toml` with an environment variable override for the log level.
//! A missing file is not an error: built-in defaults apply.

use crate::summary::SummarizeOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILE: &str = "distill.toml";
const LOG_ENV: &str = "DISTILL_LOG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "warn" or "distill=debug"
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Option values used when the command line does not set them
    #[serde(default)]
    pub defaults: SummarizeOptions,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location (distill.toml in cwd or home),
    /// falling back to built-in defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                let mut config = Config::default();
                config.apply_env_overrides();
                Ok(config)
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var(LOG_ENV) {
            if !level.trim().is_empty() {
                self.logging.level = level;
            }
        }
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from(CONFIG_FILE);
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config").join("distill").join(CONFIG_FILE);
            if home_config.exists() {
                return Some(home_config);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormat;
    use crate::modes::Mode;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            [defaults]
            mode = "executive"
            format = "outline"
            max_length = 120
            language = "fr"
            abstraction_level = 4
            include_quotes = true
            include_stats = true
            focus = "budget"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.defaults.mode, Mode::Executive);
        assert_eq!(config.defaults.format, OutputFormat::Outline);
        assert_eq!(config.defaults.max_length, 120);
        assert_eq!(config.defaults.language, "fr");
        assert_eq!(config.defaults.abstraction_level, 4);
        assert!(config.defaults.include_quotes);
        assert!(config.defaults.include_stats);
        assert_eq!(config.defaults.focus.as_deref(), Some("budget"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[defaults]\nmode = \"brief\"\n").unwrap();
        assert_eq!(config.defaults.mode, Mode::Brief);
        assert_eq!(config.defaults.format, OutputFormat::Markdown);
        assert_eq!(config.defaults.abstraction_level, 3);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_mode_is_a_parse_error() {
        let err = Config::parse("[defaults]\nmode = \"haiku\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nformat = \"json\"").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.defaults.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }
}
