//! User configuration.
//!
//! Read from `$XDG_CONFIG_HOME/deskcalc/config.toml`. Every key is
//! optional; a missing file means defaults.
//!
//! ```toml
//! [display]
//! digit_cap = 10
//! exponent_precision = 4
//! panel_width = 10
//! ```

use crate::calculator::DisplayPolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayPolicy,
}

impl Config {
    /// Default location of the config file, if a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("deskcalc").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config text and validate it.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let display = &self.display;
        if display.digit_cap == 0 {
            return Err(ConfigError::Invalid(
                "display.digit_cap must be at least 1".to_string(),
            ));
        }
        if display.panel_width == 0 {
            return Err(ConfigError::Invalid(
                "display.panel_width must be at least 1".to_string(),
            ));
        }
        if display.exponent_precision > 16 {
            return Err(ConfigError::Invalid(
                "display.exponent_precision must be at most 16".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_display_section() {
        let config = Config::parse("[display]\nexponent_precision = 2\n").unwrap();
        assert_eq!(config.display.exponent_precision, 2);
        assert_eq!(config.display.digit_cap, 10);
        assert_eq!(config.display.panel_width, 10);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            Config::parse("[display]\ndigit_cap = 0\n"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::parse("[display]\ndigit_cap = \"ten\"\n"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = Config::load_from(Path::new("/nonexistent/deskcalc/config.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
