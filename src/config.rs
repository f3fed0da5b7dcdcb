//! Configuration loading.
//!
//! `ledcalc` reads an optional TOML file from the user configuration
//! directory. Every field has a default, so a missing file is not an
//! error; a file that exists but cannot be read or parsed is.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Digits on the canonical panel.
pub const DEFAULT_DISPLAY_WIDTH: usize = 9;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("display_width must be at least 1")]
    ZeroWidth,
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of digits on the panel.
    pub display_width: usize,
    /// Drive color of the LEDs.
    pub color: [u8; 3],
    /// Brightness, `0.0` to `1.0`.
    pub brightness: f32,
    /// Draw the panel as ASCII art after every key.
    pub panel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_width: DEFAULT_DISPLAY_WIDTH,
            color: [0, 255, 0],
            brightness: 0.9,
            panel: false,
        }
    }
}

impl Config {
    /// The default configuration file location,
    /// `<config-dir>/ledcalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ledcalc").join("config.toml"))
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist; the default location falls back to the
    /// defaults when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.display_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.display_width, 9);
        assert_eq!(config.color, [0, 255, 0]);
        assert_eq!(config.brightness, 0.9);
        assert!(!config.panel);
    }

    #[test]
    fn test_partial_file_keeps_remaining_defaults() {
        let config: Config = toml::from_str("display_width = 4").unwrap();
        assert_eq!(config.display_width, 4);
        assert_eq!(config.color, [0, 255, 0]);
    }

    #[test]
    fn test_full_file() {
        let config: Config = toml::from_str(
            "display_width = 6\ncolor = [255, 0, 0]\nbrightness = 0.5\npanel = true",
        )
        .unwrap();
        assert_eq!(config.display_width, 6);
        assert_eq!(config.color, [255, 0, 0]);
        assert_eq!(config.brightness, 0.5);
        assert!(config.panel);
    }

    #[test]
    fn test_zero_width_rejected() {
        let config: Config = toml::from_str("display_width = 0").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::ZeroWidth)));
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let missing = Path::new("/nonexistent/ledcalc/config.toml");
        assert!(matches!(
            Config::load(Some(missing)),
            Err(ConfigError::Read { .. })
        ));
    }
}
