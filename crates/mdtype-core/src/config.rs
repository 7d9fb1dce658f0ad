//! Demo configuration
//!
//! Loaded from `config.toml` in the user's config directory. Every field is
//! optional; anything left out falls back to the defaults in
//! [`crate::constants`]. Command-line flags are layered on top through
//! [`ConfigOverrides`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::timing;
use crate::error::{ConfigError, Result};
use crate::paths;

/// Light or dark page theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{}' (expected light or dark)", other)),
        }
    }
}

/// Effective demo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Milliseconds between revealed characters
    pub typing_interval_ms: u64,
    /// Milliseconds for the reveal and scroll handler throttles
    pub throttle_ms: u64,
    /// Initial theme
    pub theme: ThemeMode,
    /// Whether math spans are rendered on start
    pub math: bool,
    /// JSON document to show instead of the built-in answer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            typing_interval_ms: timing::TYPING_INTERVAL.as_millis() as u64,
            throttle_ms: timing::HANDLER_THROTTLE.as_millis() as u64,
            theme: ThemeMode::default(),
            math: true,
            document: None,
        }
    }
}

impl DemoConfig {
    /// Load configuration
    ///
    /// With an explicit path the file must exist. Without one, the default
    /// location is tried and a missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = paths::config_file();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    debug!(path = %path.display(), "No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load and parse a specific config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Render as TOML (used by `mdtype config`)
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_interval_ms)
    }

    pub fn throttle_delay(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

/// Values supplied on the command line; `None` keeps the file value
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub typing_interval_ms: Option<u64>,
    pub throttle_ms: Option<u64>,
    pub theme: Option<ThemeMode>,
    pub disable_math: bool,
    pub document: Option<PathBuf>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut DemoConfig) {
        if let Some(ms) = self.typing_interval_ms {
            config.typing_interval_ms = ms;
        }
        if let Some(ms) = self.throttle_ms {
            config.throttle_ms = ms;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if self.disable_math {
            config.math = false;
        }
        if self.document.is_some() {
            config.document = self.document;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.typing_interval(), Duration::from_millis(5));
        assert_eq!(config.throttle_delay(), Duration::from_millis(50));
        assert_eq!(config.theme, ThemeMode::Light);
        assert!(config.math);
        assert!(config.document.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"dark\"\nthrottle_ms = 80").unwrap();

        let config = DemoConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.throttle_ms, 80);
        assert_eq!(config.typing_interval_ms, 5);
        assert!(config.math);
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"sepia\"").unwrap();

        let err = DemoConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
        assert!(err.to_string().contains("invalid config"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DemoConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides_win() {
        let mut config = DemoConfig::default();
        ConfigOverrides {
            typing_interval_ms: Some(20),
            theme: Some(ThemeMode::Dark),
            disable_math: true,
            ..Default::default()
        }
        .apply(&mut config);

        assert_eq!(config.typing_interval_ms, 20);
        assert_eq!(config.throttle_ms, 50);
        assert_eq!(config.theme, ThemeMode::Dark);
        assert!(!config.math);
    }

    #[test]
    fn test_toml_output_reloads() {
        let config = DemoConfig {
            theme: ThemeMode::Dark,
            ..Default::default()
        };
        let rendered = config.to_toml_string().unwrap();
        assert!(rendered.contains("theme = \"dark\""));
        assert_eq!(toml::from_str::<DemoConfig>(&rendered).unwrap(), config);
    }

    #[test]
    fn test_theme_mode_parsing_and_toggle() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert!("sepia".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle().to_string(), "light");
    }
}
