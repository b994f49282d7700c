//! Application configuration
//!
//! Optional JSON file at `$TRADEBUILT_CONFIG`, otherwise
//! `<config dir>/config.json`. Every field has a default, so a partial file
//! only overrides what it names. The file is read once at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tradecore::config::{config_file, read_json};
use tradecore::{CoreError, Result};

use crate::catalog::{default_sections, CalculatorSection};

pub const APP_NAME: &str = "tradebuilt";
pub const CONFIG_ENV: &str = "TRADEBUILT_CONFIG";
const CONFIG_FILE: &str = "config.json";

/// Splash overlay timings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    pub enabled: bool,
    pub fade_in_ms: u64,
    pub hold_ms: u64,
    pub fade_out_ms: u64,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fade_in_ms: 1000,
            hold_ms: 3000,
            fade_out_ms: 1000,
        }
    }
}

impl SplashConfig {
    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }

    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }

    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub splash: SplashConfig,
    pub sections: Vec<CalculatorSection>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            splash: SplashConfig::default(),
            sections: default_sections(),
        }
    }
}

/// Where the running configuration came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
}

impl AppConfig {
    /// Read a config file. Missing fields take their defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        read_json(path)
    }

    /// Load from the standard location. Never fails: a missing file means
    /// defaults, a broken one is logged and also means defaults.
    pub fn load() -> (Self, ConfigSource) {
        let path = config_path();
        match Self::load_from(&path) {
            Ok(config) => (config, ConfigSource::File(path)),
            Err(CoreError::NotFound(_)) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                (Self::default(), ConfigSource::Defaults)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable config");
                (Self::default(), ConfigSource::Defaults)
            }
        }
    }
}

pub fn config_path() -> PathBuf {
    config_file(APP_NAME, CONFIG_FILE, CONFIG_ENV)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CalculatorKind;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.splash.enabled);
        assert_eq!(config.splash.fade_in(), Duration::from_secs(1));
        assert_eq!(config.splash.hold(), Duration::from_secs(3));
        assert_eq!(config.splash.fade_out(), Duration::from_secs(1));
        assert_eq!(config.sections, default_sections());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"splash": {"hold_ms": 500}}"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.splash.hold_ms, 500);
        assert_eq!(config.splash.fade_in_ms, 1000);
        assert!(config.splash.enabled);
        assert_eq!(config.sections, default_sections());
    }

    #[test]
    fn test_custom_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"sections": [{"title": "Temps", "entries": [
                {"title": "ΔT", "icon": "delta", "kind": "delta_t"},
                {"title": "Superheat", "icon": "thermometer", "description": "Fixed orifice"}
            ]}]}"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.sections.len(), 1);
        assert_eq!(config.sections[0].entries[0].kind, CalculatorKind::DeltaT);
        assert_eq!(config.sections[0].entries[1].kind, CalculatorKind::Placeholder);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(AppConfig::load_from(&path), Err(CoreError::NotFound(_))));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"splash": {"hold_ms": "long"}}"#).unwrap();
        assert!(matches!(AppConfig::load_from(&path), Err(CoreError::Json(_))));
    }
}
