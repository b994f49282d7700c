//! Configuration file helpers for TradeBuilt apps
//!
//! Apps only ever read their configuration; nothing here writes to disk.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("File not found: {0}")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, CoreError>;

/// Read and deserialize a JSON file.
///
/// A missing file is reported as [`CoreError::NotFound`] so callers can
/// tell "no config" apart from "broken config".
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Get the config directory for a TradeBuilt app
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("com", "tradebuilt", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve a config file path: `env_var` wins when set and non-empty,
/// otherwise `<config dir>/<file_name>`.
pub fn config_file(app_name: &str, file_name: &str, env_var: &str) -> PathBuf {
    match std::env::var(env_var) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => config_dir(app_name).join(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_read_json_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        std::fs::write(&path, r#"{"name": "probe", "count": 3}"#).unwrap();
        let sample: Sample = read_json(&path).unwrap();
        assert_eq!(sample, Sample { name: "probe".into(), count: 3 });
    }

    #[test]
    fn test_read_json_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        match read_json::<Sample>(&path) {
            Err(CoreError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_read_json_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(read_json::<Sample>(&path), Err(CoreError::Json(_))));
    }

    #[test]
    fn test_config_file_env_override() {
        let var = "TRADECORE_TEST_CONFIG_OVERRIDE";
        std::env::set_var(var, "/tmp/custom.json");
        assert_eq!(config_file("tradecore-test", "config.json", var), PathBuf::from("/tmp/custom.json"));
        std::env::remove_var(var);
        let default = config_file("tradecore-test", "config.json", var);
        assert!(default.ends_with("config.json"));
    }
}
