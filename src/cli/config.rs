//! Configuration file handling
//!
//! The config file is optional JSON. Every key has a default:
//! - `mismatch_policy`: `reject` (default), `warn` or `ignore`
//! - `log_accepted`: log accepted semantics too (default false)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use super::errors::{CliError, CliResult};

/// What the CLI does with a semantic mismatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MismatchPolicy {
    /// Report and exit non-zero
    #[default]
    Reject,
    /// Report and log a warning, exit zero
    Warn,
    /// Report only
    Ignore,
}

impl MismatchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MismatchPolicy::Reject => "reject",
            MismatchPolicy::Warn => "warn",
            MismatchPolicy::Ignore => "ignore",
        }
    }
}

impl fmt::Display for MismatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub mismatch_policy: MismatchPolicy,

    #[serde(default)]
    pub log_accepted: bool,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON text
    pub fn from_json(content: &str) -> CliResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Loads the given file, or the defaults when no path is given
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config.mismatch_policy, MismatchPolicy::Reject);
        assert!(!config.log_accepted);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_policy_parsed() {
        let config = Config::from_json(r#"{"mismatch_policy": "warn", "log_accepted": true}"#)
            .unwrap();
        assert_eq!(config.mismatch_policy, MismatchPolicy::Warn);
        assert!(config.log_accepted);
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let err = Config::from_json(r#"{"mismatch_policy": "maybe"}"#).unwrap_err();
        assert_eq!(err.code_str(), "TILESEM_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Config::from_json(r#"{"strict": true}"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tilesem.json");
        fs::write(&path, r#"{"mismatch_policy": "ignore"}"#).unwrap();

        let config = Config::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.mismatch_policy, MismatchPolicy::Ignore);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.message().contains("Failed to read config"));
    }
}
