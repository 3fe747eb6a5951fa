//! # wfq-cli-config
//!
//! TOML/environment configuration for the `wfq-sim` command-line front
//! end. This is ambient CLI ergonomics, not scheduling configuration —
//! the scheduler crate itself never reads a config file.
//!
//! # Configuration Sources (Priority Order)
//!
//! 1. **Environment variables**: `WFQSIM_*` override everything
//! 2. **Config file**: `wfqsim.toml` in the current directory
//! 3. **Defaults**
//!
//! # Example wfqsim.toml
//!
//! ```toml
//! tie_tolerance = 1e-9
//! default_weight = 1.0
//! log_filter = "info"
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export WFQSIM_LOG_FILTER="debug"
//! export WFQSIM_TIE_TOLERANCE="1e-6"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse the config file as TOML.
    #[error("failed to parse TOML in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A loaded or overridden value failed validation.
    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Runtime configuration for the `wfq-sim` binary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tolerance for treating two virtual finish times as equal in the
    /// schedule heap's tie-break comparison (spec default: `1e-9`).
    pub tie_tolerance: f64,
    /// Weight assigned to a flow before any arrival specifies one.
    pub default_weight: f64,
    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tie_tolerance: wfq_scheduler::DEFAULT_TIE_TOLERANCE,
            default_weight: 1.0,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration with the following priority:
    /// 1. Environment variables (`WFQSIM_*`)
    /// 2. `./wfqsim.toml`, if present
    /// 3. Defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path)?,
            None => Config::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Looks for `wfqsim.toml` in the current working directory.
    fn find_config_file() -> Option<PathBuf> {
        let local_config = PathBuf::from("wfqsim.toml");
        local_config.exists().then_some(local_config)
    }

    /// Applies `WFQSIM_*` environment overrides in place.
    fn apply_env_overrides(&mut self) {
        if let Ok(filter) = std::env::var("WFQSIM_LOG_FILTER") {
            self.log_filter = filter;
        }
        if let Ok(tol) = std::env::var("WFQSIM_TIE_TOLERANCE") {
            if let Ok(tol) = tol.parse() {
                self.tie_tolerance = tol;
            }
        }
        if let Ok(weight) = std::env::var("WFQSIM_DEFAULT_WEIGHT") {
            if let Ok(weight) = weight.parse() {
                self.default_weight = weight;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tie_tolerance < 0.0 {
            return Err(ConfigError::ValidationError(
                "tie_tolerance must be >= 0".to_string(),
            ));
        }
        if self.default_weight <= 0.0 {
            return Err(ConfigError::ValidationError(
                "default_weight must be > 0".to_string(),
            ));
        }
        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        let base_level = self
            .log_filter
            .split(',')
            .next()
            .unwrap_or(&self.log_filter);
        if !valid_levels.contains(&base_level) {
            return Err(ConfigError::ValidationError(format!(
                "log_filter must start with one of: {}",
                valid_levels.join(", ")
            )));
        }
        Ok(())
    }
}
