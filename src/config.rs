//! Configuration management for autodeploy
//!
//! Settings are loaded from environment variables with sensible defaults. CLI
//! flags override individual values after loading.
//!
//! # Environment Variables
//!
//! - `AUTODEPLOY_FETCH_TIMEOUT`: Archive download timeout in seconds - default: "10"
//! - `AUTODEPLOY_OUTPUT_DIR`: Directory receiving `deployment_<name>/` - default: "."
//! - `AUTODEPLOY_LOG_LEVEL`: Logging level - default: "info"
//! - `AUTODEPLOY_LOG_JSON`: Emit JSON log lines (true|false) - default: "false"
//!
//! # Example
//!
//! ```no_run
//! use autodeploy::AutodeployConfig;
//!
//! let config = AutodeployConfig::default();
//! config.validate().expect("Invalid configuration");
//! println!("{}", config);
//! ```

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
const MAX_FETCH_TIMEOUT_SECS: u64 = 120;
const DEFAULT_OUTPUT_DIR: &str = ".";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Runtime settings for the CLI shell and the repository prober
#[derive(Debug, Clone)]
pub struct AutodeployConfig {
    /// Archive download timeout in seconds
    pub fetch_timeout_secs: u64,

    /// Base directory for written artifacts
    pub output_dir: PathBuf,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Emit JSON log lines
    pub log_json: bool,
}

impl Default for AutodeployConfig {
    /// Loads from `AUTODEPLOY_*` environment variables, falling back to defaults
    fn default() -> Self {
        let fetch_timeout_secs = env::var("AUTODEPLOY_FETCH_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS);

        let output_dir = env::var("AUTODEPLOY_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let log_level = env::var("AUTODEPLOY_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = env::var("AUTODEPLOY_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            fetch_timeout_secs,
            output_dir,
            log_level,
            log_json,
        }
    }
}

impl AutodeployConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the timeout is outside 1..=120 seconds or the
    /// log level is unknown.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed(
                "Fetch timeout must be at least 1 second".to_string(),
            ));
        }
        if self.fetch_timeout_secs > MAX_FETCH_TIMEOUT_SECS {
            return Err(ConfigError::ValidationFailed(format!(
                "Fetch timeout cannot exceed {} seconds",
                MAX_FETCH_TIMEOUT_SECS
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Directory the artifacts for `app_name` are written to
    pub fn deployment_dir(&self, app_name: &str) -> PathBuf {
        let safe_name = app_name.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
        self.output_dir.join(format!("deployment_{}", safe_name))
    }
}

impl fmt::Display for AutodeployConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Autodeploy Configuration:")?;
        writeln!(f, "  Fetch Timeout: {}s", self.fetch_timeout_secs)?;
        writeln!(f, "  Output Dir: {}", self.output_dir.display())?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Log JSON: {}", self.log_json)?;
        Ok(())
    }
}
