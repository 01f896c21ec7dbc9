// Allow large error types from premortem's API design
#![allow(clippy::result_large_err)]

//! Runtime configuration loaded with premortem.
//!
//! Sources are loaded in order from lowest to highest priority:
//!
//! 1. **Defaults** - `Config::default()`
//! 2. **Project config** - `fpcore.toml` (optional)
//! 3. **Environment variables** - `FPCORE_*` prefix (highest priority)
//!
//! Validation failures from every source are accumulated and returned
//! together as `ConfigErrors`.
//!
//! # Testing
//!
//! ```
//! use fpcore::app::config::load_config_with;
//! use premortem::MockEnv;
//!
//! let env = MockEnv::new().with_env("FPCORE_LOG", "debug");
//! let config = load_config_with(&env).expect("failed to load config");
//! assert_eq!(config.log_level(), "debug");
//! ```

use std::time::Duration;

use premortem::config::Config as Layered;
use premortem::prelude::*;
use serde::{Deserialize, Serialize};

/// Valid log levels for configuration validation.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Project config file, relative to the working directory.
pub const CONFIG_FILE: &str = "fpcore.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Explicit log level; overrides `verbose` when set
    #[serde(default)]
    pub log_level: Option<String>,

    /// Verbosity level for logging
    #[serde(default)]
    pub verbose: u8,

    /// Timeout applied by `Deferred::configured`, e.g. `"250ms"`
    #[serde(default, with = "humantime_serde")]
    pub deferred_timeout: Option<Duration>,
}

impl Config {
    /// Get the log filter, from the explicit level or the verbosity
    pub fn log_level(&self) -> String {
        if let Some(level) = &self.log_level {
            return level.to_lowercase();
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            2 => "trace",
            _ => "trace,tokio=debug",
        }
        .to_string()
    }
}

impl Validate for Config {
    fn validate(&self) -> ConfigValidation<()> {
        let mut errors = Vec::new();

        if let Some(level) = &self.log_level {
            if !VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
                errors.push(ConfigError::ValidationError {
                    path: "log_level".to_string(),
                    source_location: None,
                    value: Some(level.clone()),
                    message: format!("log_level must be one of: {}", VALID_LOG_LEVELS.join(", ")),
                });
            }
        }

        if self.deferred_timeout == Some(Duration::ZERO) {
            errors.push(ConfigError::ValidationError {
                path: "deferred_timeout".to_string(),
                source_location: None,
                value: Some("0s".to_string()),
                message: "deferred_timeout must be greater than 0".to_string(),
            });
        }

        match ConfigErrors::from_vec(errors) {
            Some(errs) => Validation::Failure(errs),
            None => Validation::Success(()),
        }
    }
}

/// Load configuration from all sources using real I/O.
///
/// The returned wrapper derefs to [`Config`].
pub fn load_config() -> Result<Layered<Config>, ConfigErrors> {
    load_config_with(&RealEnv)
}

/// Load configuration with a custom environment (`RealEnv` for production,
/// `MockEnv` for tests).
pub fn load_config_with<E: ConfigEnv>(env: &E) -> Result<Layered<Config>, ConfigErrors> {
    Layered::<Config>::builder()
        .source(Defaults::from(Config::default()))
        .source(Toml::file(CONFIG_FILE).optional().named("project config"))
        .source(
            Env::prefix("FPCORE_")
                .map("LOG", "log_level")
                .map("VERBOSE", "verbose")
                .map("DEFERRED_TIMEOUT", "deferred_timeout"),
        )
        .build_with_env(env)
}
