//! Tracing/logging initialization.
//!
//! Configuration comes from the environment:
//! - `RUST_LOG`: filter directives (default `info`)
//! - `CATALOG_LOG_FORMAT`: `json` (default) or `pretty`

use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const FILTER_ENV: &str = "RUST_LOG";
pub const FORMAT_ENV: &str = "CATALOG_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format `{0}` (expected `json` or `pretty`)")]
    UnknownFormat(String),

    #[error("invalid log filter `{filter}`: {reason}")]
    InvalidFilter { filter: String, reason: String },
}

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Multi-line, human-oriented output for local development.
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to defaults; set but malformed keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let filter = lookup(FILTER_ENV).unwrap_or_else(|| DEFAULT_FILTER.to_string());
        EnvFilter::try_new(&filter).map_err(|e| ConfigError::InvalidFilter {
            filter: filter.clone(),
            reason: e.to_string(),
        })?;

        let format = match lookup(FORMAT_ENV) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self { filter, format })
    }
}

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops). A malformed
/// environment falls back to the defaults and reports why.
pub fn init() {
    match ObservabilityConfig::from_env() {
        Ok(config) => init_with(&config),
        Err(err) => {
            init_with(&ObservabilityConfig::default());
            ::tracing::warn!(error = %err, "invalid observability config; using defaults");
        }
    }
}

/// Initialize tracing/logging with an explicit configuration.
pub fn init_with(config: &ObservabilityConfig) {
    let filter =
        EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .try_init(),
    };
}

/// Install a subscriber whose output is captured per test.
///
/// Honors `RUST_LOG` when set, otherwise logs at `debug`.
pub fn init_for_tests() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ObservabilityConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ObservabilityConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = config_from(&[
            (FILTER_ENV, "streaming_catalog=debug"),
            (FORMAT_ENV, "Pretty"),
        ])
        .unwrap();
        assert_eq!(config.filter, "streaming_catalog=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = config_from(&[(FORMAT_ENV, " XML")]).unwrap_err();
        assert_eq!(err, ConfigError::UnknownFormat(" XML".to_string()));
    }

    #[test]
    fn rejects_malformed_filter() {
        let err = config_from(&[(FILTER_ENV, "streaming_catalog=loud")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFilter { .. }));
    }

    #[test]
    fn init_is_idempotent() {
        init_for_tests();
        assert!(::tracing::dispatcher::has_been_set());

        // The global default is taken; later installs must quietly do nothing.
        init_for_tests();
        init_with(&ObservabilityConfig::default());
        init_with(&ObservabilityConfig {
            filter: "debug".to_string(),
            format: LogFormat::Pretty,
        });
        assert!(::tracing::dispatcher::has_been_set());
    }
}
