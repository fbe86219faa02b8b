use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::{Config, StoreKind};

/// Upper bound on `aggregator.max_concurrency`.
pub const MAX_CONCURRENCY: usize = 64;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Server host cannot be empty")]
    EmptyHost,

    #[error("Invalid server port: 0")]
    InvalidPort,

    #[error("Invalid cache ttl_ms: {0}. Must be positive")]
    InvalidTtl(u64),

    #[error("Cache key cannot be empty")]
    EmptyCacheKey,

    #[error("File store requires cache.path")]
    MissingStorePath,

    #[error("Invalid max_concurrency: {0}. Must be between 1 and 64")]
    InvalidMaxConcurrency(usize),

    #[error("Invalid {field}: {value}. Must be positive")]
    InvalidTimeout { field: &'static str, value: u64 },

    #[error("Invalid max_winners: {0}. Must be at least 1")]
    InvalidMaxWinners(usize),

    #[error("Invalid {field}: {value}. Must be an http(s) URL")]
    InvalidUrl { field: &'static str, value: String },

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. spotlight.yaml (optional)
    /// 3. spotlight.local.yaml (optional, local overrides)
    /// 4. Environment variables (SPOTLIGHT_* prefix, `__` for nesting)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file("spotlight.yaml"))
            .merge(Yaml::file("spotlight.local.yaml"))
            .merge(Env::prefixed("SPOTLIGHT_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring env overrides
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("SPOTLIGHT_").split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.server.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if config.server.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        if config.cache.ttl_ms == 0 {
            return Err(ConfigError::InvalidTtl(config.cache.ttl_ms));
        }
        if config.cache.key.is_empty() {
            return Err(ConfigError::EmptyCacheKey);
        }
        if config.cache.store == StoreKind::File
            && config.cache.path.as_deref().map_or(true, str::is_empty)
        {
            return Err(ConfigError::MissingStorePath);
        }

        validate_url("client.base_url", &config.client.base_url)?;
        validate_timeout("client.timeout_ms", config.client.timeout_ms)?;
        validate_url("upstream.base_url", &config.upstream.base_url)?;
        validate_timeout("upstream.timeout_ms", config.upstream.timeout_ms)?;

        let max_concurrency = config.aggregator.max_concurrency;
        if max_concurrency == 0 || max_concurrency > MAX_CONCURRENCY {
            return Err(ConfigError::InvalidMaxConcurrency(max_concurrency));
        }
        validate_timeout(
            "aggregator.lookup_timeout_ms",
            config.aggregator.lookup_timeout_ms,
        )?;
        if config.aggregator.max_winners == 0 {
            return Err(ConfigError::InvalidMaxWinners(
                config.aggregator.max_winners,
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(
                config.logging.rotation.clone(),
            ));
        }

        Ok(())
    }
}

fn validate_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl {
            field,
            value: value.to_string(),
        })
    }
}

const fn validate_timeout(field: &'static str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        Err(ConfigError::InvalidTimeout { field, value })
    } else {
        Ok(())
    }
}
