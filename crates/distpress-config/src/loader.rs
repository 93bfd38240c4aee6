// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Configuration loading
//!
//! TOML file plus `DISTPRESS_*` environment-variable overrides, applied in
//! that order so the environment always wins. A missing file is only an
//! error when the caller asked for that specific file.

use crate::error::{ConfigError, ConfigResult};
use crate::schema::Config;
use crate::validation::Validator;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "DISTPRESS_";

/// Configuration loader
pub struct ConfigLoader {
    validate: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        ConfigLoader { validate: true }
    }

    /// Create a loader without validation
    pub fn without_validation() -> Self {
        ConfigLoader { validate: false }
    }

    /// Load configuration from a file that must exist, then apply
    /// environment overrides
    pub async fn load_with_overrides<P: AsRef<Path>>(&self, path: P) -> ConfigResult<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).await?;
        info!("loaded configuration file: {}", path.display());

        let mut config: Config = toml::from_str(&content)?;
        apply_env_overrides(&mut config)?;
        self.finish(config)
    }

    /// Load configuration from a file that may be absent (absent ⇒
    /// defaults), then apply environment overrides
    pub async fn load_optional<P: AsRef<Path>>(&self, path: P) -> ConfigResult<Config> {
        let path = path.as_ref();
        if path.exists() {
            return self.load_with_overrides(path).await;
        }

        debug!(
            "no configuration file at {}, using defaults",
            path.display()
        );
        let mut config = Config::default();
        apply_env_overrides(&mut config)?;
        self.finish(config)
    }

    /// Parse configuration from a TOML string (no environment overrides)
    pub fn load_from_str(&self, content: &str) -> ConfigResult<Config> {
        let config: Config = toml::from_str(content)?;
        self.finish(config)
    }

    fn finish(&self, config: Config) -> ConfigResult<Config> {
        if self.validate {
            config.validate()?;
        }
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply `DISTPRESS_*` environment overrides to a configuration
///
/// Recognized variables: `DISTPRESS_ENABLED`, `DISTPRESS_VERBOSE`,
/// `DISTPRESS_PATTERNS` (comma-separated), `DISTPRESS_SIZE_THRESHOLD`,
/// `DISTPRESS_ALGORITHM`, `DISTPRESS_OUTPUT_EXTENSION`,
/// `DISTPRESS_DELETE_ORIGINAL`, `DISTPRESS_LOG_LEVEL`,
/// `DISTPRESS_LOG_FORMAT`.
pub fn apply_env_overrides(config: &mut Config) -> ConfigResult<()> {
    if let Some(value) = env_var("ENABLED") {
        config.compression.enabled = parse_bool("DISTPRESS_ENABLED", &value)?;
    }
    if let Some(value) = env_var("VERBOSE") {
        config.compression.verbose = parse_bool("DISTPRESS_VERBOSE", &value)?;
    }
    if let Some(value) = env_var("PATTERNS") {
        config.compression.patterns = value
            .split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
    }
    if let Some(value) = env_var("SIZE_THRESHOLD") {
        config.compression.size_threshold = value.parse().map_err(|e| {
            ConfigError::env_var("DISTPRESS_SIZE_THRESHOLD", &value, format!("{}", e))
        })?;
    }
    if let Some(value) = env_var("ALGORITHM") {
        config.compression.algorithm = value
            .parse()
            .map_err(|e| ConfigError::env_var("DISTPRESS_ALGORITHM", &value, format!("{}", e)))?;
    }
    if let Some(value) = env_var("OUTPUT_EXTENSION") {
        config.compression.output_extension = Some(value);
    }
    if let Some(value) = env_var("DELETE_ORIGINAL") {
        config.compression.delete_original = parse_bool("DISTPRESS_DELETE_ORIGINAL", &value)?;
    }
    if let Some(value) = env_var("LOG_LEVEL") {
        config.log.level = value;
    }
    if let Some(value) = env_var("LOG_FORMAT") {
        config.log.format = value;
    }
    Ok(())
}

fn env_var(suffix: &str) -> Option<String> {
    std::env::var(format!("{}{}", ENV_PREFIX, suffix)).ok()
}

fn parse_bool(variable: &str, value: &str) -> ConfigResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::env_var(
            variable,
            value,
            "expected a boolean (true/false/1/0/yes/no/on/off)",
        )),
    }
}
