// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Configuration validation
//!
//! Structural checks that must pass before a pipeline is built: patterns
//! must compile, the algorithm must have a derivable output suffix, log
//! settings must name known levels and formats.

use crate::error::{ConfigError, ConfigResult};
use crate::schema::{CompressionSettings, Config, LogSettings};

/// Validator for configuration settings
pub trait Validator {
    /// Check the settings for structural defects
    fn validate(&self) -> ConfigResult<()>;
}

impl Validator for Config {
    fn validate(&self) -> ConfigResult<()> {
        self.compression.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

impl Validator for CompressionSettings {
    fn validate(&self) -> ConfigResult<()> {
        for pattern in &self.patterns {
            if let Err(e) = glob::Pattern::new(pattern) {
                return Err(ConfigError::invalid_value(
                    "compression.patterns",
                    format!("malformed glob {:?}: {}", pattern, e),
                ));
            }
        }

        match &self.output_extension {
            Some(ext) if ext.trim().is_empty() => {
                return Err(ConfigError::invalid_value(
                    "compression.output_extension",
                    "extension must not be empty",
                ));
            }
            None if self.algorithm.default_extension().is_none() => {
                return Err(ConfigError::MissingRequired(format!(
                    "compression.output_extension (algorithm {} has no default suffix)",
                    self.algorithm
                )));
            }
            _ => {}
        }

        Ok(())
    }
}

impl Validator for LogSettings {
    fn validate(&self) -> ConfigResult<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.as_str()) {
            return Err(ConfigError::invalid_value(
                "log.level",
                format!("must be one of: {}", valid_levels.join(", ")),
            ));
        }

        let valid_formats = ["pretty", "compact", "json"];
        if !valid_formats.contains(&self.format.as_str()) {
            return Err(ConfigError::invalid_value(
                "log.format",
                format!("must be one of: {}", valid_formats.join(", ")),
            ));
        }

        Ok(())
    }
}
