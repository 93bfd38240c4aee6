// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error reading the configuration file
    #[error("IO error reading configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// TOML syntax or type error
    #[error("failed to parse TOML configuration: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration file does not exist
    #[error("configuration file not found at path: {}", .0.display())]
    FileNotFound(PathBuf),

    /// An environment override could not be parsed
    #[error("environment variable parsing error: {variable}={value}: {reason}")]
    EnvVarParsing {
        /// Name of the offending variable
        variable: String,
        /// The raw value that failed to parse
        value: String,
        /// Why parsing failed
        reason: String,
    },

    /// A field holds a structurally invalid value
    #[error("invalid configuration value for field '{field}': {reason}")]
    InvalidValue {
        /// Dotted path of the field
        field: String,
        /// Why the value is invalid
        reason: String,
    },

    /// A required field is absent
    #[error("missing required configuration field: {0}")]
    MissingRequired(String),
}

impl ConfigError {
    /// Create an invalid value error
    pub fn invalid_value<F: Into<String>, R: Into<String>>(field: F, reason: R) -> Self {
        ConfigError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an environment variable parsing error
    pub fn env_var<V: Into<String>, W: Into<String>, R: Into<String>>(
        variable: V,
        value: W,
        reason: R,
    ) -> Self {
        ConfigError::EnvVarParsing {
            variable: variable.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_message() {
        let err = ConfigError::invalid_value("compression.algorithm", "unknown algorithm: zstd");
        assert_eq!(
            err.to_string(),
            "invalid configuration value for field 'compression.algorithm': unknown algorithm: zstd"
        );
    }

    #[test]
    fn missing_required_message() {
        let err = ConfigError::MissingRequired("compression.output_extension".to_string());
        assert_eq!(
            err.to_string(),
            "missing required configuration field: compression.output_extension"
        );
    }
}
