// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Configuration schema
//!
//! Every option the pipeline accepts from a `distpress.toml` file, with its
//! documented default. Runtime-only knobs (predicate closures, completion
//! callbacks, injected codecs) live on the pipeline options, not here.

use distpress_compression::{Algorithm, CodecOptions};
use serde::{Deserialize, Serialize};

/// Default selection patterns: common web asset extensions
pub const DEFAULT_PATTERNS: [&str; 5] = ["*.js", "*.mjs", "*.json", "*.css", "*.html"];

/// Default minimum size in bytes; files strictly below are never compressed
pub const DEFAULT_SIZE_THRESHOLD: u64 = 1025;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "distpress.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Compression pipeline settings
    pub compression: CompressionSettings,

    /// Logging settings
    pub log: LogSettings,
}

/// Settings for the selection-and-compression pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompressionSettings {
    /// Whether the pipeline runs at all (default: true)
    pub enabled: bool,

    /// Whether the aggregate report is rendered (default: true)
    pub verbose: bool,

    /// Glob patterns selecting files to compress
    /// (default: common web asset extensions)
    pub patterns: Vec<String>,

    /// Minimum file size in bytes; strictly smaller files are never
    /// compressed (default: 1025)
    pub size_threshold: u64,

    /// Compression algorithm (default: gzip)
    pub algorithm: Algorithm,

    /// Output suffix appended to each compressed file. Defaults to the
    /// algorithm's conventional suffix; required for the deflate variants,
    /// which have none.
    pub output_extension: Option<String>,

    /// Remove each original file once its bytes are read (default: false)
    pub delete_original: bool,

    /// Codec tuning overrides, shallow-merged over the algorithm's
    /// maximum-compression baseline (default: empty)
    pub codec_options: CodecOptions,
}

impl Default for CompressionSettings {
    fn default() -> Self {
        CompressionSettings {
            enabled: true,
            verbose: true,
            patterns: DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
            size_threshold: DEFAULT_SIZE_THRESHOLD,
            algorithm: Algorithm::Gzip,
            output_extension: None,
            delete_original: false,
            codec_options: CodecOptions::new(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogSettings {
    /// Log level: trace, debug, info, warn or error (default: info)
    pub level: String,

    /// Log format: pretty, compact or json (default: pretty)
    pub format: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_surface() {
        let settings = CompressionSettings::default();
        assert!(settings.enabled);
        assert!(settings.verbose);
        assert_eq!(settings.size_threshold, 1025);
        assert_eq!(settings.algorithm, Algorithm::Gzip);
        assert_eq!(settings.output_extension, None);
        assert!(settings.codec_options.is_empty());
        assert!(!settings.delete_original);
        assert_eq!(settings.patterns.len(), 5);
        assert!(settings.patterns.contains(&"*.js".to_string()));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default();
        let rendered = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [compression]
            algorithm = "brotli"
            size_threshold = 4096
            "#,
        )
        .unwrap();

        assert_eq!(config.compression.algorithm, Algorithm::Brotli);
        assert_eq!(config.compression.size_threshold, 4096);
        // untouched fields keep their defaults
        assert!(config.compression.enabled);
        assert_eq!(config.compression.patterns.len(), 5);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn unknown_algorithm_fails_to_parse() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [compression]
            algorithm = "zstd"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn codec_options_parse_as_flat_table() {
        let config: Config = toml::from_str(
            r#"
            [compression]
            algorithm = "brotli"

            [compression.codec_options]
            quality = 5
            lgwin = 20
            "#,
        )
        .unwrap();

        assert_eq!(config.compression.codec_options.get("quality"), Some(5));
        assert_eq!(config.compression.codec_options.get("lgwin"), Some(20));
    }
}
