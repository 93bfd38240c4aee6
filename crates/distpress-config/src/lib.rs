// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Configuration management for distpress
//!
//! This crate owns the `distpress.toml` schema with every pipeline option
//! enumerated and defaulted, a loader with `DISTPRESS_*` environment
//! overrides, and structural validation.
//!
//! # Example
//!
//! ```no_run
//! use distpress_config::{ConfigLoader, DEFAULT_CONFIG_FILE};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::new().load_optional(DEFAULT_CONFIG_FILE).await?;
//!     println!("algorithm: {}", config.compression.algorithm);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::{apply_env_overrides, ConfigLoader, ENV_PREFIX};
pub use schema::{
    CompressionSettings, Config, LogSettings, DEFAULT_CONFIG_FILE, DEFAULT_PATTERNS,
    DEFAULT_SIZE_THRESHOLD,
};
pub use validation::Validator;
