// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Codec error types

use thiserror::Error;

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur when invoking a codec
#[derive(Error, Debug)]
pub enum CodecError {
    /// Compression operation failed
    #[error("compression failed: {0}")]
    CompressionFailed(String),

    /// Decompression operation failed
    #[error("decompression failed: {0}")]
    DecompressionFailed(String),

    /// A tuning option is out of range for the algorithm
    #[error("invalid codec option: {0}")]
    InvalidOption(String),

    /// Algorithm name not in the supported set
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// I/O error surfaced by the underlying encoder
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    /// Create a compression failed error
    pub fn compression_failed<S: Into<String>>(msg: S) -> Self {
        CodecError::CompressionFailed(msg.into())
    }

    /// Create a decompression failed error
    pub fn decompression_failed<S: Into<String>>(msg: S) -> Self {
        CodecError::DecompressionFailed(msg.into())
    }

    /// Create an invalid option error
    pub fn invalid_option<S: Into<String>>(msg: S) -> Self {
        CodecError::InvalidOption(msg.into())
    }

    /// Create an unknown algorithm error
    pub fn unknown_algorithm<S: Into<String>>(name: S) -> Self {
        CodecError::UnknownAlgorithm(name.into())
    }

    /// Check if this is an invalid option error
    pub fn is_invalid_option(&self) -> bool {
        matches!(self, CodecError::InvalidOption(_))
    }
}
