// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Pipeline error types
//!
//! Two layers: [`PipelineError`] fails the whole run and is reserved for
//! structurally invalid configuration; [`FileError`] is per-file, collected
//! into the run summary without aborting sibling workers.

use distpress_compression::{Algorithm, CodecError};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that fail the whole pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The algorithm has no conventional suffix and none was configured
    #[error("algorithm {0} has no default output extension and none was configured")]
    MissingExtension(Algorithm),

    /// A selection pattern failed to compile
    #[error("invalid selection pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Underlying compile error
        #[source]
        source: glob::PatternError,
    },
}

/// Per-file failure taxonomy
///
/// Read failures abort that file before any side effect; codec failures
/// leave no output and no cache record; write failures are the most severe,
/// surfaced distinctly because a compressed result existed in memory but
/// never reached disk. Deletion failures are deliberately absent: they are
/// swallowed with a warning since they do not affect the compressed output.
#[derive(Error, Debug)]
pub enum FileError {
    /// Stat or read of the source file failed
    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),

    /// The codec rejected the input or the options
    #[error("codec failed: {0}")]
    Codec(#[source] CodecError),

    /// The compressed sibling could not be written
    #[error("write failed after successful compression: {0}")]
    Write(#[source] std::io::Error),

    /// The decompressed output did not reproduce the source bytes
    #[error("verification failed: decompressed output does not match source")]
    Verify,
}

/// A per-file failure with the file it belongs to
#[derive(Debug)]
pub struct FileFailure {
    /// The source file that failed
    pub path: PathBuf,
    /// What went wrong
    pub error: FileError,
}

impl fmt::Display for FileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.error)
    }
}

impl std::error::Error for FileFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_renders_path_and_cause() {
        let failure = FileFailure {
            path: PathBuf::from("dist/app.js"),
            error: FileError::Codec(CodecError::compression_failed("boom")),
        };
        assert_eq!(
            failure.to_string(),
            "dist/app.js: codec failed: compression failed: boom"
        );
    }

    #[test]
    fn write_failure_is_distinct_from_read() {
        let write = FileError::Write(std::io::Error::other("disk full"));
        assert!(write.to_string().contains("after successful compression"));

        let read = FileError::Read(std::io::Error::other("gone"));
        assert!(read.to_string().starts_with("read failed"));
    }
}
