// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Codec layer for the distpress artifact compressor
//!
//! This crate owns the closed set of compression algorithms the pipeline can
//! apply to build output, and the resolution of their tuning options:
//! - **Gzip**: the default for web assets, served directly by most HTTP servers
//! - **Brotli**: higher ratios for text assets, slower to compress
//! - **Deflate / DeflateRaw**: zlib-wrapped and bare DEFLATE streams
//!
//! The byte transforms themselves are performed by the `flate2` and `brotli`
//! crates; this crate maps each [`Algorithm`] to a [`Codec`] carrying its
//! resolved options.
//!
//! # Quick Start
//!
//! ```rust
//! use distpress_compression::{resolve, Algorithm, CodecOptions};
//!
//! let options = resolve(Algorithm::Gzip, &CodecOptions::new());
//! let codec = Algorithm::Gzip.codec(&options);
//!
//! let original = b"Hello, World! Hello, World!";
//! let compressed = codec.compress(original)?;
//! let decompressed = codec.decompress(&compressed)?;
//!
//! assert_eq!(original, &decompressed[..]);
//! # Ok::<(), distpress_compression::CodecError>(())
//! ```
//!
//! # Option Resolution
//!
//! Every algorithm carries a maximum-compression baseline (the pipeline runs
//! after the build, where ratio dominates over speed). User-supplied options
//! are shallow-merged over the baseline, user values winning on key
//! collision. Out-of-range values are not rejected at resolution time; the
//! codec invocation is where they fail.

pub mod brotli_codec;
pub mod deflate_codec;
pub mod error;
pub mod gzip_codec;
pub mod options;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

pub use brotli_codec::BrotliCodec;
pub use deflate_codec::{DeflateCodec, DeflateRawCodec};
pub use error::{CodecError, CodecResult};
pub use gzip_codec::GzipCodec;
pub use options::{resolve, CodecOptions, LEVEL, LGWIN, QUALITY};

/// Compression algorithm identifier
///
/// Closed set; determines the baseline tuning options and the default
/// output suffix. The deflate variants have no conventional suffix and
/// require an explicit one from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Gzip-wrapped DEFLATE (`.gz`)
    Gzip,
    /// Brotli (`.br`)
    Brotli,
    /// Zlib-wrapped DEFLATE
    Deflate,
    /// Bare DEFLATE stream, no container
    DeflateRaw,
}

impl Algorithm {
    /// All supported algorithms, in display order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Gzip,
        Algorithm::Brotli,
        Algorithm::Deflate,
        Algorithm::DeflateRaw,
    ];

    /// Canonical configuration name
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Gzip => "gzip",
            Algorithm::Brotli => "brotli",
            Algorithm::Deflate => "deflate",
            Algorithm::DeflateRaw => "deflate-raw",
        }
    }

    /// Default output suffix, where one is conventional
    ///
    /// Returns `None` for the deflate variants; the pipeline requires an
    /// explicit extension for those before it will run.
    pub fn default_extension(&self) -> Option<&'static str> {
        match self {
            Algorithm::Gzip => Some(".gz"),
            Algorithm::Brotli => Some(".br"),
            Algorithm::Deflate | Algorithm::DeflateRaw => None,
        }
    }

    /// Maximum-compression baseline options for this algorithm
    pub fn baseline_options(&self) -> CodecOptions {
        match self {
            Algorithm::Gzip | Algorithm::Deflate | Algorithm::DeflateRaw => {
                CodecOptions::new().with(LEVEL, 9)
            }
            Algorithm::Brotli => CodecOptions::new().with(QUALITY, 11).with(LGWIN, 22),
        }
    }

    /// Build the codec for this algorithm with the given resolved options
    ///
    /// This is the fixed dispatch table the pipeline invokes through. Option
    /// values are validated lazily: an out-of-range level or quality is a
    /// [`CodecError`] from [`Codec::compress`], never a panic here.
    pub fn codec(&self, options: &CodecOptions) -> Box<dyn Codec> {
        match self {
            Algorithm::Gzip => Box::new(GzipCodec::new(options.clone())),
            Algorithm::Brotli => Box::new(BrotliCodec::new(options.clone())),
            Algorithm::Deflate => Box::new(DeflateCodec::new(options.clone())),
            Algorithm::DeflateRaw => Box::new(DeflateRawCodec::new(options.clone())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gzip" => Ok(Algorithm::Gzip),
            "brotli" => Ok(Algorithm::Brotli),
            "deflate" => Ok(Algorithm::Deflate),
            "deflate-raw" => Ok(Algorithm::DeflateRaw),
            other => Err(CodecError::unknown_algorithm(other)),
        }
    }
}

/// Codec trait for pluggable compression implementations
///
/// The pipeline holds one codec per run and calls it once per eligible
/// file. `decompress` is the inverse transform of the same algorithm, used
/// for round-trip verification.
pub trait Codec: Send + Sync + Debug {
    /// Compress data, producing a standalone stream in the algorithm's
    /// standard container format
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the options are out of range for the
    /// algorithm or the transform itself fails.
    fn compress(&self, data: &[u8]) -> CodecResult<Vec<u8>>;

    /// Decompress data previously produced by [`Codec::compress`]
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the input is not a valid stream for this
    /// algorithm.
    fn decompress(&self, data: &[u8]) -> CodecResult<Vec<u8>>;
}
