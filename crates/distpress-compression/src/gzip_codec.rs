// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Gzip codec implementation
//!
//! Produces standard gzip containers, directly servable as precompressed
//! assets by HTTP servers that understand `Content-Encoding: gzip`.

use crate::error::{CodecError, CodecResult};
use crate::options::{CodecOptions, LEVEL};
use crate::Codec;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fmt;
use std::io::{Read, Write};

/// Gzip codec backed by `flate2`
#[derive(Clone)]
pub struct GzipCodec {
    options: CodecOptions,
}

impl GzipCodec {
    /// Create a gzip codec with the given resolved options
    pub fn new(options: CodecOptions) -> Self {
        GzipCodec { options }
    }

    fn compression(&self) -> CodecResult<Compression> {
        deflate_level(&self.options)
    }
}

/// Read the DEFLATE-family `level` option, rejecting out-of-range values
///
/// Shared by the gzip and deflate codecs; level 9 is the post-build default.
pub(crate) fn deflate_level(options: &CodecOptions) -> CodecResult<Compression> {
    let level = options.get_or(LEVEL, 9);
    if level > 9 {
        return Err(CodecError::invalid_option(format!(
            "level={} exceeds maximum of 9",
            level
        )));
    }
    Ok(Compression::new(level))
}

impl fmt::Debug for GzipCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GzipCodec")
            .field("options", &self.options)
            .finish()
    }
}

impl Codec for GzipCodec {
    fn compress(&self, data: &[u8]) -> CodecResult<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::with_capacity(data.len() / 2), self.compression()?);
        encoder
            .write_all(data)
            .map_err(|e| CodecError::compression_failed(format!("gzip write failed: {}", e)))?;
        encoder
            .finish()
            .map_err(|e| CodecError::compression_failed(format!("gzip finish failed: {}", e)))
    }

    fn decompress(&self, data: &[u8]) -> CodecResult<Vec<u8>> {
        let mut decoder = GzDecoder::new(data);
        let mut decompressed = Vec::with_capacity(data.len() * 2);
        decoder
            .read_to_end(&mut decompressed)
            .map_err(|e| CodecError::decompression_failed(format!("gzip read failed: {}", e)))?;
        Ok(decompressed)
    }
}
