// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Deflate codec implementations
//!
//! Two variants: [`DeflateCodec`] produces a zlib-wrapped stream (RFC 1950),
//! [`DeflateRawCodec`] produces the bare DEFLATE stream (RFC 1951) with no
//! container. Neither has a conventional file suffix; the pipeline requires
//! an explicit output extension for both.

use crate::error::{CodecError, CodecResult};
use crate::gzip_codec::deflate_level;
use crate::options::CodecOptions;
use crate::Codec;
use flate2::read::{DeflateDecoder, ZlibDecoder};
use flate2::write::{DeflateEncoder, ZlibEncoder};
use std::fmt;
use std::io::{Read, Write};

/// Zlib-wrapped DEFLATE codec backed by `flate2`
#[derive(Clone)]
pub struct DeflateCodec {
    options: CodecOptions,
}

impl DeflateCodec {
    /// Create a deflate codec with the given resolved options
    pub fn new(options: CodecOptions) -> Self {
        DeflateCodec { options }
    }
}

impl fmt::Debug for DeflateCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeflateCodec")
            .field("options", &self.options)
            .finish()
    }
}

impl Codec for DeflateCodec {
    fn compress(&self, data: &[u8]) -> CodecResult<Vec<u8>> {
        let level = deflate_level(&self.options)?;
        let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), level);
        encoder
            .write_all(data)
            .map_err(|e| CodecError::compression_failed(format!("zlib write failed: {}", e)))?;
        encoder
            .finish()
            .map_err(|e| CodecError::compression_failed(format!("zlib finish failed: {}", e)))
    }

    fn decompress(&self, data: &[u8]) -> CodecResult<Vec<u8>> {
        let mut decoder = ZlibDecoder::new(data);
        let mut decompressed = Vec::with_capacity(data.len() * 2);
        decoder
            .read_to_end(&mut decompressed)
            .map_err(|e| CodecError::decompression_failed(format!("zlib read failed: {}", e)))?;
        Ok(decompressed)
    }
}

/// Bare DEFLATE codec backed by `flate2`
#[derive(Clone)]
pub struct DeflateRawCodec {
    options: CodecOptions,
}

impl DeflateRawCodec {
    /// Create a raw deflate codec with the given resolved options
    pub fn new(options: CodecOptions) -> Self {
        DeflateRawCodec { options }
    }
}

impl fmt::Debug for DeflateRawCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeflateRawCodec")
            .field("options", &self.options)
            .finish()
    }
}

impl Codec for DeflateRawCodec {
    fn compress(&self, data: &[u8]) -> CodecResult<Vec<u8>> {
        let level = deflate_level(&self.options)?;
        let mut encoder = DeflateEncoder::new(Vec::with_capacity(data.len() / 2), level);
        encoder
            .write_all(data)
            .map_err(|e| CodecError::compression_failed(format!("deflate write failed: {}", e)))?;
        encoder
            .finish()
            .map_err(|e| CodecError::compression_failed(format!("deflate finish failed: {}", e)))
    }

    fn decompress(&self, data: &[u8]) -> CodecResult<Vec<u8>> {
        let mut decoder = DeflateDecoder::new(data);
        let mut decompressed = Vec::with_capacity(data.len() * 2);
        decoder
            .read_to_end(&mut decompressed)
            .map_err(|e| CodecError::decompression_failed(format!("deflate read failed: {}", e)))?;
        Ok(decompressed)
    }
}
