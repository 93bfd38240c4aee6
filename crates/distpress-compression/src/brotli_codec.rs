// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Brotli codec implementation
//!
//! Higher ratios than the DEFLATE family on text assets, slower to compress.
//! Output is a standard brotli stream servable with `Content-Encoding: br`.

use crate::error::{CodecError, CodecResult};
use crate::options::{CodecOptions, LGWIN, QUALITY};
use crate::Codec;
use std::fmt;
use std::io::{Read, Write};

const BUFFER_SIZE: usize = 4096;

/// Brotli codec backed by the `brotli` crate
#[derive(Clone)]
pub struct BrotliCodec {
    options: CodecOptions,
}

impl BrotliCodec {
    /// Create a brotli codec with the given resolved options
    pub fn new(options: CodecOptions) -> Self {
        BrotliCodec { options }
    }

    fn tuning(&self) -> CodecResult<(u32, u32)> {
        let quality = self.options.get_or(QUALITY, 11);
        if quality > 11 {
            return Err(CodecError::invalid_option(format!(
                "quality={} exceeds maximum of 11",
                quality
            )));
        }
        let lgwin = self.options.get_or(LGWIN, 22);
        if !(10..=24).contains(&lgwin) {
            return Err(CodecError::invalid_option(format!(
                "lgwin={} outside valid range 10-24",
                lgwin
            )));
        }
        Ok((quality, lgwin))
    }
}

impl fmt::Debug for BrotliCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrotliCodec")
            .field("options", &self.options)
            .finish()
    }
}

impl Codec for BrotliCodec {
    fn compress(&self, data: &[u8]) -> CodecResult<Vec<u8>> {
        let (quality, lgwin) = self.tuning()?;
        let mut output = Vec::with_capacity(data.len() / 2);

        // Scoped so the writer drops and finalizes the stream before we
        // hand the buffer back.
        {
            let mut writer =
                brotli::CompressorWriter::new(&mut output, BUFFER_SIZE, quality, lgwin);

            writer.write_all(data).map_err(|e| {
                CodecError::compression_failed(format!("brotli write failed: {}", e))
            })?;

            writer.flush().map_err(|e| {
                CodecError::compression_failed(format!("brotli flush failed: {}", e))
            })?;
        }

        Ok(output)
    }

    fn decompress(&self, data: &[u8]) -> CodecResult<Vec<u8>> {
        let mut decompressed = Vec::with_capacity(data.len() * 2);
        let mut reader = brotli::Decompressor::new(data, BUFFER_SIZE);
        reader
            .read_to_end(&mut decompressed)
            .map_err(|e| CodecError::decompression_failed(format!("brotli read failed: {}", e)))?;
        Ok(decompressed)
    }
}
