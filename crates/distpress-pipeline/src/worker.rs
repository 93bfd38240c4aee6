// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Per-file compression worker
//!
//! One worker runs per eligible file, independently of its siblings. The
//! steps are strictly ordered for a single file: stat, freshness check,
//! read, optional delete of the original, codec invoke, write sibling,
//! cache record. The original is deleted (when configured) before the
//! codec runs — its bytes are already in memory, and this ordering is the
//! documented behavior the deletion tests pin down.

use crate::error::{FileError, FileFailure};
use crate::freshness::FreshnessCache;
use crate::report::CompressionResult;
use distpress_compression::{Algorithm, Codec, CodecError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task;
use tracing::{debug, warn};

/// Everything a worker needs, cheap to clone into each task
#[derive(Clone)]
pub(crate) struct WorkerContext {
    pub codec: Arc<dyn Codec>,
    pub algorithm: Algorithm,
    /// Normalized suffix, always starting with '.'
    pub extension: String,
    pub size_threshold: u64,
    pub delete_original: bool,
    pub verify: bool,
    pub cache: FreshnessCache,
}

/// What one worker produced
pub(crate) enum WorkerOutcome {
    Compressed(CompressionResult),
    Skipped,
    Failed(FileFailure),
}

/// Process a single file end to end
pub(crate) async fn process_file(ctx: WorkerContext, path: PathBuf) -> WorkerOutcome {
    match try_process(&ctx, &path).await {
        Ok(Some(result)) => WorkerOutcome::Compressed(result),
        Ok(None) => WorkerOutcome::Skipped,
        Err(error) => WorkerOutcome::Failed(FileFailure { path, error }),
    }
}

async fn try_process(
    ctx: &WorkerContext,
    path: &Path,
) -> Result<Option<CompressionResult>, FileError> {
    let metadata = tokio::fs::metadata(path).await.map_err(FileError::Read)?;
    let mtime = metadata.modified().map_err(FileError::Read)?;
    let original_size = metadata.len();

    if ctx
        .cache
        .should_skip(path, mtime, original_size, ctx.size_threshold)
    {
        debug!(path = %path.display(), "unchanged since last run, skipping");
        return Ok(None);
    }

    let content: Arc<[u8]> = tokio::fs::read(path)
        .await
        .map_err(FileError::Read)?
        .into();

    if ctx.delete_original {
        // Best effort: the bytes are already in memory, so a failed delete
        // does not stop compression.
        if let Err(e) = tokio::fs::remove_file(path).await {
            warn!(path = %path.display(), "could not delete original: {}", e);
        }
    }

    let compressed = invoke_codec(ctx, Arc::clone(&content)).await?;

    if ctx.verify {
        let decompressed = ctx
            .codec
            .decompress(&compressed)
            .map_err(FileError::Codec)?;
        if decompressed[..] != content[..] {
            return Err(FileError::Verify);
        }
    }

    let output = sibling_path(path, &ctx.extension);
    tokio::fs::write(&output, &compressed)
        .await
        .map_err(FileError::Write)?;
    ctx.cache.record(path, mtime);

    debug!(
        path = %path.display(),
        original = original_size,
        compressed = compressed.len(),
        "compressed"
    );

    Ok(Some(CompressionResult {
        source: path.to_path_buf(),
        output,
        original_size,
        compressed_size: compressed.len() as u64,
        algorithm: ctx.algorithm,
    }))
}

async fn invoke_codec(ctx: &WorkerContext, content: Arc<[u8]>) -> Result<Vec<u8>, FileError> {
    let codec = Arc::clone(&ctx.codec);
    task::spawn_blocking(move || codec.compress(&content))
        .await
        .map_err(|e| {
            FileError::Codec(CodecError::compression_failed(format!(
                "codec task aborted: {}",
                e
            )))
        })?
        .map_err(FileError::Codec)
}

/// Output path: source path plus the normalized extension
pub(crate) fn sibling_path(path: &Path, extension: &str) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(extension);
    PathBuf::from(os)
}
