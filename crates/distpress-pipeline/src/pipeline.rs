// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Pipeline orchestration
//!
//! Wires discovery, selection, option resolution and the per-file workers
//! together: one task per eligible file, all launched together and joined
//! through a single wait-for-all barrier that collects partial failures —
//! a failing file never aborts its siblings.

use crate::catalog;
use crate::error::PipelineError;
use crate::filter::SelectionPolicy;
use crate::freshness::FreshnessCache;
use crate::report::RunSummary;
use crate::worker::{self, WorkerContext, WorkerOutcome};
use distpress_compression::{resolve, Algorithm, Codec, CodecOptions};
use distpress_config::CompressionSettings;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Callback invoked once per run, after the report (if any) was rendered
pub type CompletionHook = Arc<dyn Fn(&RunSummary) + Send + Sync>;

/// Everything a pipeline run needs
///
/// The serializable subset of these options comes from
/// [`distpress_config::CompressionSettings`]; the rest (predicates,
/// callbacks, an injected codec) is runtime-only.
pub struct PipelineOptions {
    /// Whether the pipeline runs at all
    pub enabled: bool,
    /// Whether the aggregate report is printed
    pub verbose: bool,
    /// Which files are candidates
    pub policy: SelectionPolicy,
    /// Compression algorithm
    pub algorithm: Algorithm,
    /// Output suffix; `None` derives the algorithm's conventional suffix
    pub output_extension: Option<String>,
    /// Codec tuning overrides, merged over the algorithm baseline
    pub codec_options: CodecOptions,
    /// Remove each original once its bytes are read
    pub delete_original: bool,
    /// Decompress each sibling and compare against the source bytes
    pub verify: bool,
    /// Codec override; `None` uses the algorithm's table entry
    pub codec: Option<Arc<dyn Codec>>,
    /// Invoked once with the summary after the run completes
    pub on_complete: Option<CompletionHook>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions {
            enabled: true,
            verbose: true,
            policy: SelectionPolicy::default(),
            algorithm: Algorithm::Gzip,
            output_extension: None,
            codec_options: CodecOptions::new(),
            delete_original: false,
            verify: false,
            codec: None,
            on_complete: None,
        }
    }
}

impl fmt::Debug for PipelineOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineOptions")
            .field("enabled", &self.enabled)
            .field("verbose", &self.verbose)
            .field("policy", &self.policy)
            .field("algorithm", &self.algorithm)
            .field("output_extension", &self.output_extension)
            .field("codec_options", &self.codec_options)
            .field("delete_original", &self.delete_original)
            .field("verify", &self.verify)
            .field("codec", &self.codec.as_ref().map(|_| "override"))
            .field("on_complete", &self.on_complete.as_ref().map(|_| "hook"))
            .finish()
    }
}

impl PipelineOptions {
    /// Build options from validated configuration settings
    pub fn from_settings(settings: &CompressionSettings) -> Result<Self, PipelineError> {
        Ok(PipelineOptions {
            enabled: settings.enabled,
            verbose: settings.verbose,
            policy: SelectionPolicy::with_patterns(&settings.patterns, settings.size_threshold)?,
            algorithm: settings.algorithm,
            output_extension: settings.output_extension.clone(),
            codec_options: settings.codec_options.clone(),
            delete_original: settings.delete_original,
            verify: false,
            codec: None,
            on_complete: None,
        })
    }
}

/// The selection-and-compression pipeline
pub struct Pipeline {
    options: PipelineOptions,
}

impl Pipeline {
    /// Create a pipeline with the given options
    pub fn new(options: PipelineOptions) -> Self {
        Pipeline { options }
    }

    /// The options this pipeline was built with
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Run once over the build output at `root`
    ///
    /// The freshness cache is injected so the caller controls its
    /// lifecycle: reuse it across runs for incremental behavior, or pass a
    /// fresh one to force full reprocessing. A missing root is a normal
    /// empty run, not an error; the only failure mode is structurally
    /// invalid configuration.
    pub async fn run(
        &self,
        root: &Path,
        cache: &FreshnessCache,
    ) -> Result<RunSummary, PipelineError> {
        let opts = &self.options;
        if !opts.enabled {
            debug!("compression disabled, skipping run");
            return Ok(RunSummary::default());
        }

        let extension = match &opts.output_extension {
            Some(ext) => normalize_extension(ext),
            None => opts
                .algorithm
                .default_extension()
                .ok_or(PipelineError::MissingExtension(opts.algorithm))?
                .to_string(),
        };

        let root = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
        let files = catalog::list_files(&root);
        debug!(root = %root.display(), files = files.len(), "discovered build output");

        let effective = resolve(opts.algorithm, &opts.codec_options);
        let codec: Arc<dyn Codec> = match &opts.codec {
            Some(codec) => Arc::clone(codec),
            None => Arc::from(opts.algorithm.codec(&effective)),
        };
        let ctx = WorkerContext {
            codec,
            algorithm: opts.algorithm,
            extension,
            size_threshold: opts.policy.min_size(),
            delete_original: opts.delete_original,
            verify: opts.verify,
            cache: cache.clone(),
        };

        let mut tasks = JoinSet::new();
        for path in files {
            let size = match tokio::fs::metadata(&path).await {
                Ok(metadata) => metadata.len(),
                Err(e) => {
                    warn!(path = %path.display(), "stat failed: {}", e);
                    continue;
                }
            };
            if !opts.policy.is_eligible(&path, size) {
                debug!(path = %path.display(), size, "not eligible");
                continue;
            }
            tasks.spawn(worker::process_file(ctx.clone(), path));
        }

        let mut summary = RunSummary::default();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(WorkerOutcome::Compressed(result)) => summary.results.push(result),
                Ok(WorkerOutcome::Skipped) => summary.skipped += 1,
                Ok(WorkerOutcome::Failed(failure)) => summary.failures.push(failure),
                Err(e) => warn!("compression task panicked: {}", e),
            }
        }
        summary.results.sort_by(|a, b| a.source.cmp(&b.source));
        summary.failures.sort_by(|a, b| a.path.cmp(&b.path));

        for failure in &summary.failures {
            warn!("{}", failure);
        }
        if opts.verbose && !summary.results.is_empty() {
            print!("{}", summary.render(&root));
        }
        if let Some(hook) = &opts.on_complete {
            hook(&summary);
        }
        Ok(summary)
    }
}

/// Normalize an output suffix so it always begins with '.'
pub fn normalize_extension(extension: &str) -> String {
    let trimmed = extension.trim();
    if trimmed.starts_with('.') {
        trimmed.to_string()
    } else {
        format!(".{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_adds_a_leading_dot() {
        assert_eq!(normalize_extension("gz"), ".gz");
        assert_eq!(normalize_extension(".gz"), ".gz");
        assert_eq!(normalize_extension(" zz "), ".zz");
    }

    #[test]
    fn deflate_without_extension_is_a_config_error() {
        let options = PipelineOptions {
            algorithm: Algorithm::Deflate,
            ..Default::default()
        };
        let pipeline = Pipeline::new(options);
        let cache = FreshnessCache::new();

        let result = tokio_block_on(pipeline.run(Path::new("dist"), &cache));
        assert!(matches!(
            result,
            Err(PipelineError::MissingExtension(Algorithm::Deflate))
        ));
    }

    #[test]
    fn default_options_are_gzip_and_enabled() {
        let options = PipelineOptions::default();
        assert!(options.enabled);
        assert_eq!(options.algorithm, Algorithm::Gzip);
        assert!(options.output_extension.is_none());
    }

    fn tokio_block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime")
            .block_on(future)
    }
}
