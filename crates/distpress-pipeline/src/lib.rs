// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Selection-and-compression pipeline for post-build artifacts
//!
//! Given a directory of already-built output files, the pipeline selects a
//! subset by extension and size policy, compresses each selected file
//! concurrently, writes the result as a sibling (`app.js` → `app.js.gz`),
//! optionally removes the original, and aggregates size-reduction
//! statistics.
//!
//! Repeated runs are incremental: a [`FreshnessCache`] injected by the
//! caller remembers the modification time each file had when it was last
//! compressed, and unchanged files are skipped without touching the codec.
//!
//! # Quick Start
//!
//! ```no_run
//! use distpress_pipeline::{FreshnessCache, Pipeline, PipelineOptions};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cache = FreshnessCache::new();
//!     let pipeline = Pipeline::new(PipelineOptions::default());
//!
//!     let summary = pipeline.run(Path::new("dist"), &cache).await?;
//!     println!(
//!         "compressed {} files to {:.2}% of their size",
//!         summary.results.len(),
//!         summary.total_percentage()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! # Failure Model
//!
//! Failures are per-file: a codec or I/O error for one file is collected
//! into the summary and never aborts its siblings. The pipeline call itself
//! only fails for structurally invalid configuration, such as a deflate
//! algorithm with no output extension.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod freshness;
pub mod pipeline;
pub mod report;
mod worker;

pub use error::{FileError, FileFailure, PipelineError};
pub use filter::{PathMatcher, PathPredicate, SelectionPolicy};
pub use freshness::FreshnessCache;
pub use pipeline::{normalize_extension, CompletionHook, Pipeline, PipelineOptions};
pub use report::{CompressionResult, RunSummary};
