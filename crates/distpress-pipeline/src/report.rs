// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Aggregate run reporting
//!
//! Collects per-file results into totals and renders a column-aligned
//! summary table. Percentages are compressed-over-original; totals are
//! computed from the summed sizes, never by averaging per-file ratios.

use crate::error::FileFailure;
use distpress_compression::Algorithm;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// One successfully compressed file
#[derive(Debug, Clone, Serialize)]
pub struct CompressionResult {
    /// Path of the source file
    pub source: PathBuf,
    /// Path of the compressed sibling
    pub output: PathBuf,
    /// Size of the source in bytes
    pub original_size: u64,
    /// Size of the compressed sibling in bytes
    pub compressed_size: u64,
    /// Algorithm that produced the sibling
    pub algorithm: Algorithm,
}

impl CompressionResult {
    /// Compressed size as a percentage of the original
    pub fn percentage(&self) -> f64 {
        percentage(self.original_size, self.compressed_size)
    }
}

/// Everything one pipeline run produced
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Successfully compressed files, sorted by source path
    pub results: Vec<CompressionResult>,
    /// Per-file failures, sorted by path
    pub failures: Vec<FileFailure>,
    /// Files skipped as unchanged since the last run
    pub skipped: usize,
}

impl RunSummary {
    /// Sum of all original sizes
    pub fn total_original(&self) -> u64 {
        self.results.iter().map(|r| r.original_size).sum()
    }

    /// Sum of all compressed sizes
    pub fn total_compressed(&self) -> u64 {
        self.results.iter().map(|r| r.compressed_size).sum()
    }

    /// Total percentage from the summed sizes
    pub fn total_percentage(&self) -> f64 {
        percentage(self.total_original(), self.total_compressed())
    }

    /// True when the run produced nothing at all
    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && self.failures.is_empty() && self.skipped == 0
    }

    /// Render the column-aligned summary table
    ///
    /// One row per compressed file (path relative to `root`, original size,
    /// compressed size, percentage) and a final totals row. Row order
    /// follows `results`, which the pipeline sorts by source path.
    pub fn render(&self, root: &Path) -> String {
        let rows: Vec<(String, String, String, String)> = self
            .results
            .iter()
            .map(|result| {
                (
                    relative_name(&result.source, root),
                    format_kib(result.original_size),
                    format_kib(result.compressed_size),
                    format!("{:.2}%", result.percentage()),
                )
            })
            .collect();

        let totals = (
            "total".to_string(),
            format_kib(self.total_original()),
            format_kib(self.total_compressed()),
            format!("{:.2}%", self.total_percentage()),
        );

        let mut name_w = totals.0.len();
        let mut orig_w = totals.1.len();
        let mut comp_w = totals.2.len();
        let mut pct_w = totals.3.len();
        for (name, orig, comp, pct) in &rows {
            name_w = name_w.max(name.len());
            orig_w = orig_w.max(orig.len());
            comp_w = comp_w.max(comp.len());
            pct_w = pct_w.max(pct.len());
        }

        let mut out = String::new();
        for (name, orig, comp, pct) in rows.iter().chain(std::iter::once(&totals)) {
            let _ = writeln!(
                out,
                "{:<name_w$}  {:>orig_w$}  {:>comp_w$}  {:>pct_w$}",
                name, orig, comp, pct,
            );
        }
        out
    }

    /// Machine-readable rendition of the summary
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "results": self.results,
            "failures": self
                .failures
                .iter()
                .map(|f| serde_json::json!({
                    "path": f.path,
                    "error": f.error.to_string(),
                }))
                .collect::<Vec<_>>(),
            "skipped": self.skipped,
            "totals": {
                "original_size": self.total_original(),
                "compressed_size": self.total_compressed(),
                "percentage": self.total_percentage(),
            },
        })
    }
}

/// Compressed size as a percentage of the original
///
/// A zero-byte original reports 100%: there is no reduction to claim and
/// no division to perform.
fn percentage(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        100.0
    } else {
        compressed as f64 * 100.0 / original as f64
    }
}

fn relative_name(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn format_kib(bytes: u64) -> String {
    format!("{:.2} KiB", bytes as f64 / 1024.0)
}
