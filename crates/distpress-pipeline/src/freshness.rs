// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Incremental skip logic
//!
//! The cache maps each source path to the modification time observed when
//! it was last successfully compressed. A file whose current mtime is not
//! newer than its record is skipped; a file modified between runs (mtime
//! strictly increases) is always reprocessed. Records hold the observed
//! mtime itself rather than a process-clock timestamp, so the comparison is
//! mtime-vs-mtime and immune to skew between the file system clock and the
//! process clock.
//!
//! The cache lives for as long as the caller keeps it: construct one before
//! the first run, reuse it across runs for incremental behavior, or drop it
//! to force full reprocessing. Nothing is persisted to disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

/// Process-lifetime map from source path to last-processed mtime
///
/// Cheap to clone; clones share the same records. Workers for distinct
/// files never contend over the same key, since each path is visited by
/// exactly one worker per run.
#[derive(Debug, Clone, Default)]
pub struct FreshnessCache {
    records: Arc<Mutex<HashMap<PathBuf, SystemTime>>>,
}

impl FreshnessCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether a file can be skipped this run
    ///
    /// True iff the file is strictly below the size threshold, or its
    /// current mtime is not newer than the recorded one. On skip the caller
    /// performs no read, write or codec work for the file.
    pub fn should_skip(
        &self,
        path: &Path,
        current_mtime: SystemTime,
        current_size: u64,
        threshold: u64,
    ) -> bool {
        if current_size < threshold {
            return true;
        }
        match self.records.lock() {
            Ok(records) => records
                .get(path)
                .map(|recorded| current_mtime <= *recorded)
                .unwrap_or(false),
            Err(_) => false,
        }
    }

    /// Record a successful compression of `path`
    ///
    /// Called only after the compressed sibling reached disk, so a failed
    /// file is retried by the next run.
    pub fn record(&self, path: &Path, observed_mtime: SystemTime) {
        if let Ok(mut records) = self.records.lock() {
            records.insert(path.to_path_buf(), observed_mtime);
        }
    }

    /// The mtime recorded for a path, if it was ever processed
    pub fn last_processed(&self, path: &Path) -> Option<SystemTime> {
        self.records.lock().ok()?.get(path).copied()
    }

    /// Number of recorded paths
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// True when nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget all records, forcing full reprocessing on the next run
    pub fn clear(&self) {
        if let Ok(mut records) = self.records.lock() {
            records.clear();
        }
    }
}
