// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Build output discovery
//!
//! Lists the regular files under a root directory. A root that does not
//! exist or cannot be read yields an empty list rather than an error: a
//! build that produced no output is not this component's concern.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Recursively list the regular files under `root`, as absolute paths
///
/// Symbolic links are not followed. The walk is sorted by file name so the
/// result is stable within one invocation. Entries that cannot be read are
/// skipped with a warning.
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    let root = match dunce::canonicalize(root) {
        Ok(root) => root,
        Err(e) => {
            debug!("nothing to compress at {}: {}", root.display(), e);
            return Vec::new();
        }
    };
    if !root.is_dir() {
        debug!("{} is not a directory, nothing to compress", root.display());
        return Vec::new();
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&root).follow_links(false).sort_by_file_name() {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => warn!("skipping unreadable entry under {}: {}", root.display(), e),
        }
    }
    files
}
