// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Candidate selection
//!
//! Narrows the discovered file list to compression candidates. Matching is
//! pure: the file size is injected by the caller from an already-performed
//! stat, never recomputed here.

use crate::error::PipelineError;
use distpress_config::{DEFAULT_PATTERNS, DEFAULT_SIZE_THRESHOLD};
use glob::Pattern;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Boolean function of a path, for callers that need more than globs
pub type PathPredicate = Arc<dyn Fn(&Path) -> bool + Send + Sync>;

/// How candidate paths are matched
#[derive(Clone)]
pub enum PathMatcher {
    /// Keep every file (fail-open default when no filter is supplied)
    All,
    /// Keep files matching any of the compiled glob patterns
    Globs(Vec<Pattern>),
    /// Keep files the predicate accepts
    Predicate(PathPredicate),
}

impl fmt::Debug for PathMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathMatcher::All => f.write_str("All"),
            PathMatcher::Globs(patterns) => f
                .debug_list()
                .entries(patterns.iter().map(|p| p.as_str()))
                .finish(),
            PathMatcher::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Which files are eligible for compression
///
/// A file is eligible iff the matcher accepts its path AND its size is at
/// least the minimum. A minimum of 0 disables size-based exclusion.
#[derive(Debug, Clone)]
pub struct SelectionPolicy {
    matcher: PathMatcher,
    min_size: u64,
}

impl SelectionPolicy {
    /// Build a policy from a matcher and a minimum size in bytes
    pub fn new(matcher: PathMatcher, min_size: u64) -> Self {
        SelectionPolicy { matcher, min_size }
    }

    /// Build a policy from glob patterns
    pub fn with_patterns<S: AsRef<str>>(
        patterns: &[S],
        min_size: u64,
    ) -> Result<Self, PipelineError> {
        let compiled = patterns
            .iter()
            .map(|p| {
                Pattern::new(p.as_ref()).map_err(|source| PipelineError::InvalidPattern {
                    pattern: p.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SelectionPolicy::new(PathMatcher::Globs(compiled), min_size))
    }

    /// Build a policy from an arbitrary path predicate
    pub fn with_predicate<F>(predicate: F, min_size: u64) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        SelectionPolicy::new(PathMatcher::Predicate(Arc::new(predicate)), min_size)
    }

    /// Build a fail-open policy that keeps every file above the minimum
    pub fn keep_all(min_size: u64) -> Self {
        SelectionPolicy::new(PathMatcher::All, min_size)
    }

    /// The configured minimum size in bytes
    pub fn min_size(&self) -> u64 {
        self.min_size
    }

    /// Whether a file of the given size at the given path is a candidate
    pub fn is_eligible(&self, path: &Path, size: u64) -> bool {
        self.matches(path) && size >= self.min_size
    }

    fn matches(&self, path: &Path) -> bool {
        match &self.matcher {
            PathMatcher::All => true,
            PathMatcher::Globs(patterns) => patterns.iter().any(|pattern| {
                pattern.matches_path(path)
                    || path
                        .file_name()
                        .map(|name| pattern.matches(&name.to_string_lossy()))
                        .unwrap_or(false)
            }),
            PathMatcher::Predicate(predicate) => predicate(path),
        }
    }
}

impl Default for SelectionPolicy {
    /// Common web asset extensions at the default size threshold
    fn default() -> Self {
        SelectionPolicy::with_patterns(&DEFAULT_PATTERNS, DEFAULT_SIZE_THRESHOLD)
            .expect("default patterns are valid")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_policy_selects_web_assets() {
        let policy = SelectionPolicy::default();
        for name in ["app.js", "chunk.mjs", "data.json", "style.css", "index.html"] {
            let path = PathBuf::from("dist").join(name);
            assert!(policy.is_eligible(&path, 2048), "{name} should be eligible");
        }
        assert!(!policy.is_eligible(Path::new("dist/logo.png"), 2048));
        assert!(!policy.is_eligible(Path::new("dist/app.wasm"), 2048));
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let policy = SelectionPolicy::default();
        let path = Path::new("dist/app.js");
        assert!(policy.is_eligible(path, 1025));
        assert!(!policy.is_eligible(path, 1024));
    }

    #[test]
    fn zero_threshold_disables_size_exclusion() {
        let policy = SelectionPolicy::keep_all(0);
        assert!(policy.is_eligible(Path::new("anything.bin"), 0));
    }

    #[test]
    fn patterns_match_nested_paths() {
        let policy = SelectionPolicy::with_patterns(&["*.js"], 0).unwrap();
        assert!(policy.is_eligible(Path::new("dist/assets/deep/app.js"), 1));
        assert!(!policy.is_eligible(Path::new("dist/assets/app.js.map"), 1));
    }

    #[test]
    fn predicate_matcher_is_honored() {
        let policy = SelectionPolicy::with_predicate(
            |path| path.to_string_lossy().contains("keep"),
            0,
        );
        assert!(policy.is_eligible(Path::new("dist/keep-me.bin"), 1));
        assert!(!policy.is_eligible(Path::new("dist/drop-me.bin"), 1));
    }

    #[test]
    fn malformed_pattern_is_a_pipeline_error() {
        let result = SelectionPolicy::with_patterns(&["["], 0);
        assert!(matches!(
            result,
            Err(PipelineError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn keep_all_accepts_everything_above_minimum() {
        let policy = SelectionPolicy::keep_all(10);
        assert!(policy.is_eligible(Path::new("whatever"), 10));
        assert!(!policy.is_eligible(Path::new("whatever"), 9));
    }
}
