// SPDX-License-Identifier: AGPL-3.0
// Copyright (C) 2026 Distpress Contributors

//! Codec tuning options and resolution
//!
//! Options are a flat name→integer map. Each algorithm understands a small
//! set of keys and ignores the rest; [`resolve`] merges user overrides over
//! the algorithm baseline. The merge is shallow by design: a user key
//! replaces the baseline value for that key and nothing else.

use crate::Algorithm;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Compression level for the DEFLATE family (0-9)
pub const LEVEL: &str = "level";

/// Brotli quality (0-11)
pub const QUALITY: &str = "quality";

/// Brotli window size, log2 (10-24)
pub const LGWIN: &str = "lgwin";

/// Flat map of codec tuning options
///
/// Ordered so that serialized forms and log output are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodecOptions {
    values: BTreeMap<String, u32>,
}

impl CodecOptions {
    /// Create an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: u32) -> Self {
        self.set(name, value);
        self
    }

    /// Insert or replace a single option
    pub fn set(&mut self, name: impl Into<String>, value: u32) {
        self.values.insert(name.into(), value);
    }

    /// Look up an option by name
    pub fn get(&self, name: &str) -> Option<u32> {
        self.values.get(name).copied()
    }

    /// Look up an option, falling back to a default value
    pub fn get_or(&self, name: &str, default: u32) -> u32 {
        self.get(name).unwrap_or(default)
    }

    /// Iterate over all options in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of options set
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no option is set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, u32)> for CodecOptions {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        CodecOptions {
            values: iter.into_iter().collect(),
        }
    }
}

/// Resolve the effective options for an algorithm
///
/// Starts from the algorithm's maximum-compression baseline and shallow-merges
/// `user` on top, user values winning on key collision. Keys the algorithm
/// does not understand pass through untouched and are ignored by the codec.
/// Resolution itself never fails; invalid values surface from the codec
/// invocation.
pub fn resolve(algorithm: Algorithm, user: &CodecOptions) -> CodecOptions {
    let mut effective = algorithm.baseline_options();
    for (name, value) in user.iter() {
        effective.set(name, value);
    }
    effective
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_uses_baseline_when_no_overrides() {
        let effective = resolve(Algorithm::Gzip, &CodecOptions::new());
        assert_eq!(effective.get(LEVEL), Some(9));
        assert_eq!(effective.len(), 1);
    }

    #[test]
    fn user_value_wins_on_collision() {
        let user = CodecOptions::new().with(LEVEL, 1);
        let effective = resolve(Algorithm::Gzip, &user);
        assert_eq!(effective.get(LEVEL), Some(1));
    }

    #[test]
    fn merge_is_shallow_and_keeps_other_baseline_keys() {
        let user = CodecOptions::new().with(QUALITY, 5);
        let effective = resolve(Algorithm::Brotli, &user);
        assert_eq!(effective.get(QUALITY), Some(5));
        // untouched baseline key survives
        assert_eq!(effective.get(LGWIN), Some(22));
    }

    #[test]
    fn unknown_keys_pass_through() {
        let user = CodecOptions::new().with("mem_level", 8);
        let effective = resolve(Algorithm::Gzip, &user);
        assert_eq!(effective.get("mem_level"), Some(8));
        assert_eq!(effective.get(LEVEL), Some(9));
    }

    #[test]
    fn get_or_falls_back() {
        let options = CodecOptions::new();
        assert_eq!(options.get_or(LEVEL, 6), 6);
        assert!(options.is_empty());
    }
}
