// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Glob pattern matching for spec file detection.
//!
//! `*` never crosses a path separator while `**` spans directories, so
//! `**/*spec.js` matches `src/app.spec.js` but `*.js` does not.

use std::collections::HashMap;

use globset::GlobBuilder;

/// Decides whether a filename matches a single glob pattern.
pub trait GlobMatcher {
    fn is_match(&self, filename: &str, pattern: &str) -> bool;
}

impl<F> GlobMatcher for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_match(&self, filename: &str, pattern: &str) -> bool {
        self(filename, pattern)
    }
}

/// Globs compiled once up front, keyed by their source pattern.
///
/// Invalid patterns are kept as `None` so they are reported once and then
/// never match.
#[derive(Debug, Clone, Default)]
pub struct CompiledGlobs {
    globs: HashMap<String, Option<globset::GlobMatcher>>,
}

impl CompiledGlobs {
    pub fn new(patterns: &[String]) -> Self {
        let globs = patterns
            .iter()
            .map(|pattern| (pattern.clone(), compile(pattern)))
            .collect();
        Self { globs }
    }

    pub fn len(&self) -> usize {
        self.globs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.globs.is_empty()
    }
}

impl GlobMatcher for CompiledGlobs {
    fn is_match(&self, filename: &str, pattern: &str) -> bool {
        match self.globs.get(pattern) {
            Some(glob) => glob.as_ref().is_some_and(|g| g.is_match(filename)),
            // Not seen at construction: compile on demand.
            None => compile(pattern).is_some_and(|g| g.is_match(filename)),
        }
    }
}

/// Compile a single pattern, logging and skipping invalid ones.
pub fn compile(pattern: &str) -> Option<globset::GlobMatcher> {
    match GlobBuilder::new(pattern).literal_separator(true).build() {
        Ok(glob) => Some(glob.compile_matcher()),
        Err(e) => {
            tracing::warn!("invalid glob pattern '{}': {}", pattern, e);
            None
        }
    }
}

#[cfg(test)]
#[path = "glob_tests.rs"]
mod tests;
