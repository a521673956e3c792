// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spec file removal from coverage maps.
//!
//! Two classifiers decide which entries to drop:
//! - Pattern: the key matches a configured glob, or ends with a configured
//!   pattern taken literally (plain file names such as `spec-one.js`).
//! - Folder: the key starts with the integration folder.
//!
//! The default `testFiles` wildcard matches every file, so pattern
//! classification would drop all coverage. In that case the filter keeps
//! only entries inside the integration folder instead.

use crate::config::{ConfigAccessor, FilterConfig};
use crate::coverage::CoverageMap;
use crate::error::Result;
use crate::glob::{CompiledGlobs, GlobMatcher};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

/// How entries are classified, chosen once per configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationStrategy {
    /// Keep only keys under the integration folder.
    ///
    /// With no folder configured nothing matches and every entry is kept.
    ByFolder { integration_folder: Option<String> },

    /// Drop keys that match any spec pattern.
    ByPattern { patterns: Vec<String> },
}

impl ClassificationStrategy {
    pub fn select(config: &FilterConfig) -> Self {
        if config.test_files.is_default() {
            Self::ByFolder {
                integration_folder: config.integration_folder.clone(),
            }
        } else {
            Self::ByPattern {
                patterns: config.test_files.patterns().to_vec(),
            }
        }
    }
}

/// Removes spec file entries from coverage maps.
#[derive(Debug, Clone)]
pub struct SpecFilter<M = CompiledGlobs> {
    strategy: ClassificationStrategy,
    matcher: M,
}

impl SpecFilter {
    /// Create a filter that matches globs with [`CompiledGlobs`].
    pub fn new(config: &FilterConfig) -> Self {
        let strategy = ClassificationStrategy::select(config);
        let matcher = match &strategy {
            ClassificationStrategy::ByPattern { patterns } => CompiledGlobs::new(patterns),
            ClassificationStrategy::ByFolder { .. } => CompiledGlobs::default(),
        };
        Self { strategy, matcher }
    }
}

impl<M: GlobMatcher> SpecFilter<M> {
    /// Create a filter that uses a caller-supplied glob matcher.
    pub fn with_matcher(config: &FilterConfig, matcher: M) -> Self {
        Self {
            strategy: ClassificationStrategy::select(config),
            matcher,
        }
    }

    pub fn strategy(&self) -> &ClassificationStrategy {
        &self.strategy
    }

    /// Whether the entry for `filename` should be removed.
    pub fn excludes(&self, filename: &str) -> bool {
        match &self.strategy {
            ClassificationStrategy::ByFolder { integration_folder } => {
                integration_folder.is_some()
                    && !is_in_folder(integration_folder.as_deref(), filename)
            }
            ClassificationStrategy::ByPattern { patterns } => {
                is_test_file(&self.matcher, patterns, filename)
            }
        }
    }

    /// Return a new map without the excluded entries.
    ///
    /// Retained entries keep their relative order and their payloads are
    /// cloned unchanged.
    pub fn apply<T: Clone>(&self, coverage: &CoverageMap<T>) -> CoverageMap<T> {
        let filtered: CoverageMap<T> = coverage
            .iter()
            .filter(|(filename, _)| !self.excludes(filename))
            .map(|(filename, record)| (filename.clone(), record.clone()))
            .collect();

        tracing::debug!(
            "spec filter {:?}: kept {} of {} coverage entries",
            self.strategy,
            filtered.len(),
            coverage.len()
        );
        filtered
    }
}

/// Pattern classifier: glob match or literal suffix against any pattern.
pub fn is_test_file<M: GlobMatcher + ?Sized>(
    matcher: &M,
    patterns: &[String],
    filename: &str,
) -> bool {
    let matched_pattern = patterns.iter().any(|pattern| matcher.is_match(filename, pattern));
    let matched_end_of_path = patterns.iter().any(|pattern| filename.ends_with(pattern.as_str()));
    matched_pattern || matched_end_of_path
}

/// Folder classifier. An unset folder contains nothing.
pub fn is_in_folder(integration_folder: Option<&str>, filename: &str) -> bool {
    integration_folder.is_some_and(|folder| filename.starts_with(folder))
}

/// Remove spec file entries according to `config`.
pub fn filter_specs_from_coverage<T: Clone>(
    coverage: &CoverageMap<T>,
    config: &FilterConfig,
) -> CoverageMap<T> {
    SpecFilter::new(config).apply(coverage)
}

/// Like [`filter_specs_from_coverage`], reading options through an accessor.
///
/// Fails without a partial result when an option has the wrong shape.
pub fn filter_with_accessor<T: Clone, A: ConfigAccessor + ?Sized>(
    coverage: &CoverageMap<T>,
    accessor: &A,
) -> Result<CoverageMap<T>> {
    let config = FilterConfig::from_accessor(accessor)?;
    Ok(filter_specs_from_coverage(coverage, &config))
}
