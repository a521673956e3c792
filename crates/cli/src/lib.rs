// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spec file filtering for browser test coverage.
//!
//! Coverage collected while browser tests run also includes the spec files
//! themselves. [`filter::filter_specs_from_coverage`] removes those entries
//! so a report only shows the application under test.

pub mod cli;
pub mod config;
pub mod coverage;
pub mod error;
pub mod filter;
pub mod glob;

pub use config::{ConfigAccessor, FilterConfig, TestFiles};
pub use coverage::{CoverageMap, fix_source_paths};
pub use error::FilterError;
pub use filter::{
    ClassificationStrategy, SpecFilter, filter_specs_from_coverage, filter_with_accessor,
};
