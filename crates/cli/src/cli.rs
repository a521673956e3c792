// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use clap::{Parser, Subcommand};

use crate::config::{FilterConfig, TestFiles};

/// Removes spec file entries from browser test coverage
#[derive(Parser)]
#[command(name = "covspec")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log filter decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Read coverage JSON on stdin and print it without spec file entries
    Filter(FilterArgs),
    /// Read coverage JSON on stdin and point source maps at absolute paths
    FixPaths,
}

#[derive(clap::Args, Default)]
pub struct FilterArgs {
    /// Integration folder (under the default pattern only its files are kept)
    #[arg(long, env = "COVSPEC_INTEGRATION_FOLDER", value_name = "DIR")]
    pub integration_folder: Option<String>,

    /// Spec file glob or file name; repeat for a list [default: **/*.*]
    #[arg(long = "test-files", env = "COVSPEC_TEST_FILES", value_name = "PATTERN")]
    pub test_files: Vec<String>,

    /// Also repair inline source map paths in the kept entries
    #[arg(long)]
    pub fix_source_paths: bool,
}

impl FilterArgs {
    /// One pattern stays a single string; several become a list.
    pub fn to_config(&self) -> FilterConfig {
        let test_files = match self.test_files.as_slice() {
            [] => TestFiles::default(),
            [pattern] => TestFiles::Single(pattern.clone()),
            patterns => TestFiles::List(patterns.to_vec()),
        };

        FilterConfig {
            integration_folder: self.integration_folder.clone(),
            test_files,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
