// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Read, Write};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use covspec::cli::{Cli, Command};
use covspec::{CoverageMap, SpecFilter, fix_source_paths};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let coverage = read_coverage()?;
    let output = match &cli.command {
        Command::Filter(args) => {
            let filtered = SpecFilter::new(&args.to_config()).apply(&coverage);
            if args.fix_source_paths { fix_source_paths(&filtered) } else { filtered }
        }
        Command::FixPaths => fix_source_paths(&coverage),
    };

    write_coverage(&output)
}

/// Logs go to stderr; stdout carries only the coverage JSON.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("COVSPEC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn read_coverage() -> anyhow::Result<CoverageMap> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read coverage from stdin")?;
    serde_json::from_str(&input).context("stdin is not a JSON coverage object")
}

fn write_coverage(coverage: &CoverageMap) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, coverage).context("failed to write coverage")?;
    writeln!(stdout)?;
    Ok(())
}
