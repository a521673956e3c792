// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use clap::CommandFactory;

use super::*;

fn parse_filter(args: &[&str]) -> FilterArgs {
    let argv = ["covspec", "filter"].iter().chain(args);
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Filter(args) => args,
        Command::FixPaths => panic!("expected filter command"),
    }
}

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn no_patterns_uses_default() {
    let config = FilterArgs::default().to_config();
    assert_eq!(config, FilterConfig::default());
}

#[test]
fn one_pattern_is_single() {
    let args = FilterArgs {
        test_files: vec!["**/*spec.js".to_string()],
        ..FilterArgs::default()
    };
    assert_eq!(args.to_config().test_files, TestFiles::Single("**/*spec.js".to_string()));
}

#[test]
fn repeated_patterns_are_list() {
    let args = FilterArgs {
        integration_folder: Some("cypress/integration".to_string()),
        test_files: vec!["spec-one.js".to_string(), "spec-two.js".to_string()],
        fix_source_paths: false,
    };
    let config = args.to_config();

    assert_eq!(config.integration_folder.as_deref(), Some("cypress/integration"));
    assert_eq!(
        config.test_files,
        TestFiles::List(vec!["spec-one.js".to_string(), "spec-two.js".to_string()])
    );
}

#[test]
fn parses_repeated_test_files_flag() {
    let args = parse_filter(&[
        "--integration-folder",
        "e2e",
        "--test-files",
        "a.js",
        "--test-files",
        "b.js",
        "--fix-source-paths",
    ]);

    assert_eq!(args.integration_folder.as_deref(), Some("e2e"));
    assert_eq!(args.test_files, ["a.js", "b.js"]);
    assert!(args.fix_source_paths);
}
