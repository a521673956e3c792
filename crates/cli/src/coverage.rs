// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage maps and per-file record helpers.

use indexmap::IndexMap;
use serde_json::Value;

/// File path to per-file coverage record, in insertion order.
///
/// Records are opaque to filtering; they default to raw JSON as produced by
/// istanbul-style instrumenters.
pub type CoverageMap<T = Value> = IndexMap<String, T>;

/// Point inline source maps at each record's absolute path.
///
/// Bundled records carry an `inputSourceMap` whose `sources` are relative
/// to a `sourceRoot`. Entries naming the record's own file are replaced by
/// its `path` and the `sourceRoot` is cleared, so reporters resolve the
/// original file. Records without a source map are returned as-is.
pub fn fix_source_paths(coverage: &CoverageMap) -> CoverageMap {
    coverage
        .iter()
        .map(|(filename, record)| (filename.clone(), fix_record(record)))
        .collect()
}

fn fix_record(record: &Value) -> Value {
    let mut fixed = record.clone();

    let Some(absolute_path) = record.get("path").and_then(Value::as_str) else {
        return fixed;
    };
    let Some(file_name) = file_name(absolute_path) else {
        return fixed;
    };
    let Some(source_map) = fixed.get_mut("inputSourceMap").and_then(Value::as_object_mut) else {
        return fixed;
    };

    let has_source_root = source_map
        .get("sourceRoot")
        .and_then(Value::as_str)
        .is_some_and(|root| !root.is_empty());
    if has_source_root {
        source_map.insert("sourceRoot".to_string(), Value::String(String::new()));
    }

    if let Some(Value::Array(sources)) = source_map.get_mut("sources") {
        for source in sources.iter_mut() {
            if source.as_str().is_some_and(|s| s.contains(file_name)) {
                *source = Value::String(absolute_path.to_string());
            }
        }
    }

    fixed
}

/// Final path segment, split on either separator.
fn file_name(path: &str) -> Option<&str> {
    path.rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
#[path = "coverage_tests.rs"]
mod tests;
