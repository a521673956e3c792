// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spec filter benchmarks.
//!
//! Measures filtering across coverage map sizes for both classification
//! strategies. Strategy selection and glob compilation happen once, outside
//! the measured loop.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::json;

use covspec::{CoverageMap, FilterConfig, SpecFilter, TestFiles};

fn synthetic_coverage(files: usize) -> CoverageMap {
    (0..files)
        .map(|i| {
            let path = match i % 3 {
                0 => format!("cypress/integration/feature_{i}.spec.js"),
                1 => format!("src/components/widget_{i}.js"),
                _ => format!("src/lib/util_{i}.ts"),
            };
            let record = json!({ "path": &path, "s": { "0": i, "1": 0 } });
            (path, record)
        })
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    let by_folder = SpecFilter::new(&FilterConfig::new().with_integration_folder("src"));
    let by_pattern = SpecFilter::new(&FilterConfig::new().with_test_files(TestFiles::List(vec![
        "**/*.spec.js".to_string(),
        "**/*.cy.ts".to_string(),
        "smoke.js".to_string(),
    ])));

    for size in [100, 1_000, 10_000] {
        let coverage = synthetic_coverage(size);

        group.bench_with_input(BenchmarkId::new("by_folder", size), &coverage, |b, cov| {
            b.iter(|| by_folder.apply(black_box(cov)))
        });
        group.bench_with_input(BenchmarkId::new("by_pattern", size), &coverage, |b, cov| {
            b.iter(|| by_pattern.apply(black_box(cov)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
