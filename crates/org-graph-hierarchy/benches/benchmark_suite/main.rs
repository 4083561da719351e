//! Benchmark suite for org-graph-hierarchy.
//!
//! Measures closure build time over generated organisations and lookup
//! throughput against a published snapshot.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --package org-graph-hierarchy
//!
//! # Only the build benchmarks
//! cargo bench --package org-graph-hierarchy -- closure_build
//! ```

use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;

mod config;
mod generators;

mod closure_benches;

criterion_group!(
    name = closure_build_group;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5));
    targets = closure_benches::bench_closure_build
);

criterion_group!(
    name = lookup_group;
    config = Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(3));
    targets = closure_benches::bench_distance_lookup
);

criterion_main!(closure_build_group, lookup_group);
