//! Closure build and lookup benchmarks.

use criterion::{black_box, BenchmarkId, Criterion};

use org_graph_hierarchy::{build_index, HierarchyService};

use super::config;
use super::generators::{generate_chain, generate_org, generate_pairs};

/// Benchmark building the closure of wide trees and of a deep chain.
pub fn bench_closure_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("closure_build");

    for &size in config::ORG_SIZES {
        let org = generate_org(size, config::BRANCHING);
        group.bench_with_input(BenchmarkId::new("tree", size), &org, |b, org| {
            b.iter(|| build_index(black_box(org)))
        });
    }

    // Output is quadratic in chain length, keep it small
    let chain = generate_chain(2_000);
    group.bench_function("chain_2000", |b| b.iter(|| build_index(black_box(&chain))));

    group.finish();
}

/// Benchmark point lookups through the service.
pub fn bench_distance_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_lookup");

    for &size in config::ORG_SIZES {
        let org = generate_org(size, config::BRANCHING);
        let service = HierarchyService::new();
        if let Err(e) = service.build_closure(Some(&org)) {
            panic!("benchmark org must build: {e}");
        }
        let pairs = generate_pairs(size, config::LOOKUP_BATCH);

        group.bench_with_input(BenchmarkId::new("service", size), &pairs, |b, pairs| {
            b.iter(|| {
                let mut hits = 0usize;
                for &(employee, superior) in pairs {
                    let distance =
                        service.distance_to_superior(black_box(employee), black_box(superior));
                    if let Ok(Some(_)) = distance {
                        hits += 1;
                    }
                }
                hits
            })
        });
    }

    group.finish();
}
