//! Benchmark sizes.

/// Employee counts used for build benchmarks.
pub const ORG_SIZES: &[usize] = &[1_000, 10_000, 100_000];

/// Branching factor of the generated trees.
pub const BRANCHING: usize = 8;

/// Number of lookups per lookup-benchmark iteration.
pub const LOOKUP_BATCH: usize = 1_000;
