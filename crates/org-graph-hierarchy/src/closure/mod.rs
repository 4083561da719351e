//! Employee hierarchy transitive closure.
//!
//! Given a forest of employees linked by a single superior pointer, compute
//! every (employee, proper ancestor, distance) triple once and serve point
//! lookups against the result.
//!
//! # Algorithm
//!
//! Memoized upward walk. Each employee's ancestor chain is derived from its
//! direct superior's chain, shifted by one hop:
//!
//! ```text
//! chain(e) = { superior(e): 1 } ∪ { a: d + 1 | (a, d) ∈ chain(superior(e)) }
//! ```
//!
//! A walk from an employee climbs only until it reaches a superior whose
//! chain is already known, then inherits that chain instead of re-walking it
//! (see [`builder::inherit_known_chain`]). Chains of the intermediate
//! superiors met on the way are materialized as a side effect, so every
//! superior link is followed exactly once per build regardless of input
//! order. Total work is proportional to the closure size, `Σ depth(e)`.
//!
//! # Components
//!
//! - [`ClosureBuilder`]: one build pass over an employee snapshot
//! - [`ClosureIndex`]: immutable id-indexed map of maps produced by a build

pub mod builder;
mod index;

#[cfg(test)]
mod tests;

pub use builder::{build_index, BuildStats, ClosureBuilder};
pub use index::{AncestorChain, ClosureIndex};
