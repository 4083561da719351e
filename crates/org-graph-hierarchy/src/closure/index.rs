//! Immutable closure index.

use std::collections::HashMap;

use org_graph_core::EmployeeId;

use super::builder::BuildStats;
use crate::types::{AncestorRelation, Distance};

/// Ancestor id -> distance for one employee.
pub type AncestorChain = HashMap<EmployeeId, Distance>;

/// Complete ancestor closure of one employee snapshot.
///
/// Built once by [`ClosureBuilder`](super::ClosureBuilder) and never mutated
/// afterwards; a new snapshot produces a new index.
#[derive(Debug, Clone, Default)]
pub struct ClosureIndex {
    chains: HashMap<EmployeeId, AncestorChain>,
    /// Employee ids in snapshot order, for deterministic output.
    order: Vec<EmployeeId>,
    relation_count: usize,
    stats: BuildStats,
}

impl ClosureIndex {
    pub(crate) fn from_parts(
        chains: HashMap<EmployeeId, AncestorChain>,
        order: Vec<EmployeeId>,
        stats: BuildStats,
    ) -> Self {
        let relation_count = chains.values().map(HashMap::len).sum();
        Self {
            chains,
            order,
            relation_count,
            stats,
        }
    }

    /// Distance from `employee_id` up to `ancestor_id`.
    ///
    /// `None` if the employee is unknown or `ancestor_id` is not one of its
    /// proper ancestors.
    #[inline]
    pub fn distance(&self, employee_id: EmployeeId, ancestor_id: EmployeeId) -> Option<Distance> {
        self.chains.get(&employee_id)?.get(&ancestor_id).copied()
    }

    /// All proper ancestors of `employee_id`, nearest first.
    pub fn ancestors_of(&self, employee_id: EmployeeId) -> Vec<(EmployeeId, Distance)> {
        let Some(chain) = self.chains.get(&employee_id) else {
            return Vec::new();
        };
        sorted_by_distance(chain.iter().map(|(&id, &d)| (id, d)).collect())
    }

    /// All employees below `ancestor_id`, nearest first, ties by id.
    ///
    /// Linear in the number of employees.
    pub fn descendants_of(&self, ancestor_id: EmployeeId) -> Vec<(EmployeeId, Distance)> {
        let found = self
            .chains
            .iter()
            .filter_map(|(&employee_id, chain)| chain.get(&ancestor_id).map(|&d| (employee_id, d)))
            .collect();
        sorted_by_distance(found)
    }

    /// Number of superior hops from `employee_id` to its root.
    pub fn depth_of(&self, employee_id: EmployeeId) -> Option<usize> {
        self.chains.get(&employee_id).map(HashMap::len)
    }

    pub fn contains_employee(&self, employee_id: EmployeeId) -> bool {
        self.chains.contains_key(&employee_id)
    }

    pub fn employee_count(&self) -> usize {
        self.order.len()
    }

    /// Total number of (employee, ancestor) relations.
    pub fn relation_count(&self) -> usize {
        self.relation_count
    }

    /// True if the snapshot had no employees.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Counters from the build that produced this index.
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Every relation, grouped by employee in snapshot order, nearest
    /// ancestor first within a group.
    pub fn relations(&self) -> Vec<AncestorRelation> {
        let mut out = Vec::with_capacity(self.relation_count);
        for &employee_id in &self.order {
            for (ancestor_id, distance) in self.ancestors_of(employee_id) {
                out.push(AncestorRelation::new(employee_id, ancestor_id, distance));
            }
        }
        out
    }
}

fn sorted_by_distance(mut entries: Vec<(EmployeeId, Distance)>) -> Vec<(EmployeeId, Distance)> {
    entries.sort_unstable_by_key(|&(id, d)| (d, id));
    entries
}
