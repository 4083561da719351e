//! Closure build pass.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use org_graph_core::{Employee, EmployeeId};

use super::index::{AncestorChain, ClosureIndex};
use crate::error::{HierarchyResult, InvalidInput};
use crate::types::Distance;
use crate::validation::index_by_id;

/// Counters describing how much walking a build did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Superior links followed while climbing.
    pub hops_walked: usize,
    /// Times a known chain was spliced in instead of walked.
    pub chains_inherited: usize,
    /// Relations copied out of known chains.
    pub entries_inherited: usize,
}

/// Record `ancestor_id` at `distance`, keeping the smaller distance if the
/// pair is already present.
///
/// Under the forest invariant the chain to an ancestor is unique and the
/// pair is never seen twice.
#[inline]
pub(crate) fn record_min(chain: &mut AncestorChain, ancestor_id: EmployeeId, distance: Distance) {
    match chain.entry(ancestor_id) {
        Entry::Occupied(mut slot) => {
            if distance < *slot.get() {
                slot.insert(distance);
            }
        }
        Entry::Vacant(slot) => {
            slot.insert(distance);
        }
    }
}

/// Splice a superior's fully computed chain into `chain`.
///
/// `distance` is the hop count from the chain's owner to the superior whose
/// chain is `known`; every ancestor of that superior lands at
/// `distance + d`. Replaces walking the rest of the way up node by node.
///
/// Returns the number of entries copied.
pub fn inherit_known_chain(
    chain: &mut AncestorChain,
    known: &AncestorChain,
    distance: Distance,
) -> usize {
    chain.reserve(known.len());
    for (&ancestor_id, &d) in known {
        record_min(chain, ancestor_id, distance.saturating_add(d));
    }
    known.len()
}

/// One build pass over an employee snapshot.
///
/// Holds the id index and the chains computed so far. Employees are resolved
/// in snapshot order; resolving one may also resolve superiors that appear
/// later in the snapshot.
pub struct ClosureBuilder<'a> {
    employees: &'a [Employee],
    by_id: HashMap<EmployeeId, &'a Employee>,
    chains: HashMap<EmployeeId, AncestorChain>,
    stats: BuildStats,
}

impl<'a> ClosureBuilder<'a> {
    /// Index `employees` by id.
    ///
    /// # Errors
    ///
    /// `InvalidInput::DuplicateEmployee` if two records share an id.
    pub fn new(employees: &'a [Employee]) -> HierarchyResult<Self> {
        Ok(Self {
            employees,
            by_id: index_by_id(employees)?,
            chains: HashMap::with_capacity(employees.len()),
            stats: BuildStats::default(),
        })
    }

    /// Resolve every employee and produce the index.
    ///
    /// # Errors
    ///
    /// `InvalidInput::CycleDetected` if a superior chain does not end within
    /// as many hops as there are employees.
    pub fn build(mut self) -> HierarchyResult<ClosureIndex> {
        for employee in self.employees {
            self.resolve(employee)?;
        }

        let order = self.employees.iter().map(|e| e.id).collect();
        Ok(ClosureIndex::from_parts(self.chains, order, self.stats))
    }

    /// Compute the chain of `start` and of every unresolved superior above it.
    fn resolve(&mut self, start: &'a Employee) -> HierarchyResult<()> {
        if self.chains.contains_key(&start.id) {
            return Ok(());
        }

        // Climb until a superior with a known chain, a root, or a superior
        // outside the snapshot. `pending` is bottom-up.
        let hop_limit = self.employees.len();
        let mut pending: Vec<&'a Employee> = vec![start];
        let mut cursor = start.superior_id;

        while let Some(superior_id) = cursor {
            self.stats.hops_walked += 1;

            if self.chains.contains_key(&superior_id) {
                break;
            }
            let Some(&superior) = self.by_id.get(&superior_id) else {
                let below = pending.last().map_or(start.id, |e| e.id);
                tracing::trace!(
                    employee_id = below,
                    superior_id,
                    "Superior outside snapshot, treating as terminal ancestor"
                );
                break;
            };

            pending.push(superior);
            if pending.len() > hop_limit {
                tracing::error!(
                    employee_id = start.id,
                    hop_limit,
                    "Superior chain exceeds snapshot size"
                );
                return Err(InvalidInput::CycleDetected {
                    employee_id: start.id,
                }
                .into());
            }
            cursor = superior.superior_id;
        }

        // Materialize top-down so each chain can inherit from its superior's.
        for employee in pending.into_iter().rev() {
            let chain = self.chain_from_superior(employee);
            self.chains.insert(employee.id, chain);
        }

        Ok(())
    }

    /// `{ superior: 1 }` plus the superior's chain shifted by one hop.
    fn chain_from_superior(&mut self, employee: &Employee) -> AncestorChain {
        let mut chain = AncestorChain::new();
        let Some(superior_id) = employee.superior_id else {
            return chain;
        };

        record_min(&mut chain, superior_id, 1);
        if let Some(known) = self.chains.get(&superior_id) {
            self.stats.entries_inherited += inherit_known_chain(&mut chain, known, 1);
            self.stats.chains_inherited += 1;
        }
        chain
    }
}

/// Build the closure index of `employees` in one pass.
pub fn build_index(employees: &[Employee]) -> HierarchyResult<ClosureIndex> {
    ClosureBuilder::new(employees)?.build()
}
