//! Hierarchy service owning the published closure snapshot.
//!
//! # State
//!
//! ```text
//! Uninitialized --build_closure--> Built --build_closure--> Built
//! ```
//!
//! Queries in `Uninitialized` fail with `NotInitialized`. A build computes
//! the new index without holding the lock and publishes it with a single
//! pointer swap, so readers see either the old or the new index in full.
//! A failed build leaves the current snapshot in place.

use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use tracing::{debug, info, trace};

use org_graph_core::config::HierarchyConfig;
use org_graph_core::{Config, Employee, EmployeeId};

use crate::closure::{build_index, ClosureIndex};
use crate::error::{HierarchyError, HierarchyResult, InvalidInput};
use crate::traits::EmployeeHierarchy;
use crate::types::{AncestorRelation, Distance};
use crate::validation::validate_forest;


/// Lifecycle state of a [`HierarchyService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HierarchyState {
    /// No build has succeeded yet.
    Uninitialized,
    /// A snapshot is published.
    Built,
}

/// Builds and serves the closure of one employee hierarchy.
///
/// Independent hierarchies (one per tenant, say) are independent service
/// values; nothing is global.
#[derive(Debug)]
pub struct HierarchyService {
    config: HierarchyConfig,
    index: RwLock<Option<Arc<ClosureIndex>>>,
}

impl Default for HierarchyService {
    fn default() -> Self {
        Self::new()
    }
}

impl HierarchyService {
    /// Create an uninitialized service with default configuration.
    pub fn new() -> Self {
        Self::with_config(HierarchyConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(config: HierarchyConfig) -> Self {
        Self {
            config,
            index: RwLock::new(None),
        }
    }

    /// Create from the `[hierarchy]` section of the application config.
    pub fn from_config(config: &Config) -> Self {
        Self::with_config(config.hierarchy.clone())
    }

    pub fn config(&self) -> &HierarchyConfig {
        &self.config
    }

    pub fn state(&self) -> HierarchyState {
        if self.index.read().is_some() {
            HierarchyState::Built
        } else {
            HierarchyState::Uninitialized
        }
    }

    pub fn is_built(&self) -> bool {
        self.state() == HierarchyState::Built
    }

    /// Build the closure of `employees` and publish it.
    ///
    /// `None` models an absent collection and is rejected; an empty slice is
    /// valid and publishes an empty index.
    ///
    /// Returns every relation, grouped by employee in input order, nearest
    /// ancestor first.
    ///
    /// # Errors
    ///
    /// `HierarchyError::InvalidArgument` for an absent collection, duplicate
    /// ids, or a cycle. Unknown superiors are rejected too when
    /// `reject_unknown_superiors` is configured.
    pub fn build_closure(
        &self,
        employees: Option<&[Employee]>,
    ) -> HierarchyResult<Vec<AncestorRelation>> {
        let employees = employees.ok_or(InvalidInput::MissingEmployees)?;
        let started = Instant::now();

        info!(employee_count = employees.len(), "Building employee hierarchy closure");

        if self.config.validate_input {
            validate_forest(employees, &self.config)?;
        }

        let index = build_index(employees)?;
        let relations = index.relations();
        let stats = *index.stats();

        // Publish only the fully built index
        *self.index.write() = Some(Arc::new(index));

        debug!(
            employee_count = employees.len(),
            relation_count = relations.len(),
            hops_walked = stats.hops_walked,
            chains_inherited = stats.chains_inherited,
            elapsed_us = started.elapsed().as_micros() as u64,
            "Hierarchy closure published"
        );

        Ok(relations)
    }

    /// The current index, for many lookups against one consistent snapshot.
    ///
    /// # Errors
    ///
    /// `HierarchyError::NotInitialized` before the first successful build.
    pub fn snapshot(&self) -> HierarchyResult<Arc<ClosureIndex>> {
        self.index
            .read()
            .as_ref()
            .map(Arc::clone)
            .ok_or(HierarchyError::NotInitialized)
    }

    /// Hops from `employee_id` up to `superior_id`, or `None` if unrelated.
    ///
    /// # Errors
    ///
    /// `HierarchyError::NotInitialized` before the first successful build.
    pub fn distance_to_superior(
        &self,
        employee_id: EmployeeId,
        superior_id: EmployeeId,
    ) -> HierarchyResult<Option<Distance>> {
        let guard = self.index.read();
        let index = guard.as_ref().ok_or(HierarchyError::NotInitialized)?;

        let distance = index.distance(employee_id, superior_id);
        if distance.is_none() {
            trace!(employee_id, superior_id, "No superior relation");
        }
        Ok(distance)
    }

    /// All proper ancestors of `employee_id`, nearest first.
    pub fn ancestors_of(
        &self,
        employee_id: EmployeeId,
    ) -> HierarchyResult<Vec<(EmployeeId, Distance)>> {
        Ok(self.snapshot()?.ancestors_of(employee_id))
    }

    /// All employees below `superior_id`, nearest first.
    pub fn subordinates_of(
        &self,
        superior_id: EmployeeId,
    ) -> HierarchyResult<Vec<(EmployeeId, Distance)>> {
        Ok(self.snapshot()?.descendants_of(superior_id))
    }
}

impl EmployeeHierarchy for HierarchyService {
    fn distance_to_superior(
        &self,
        employee_id: EmployeeId,
        superior_id: EmployeeId,
    ) -> HierarchyResult<Option<Distance>> {
        HierarchyService::distance_to_superior(self, employee_id, superior_id)
    }
}
