//! Closure output types.

use serde::{Deserialize, Serialize};

use org_graph_core::EmployeeId;

/// Number of superior hops between an employee and one of its ancestors.
/// Always at least 1.
pub type Distance = u32;

/// One (employee, proper ancestor, distance) triple of the closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AncestorRelation {
    pub employee_id: EmployeeId,
    pub ancestor_id: EmployeeId,
    pub distance: Distance,
}

impl AncestorRelation {
    pub fn new(employee_id: EmployeeId, ancestor_id: EmployeeId, distance: Distance) -> Self {
        Self {
            employee_id,
            ancestor_id,
            distance,
        }
    }

    /// True if `ancestor_id` is the direct superior.
    #[inline]
    pub fn is_direct(&self) -> bool {
        self.distance == 1
    }
}
