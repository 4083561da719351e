//! Query seam for hierarchy consumers.

use org_graph_core::EmployeeId;

use crate::error::HierarchyResult;
use crate::types::Distance;

/// Read access to a built employee hierarchy.
///
/// Downstream code (vacation approvals, reports) should depend on this
/// trait rather than on [`HierarchyService`](crate::HierarchyService).
pub trait EmployeeHierarchy: Send + Sync {
    /// Hops from `employee_id` up to `superior_id`.
    ///
    /// `Ok(None)` if the two are unrelated or either id is unknown.
    ///
    /// # Errors
    ///
    /// `HierarchyError::NotInitialized` before the first build.
    fn distance_to_superior(
        &self,
        employee_id: EmployeeId,
        superior_id: EmployeeId,
    ) -> HierarchyResult<Option<Distance>>;

    /// True if `superior_id` is any proper ancestor of `employee_id`.
    fn is_superior_of(
        &self,
        superior_id: EmployeeId,
        employee_id: EmployeeId,
    ) -> HierarchyResult<bool> {
        Ok(self.distance_to_superior(employee_id, superior_id)?.is_some())
    }
}
