//! Forest validation for employee snapshots.
//!
//! The closure walk assumes every superior chain ends at a root. This pass
//! checks that up front and names the offending employee, instead of letting
//! the walk hit its hop bound.

use std::collections::HashMap;

use org_graph_core::config::HierarchyConfig;
use org_graph_core::{Employee, EmployeeId};

use crate::error::{HierarchyResult, InvalidInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the chain currently being walked.
    OnPath,
    /// Chain from here is known to reach a root.
    Done,
}

/// Index employees by id.
///
/// # Errors
///
/// `InvalidInput::DuplicateEmployee` for the first id seen twice.
pub(crate) fn index_by_id(
    employees: &[Employee],
) -> HierarchyResult<HashMap<EmployeeId, &Employee>> {
    let mut by_id = HashMap::with_capacity(employees.len());
    for employee in employees {
        if by_id.insert(employee.id, employee).is_some() {
            tracing::warn!(employee_id = employee.id, "Duplicate employee id in snapshot");
            return Err(InvalidInput::DuplicateEmployee { id: employee.id }.into());
        }
    }
    Ok(by_id)
}

/// Check that `employees` forms a forest.
///
/// Rejects duplicate ids and cycles (an employee being their own superior
/// included). Superior ids that match no employee are rejected only when
/// `config.reject_unknown_superiors` is set.
///
/// Each employee is visited once: walks stop at the first node whose chain
/// has already been proven to reach a root.
pub fn validate_forest(employees: &[Employee], config: &HierarchyConfig) -> HierarchyResult<()> {
    let by_id = index_by_id(employees)?;

    if config.reject_unknown_superiors {
        for employee in employees {
            if let Some(superior_id) = employee.superior_id {
                if !by_id.contains_key(&superior_id) {
                    tracing::warn!(
                        employee_id = employee.id,
                        superior_id,
                        "Superior not present in snapshot"
                    );
                    return Err(InvalidInput::UnknownSuperior {
                        employee_id: employee.id,
                        superior_id,
                    }
                    .into());
                }
            }
        }
    }

    let mut marks: HashMap<EmployeeId, Mark> = HashMap::with_capacity(employees.len());
    let mut path: Vec<EmployeeId> = Vec::new();

    for employee in employees {
        if marks.contains_key(&employee.id) {
            continue;
        }

        path.clear();
        let mut current = Some(employee);
        while let Some(node) = current {
            match marks.get(&node.id) {
                Some(Mark::Done) => break,
                Some(Mark::OnPath) => {
                    tracing::error!(employee_id = node.id, "Cycle in superior chain");
                    return Err(InvalidInput::CycleDetected {
                        employee_id: node.id,
                    }
                    .into());
                }
                None => {}
            }
            marks.insert(node.id, Mark::OnPath);
            path.push(node.id);
            current = node.superior_id.and_then(|id| by_id.get(&id).copied());
        }

        for id in &path {
            marks.insert(*id, Mark::Done);
        }
    }

    tracing::debug!(employee_count = employees.len(), "Employee snapshot is a forest");
    Ok(())
}
