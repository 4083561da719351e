//! Error types for hierarchy closure operations.
//!
//! Only two kinds of failure exist: the caller handed in input the closure
//! cannot be built from, or the caller queried before any build. "These two
//! employees are unrelated" is a normal `None` result, never an error.

use thiserror::Error;

use org_graph_core::EmployeeId;

/// Result type alias for hierarchy operations.
pub type HierarchyResult<T> = Result<T, HierarchyError>;

/// Why an employee snapshot was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// The employee collection itself was absent (as opposed to empty).
    #[error("employee collection is missing")]
    MissingEmployees,

    /// Two records share an id.
    #[error("duplicate employee id {id}")]
    DuplicateEmployee { id: EmployeeId },

    /// Following superior links from `employee_id` never reaches a root.
    #[error("superior chain of employee {employee_id} contains a cycle")]
    CycleDetected { employee_id: EmployeeId },

    /// `superior_id` does not name any employee in the snapshot.
    #[error("employee {employee_id} references unknown superior {superior_id}")]
    UnknownSuperior {
        employee_id: EmployeeId,
        superior_id: EmployeeId,
    },
}

/// Error type for hierarchy closure operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    /// Build input rejected. Not retryable with the same input.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        #[source]
        reason: InvalidInput,
    },

    /// Query issued before any successful build.
    #[error("Employee hierarchy has not been initialized - call build_closure() first")]
    NotInitialized,
}

impl HierarchyError {
    /// True for rejected build input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, HierarchyError::InvalidArgument { .. })
    }

    /// True for queries against an unbuilt service.
    pub fn is_not_initialized(&self) -> bool {
        matches!(self, HierarchyError::NotInitialized)
    }

    /// The rejection reason, if this is an invalid-argument error.
    pub fn invalid_input(&self) -> Option<&InvalidInput> {
        match self {
            HierarchyError::InvalidArgument { reason } => Some(reason),
            HierarchyError::NotInitialized => None,
        }
    }
}

impl From<InvalidInput> for HierarchyError {
    fn from(reason: InvalidInput) -> Self {
        HierarchyError::InvalidArgument { reason }
    }
}
