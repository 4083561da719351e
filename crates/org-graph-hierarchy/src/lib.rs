//! Employee hierarchy closure.
//!
//! Given employees linked by a single "reports-to" pointer, this crate
//! computes the distance between every employee and each of its superiors,
//! direct or indirect, once per snapshot, and answers point lookups against
//! the result.
//!
//! # Architecture
//!
//! - **closure**: memoized closure builder and the immutable `ClosureIndex`
//! - **validation**: forest checks (duplicate ids, cycles, unknown superiors)
//! - **service**: `HierarchyService`, owner of the published snapshot
//! - **traits**: `EmployeeHierarchy` query seam for downstream consumers
//! - **error**: `HierarchyError` with its two kinds, invalid input and
//!   not initialized
//!
//! # Example
//!
//! ```
//! use org_graph_core::Employee;
//! use org_graph_hierarchy::{HierarchyResult, HierarchyService};
//!
//! fn example() -> HierarchyResult<()> {
//!     let employees = vec![
//!         Employee::new(1, "Jan Kowalski"),
//!         Employee::new(2, "Kamil Nowak").with_superior(1),
//!         Employee::new(3, "Anna Mariacka").with_superior(1),
//!         Employee::new(4, "Andrzej Abacki").with_superior(2),
//!     ];
//!
//!     let service = HierarchyService::new();
//!     let relations = service.build_closure(Some(&employees))?;
//!     assert_eq!(relations.len(), 4);
//!
//!     assert_eq!(service.distance_to_superior(4, 1)?, Some(2));
//!     assert_eq!(service.distance_to_superior(4, 3)?, None);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod closure;
pub mod error;
pub mod service;
pub mod traits;
pub mod types;
pub mod validation;


// Re-exports for convenience
pub use closure::{build_index, BuildStats, ClosureBuilder, ClosureIndex};
pub use error::{HierarchyError, HierarchyResult, InvalidInput};
pub use service::{HierarchyService, HierarchyState};
pub use traits::EmployeeHierarchy;
pub use types::{AncestorRelation, Distance};
pub use validation::validate_forest;
