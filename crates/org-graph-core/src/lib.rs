//! Org Graph Core Library
//!
//! Domain types and leaf services shared by the org graph crates.
//!
//! # Architecture
//!
//! This crate defines:
//! - Domain types (`Employee`, `Team`, `Vacation`, `VacationPackage`)
//! - Error types and result aliases
//! - Layered configuration and tracing setup
//! - Vacation-day accounting and in-memory report filters
//!
//! The hierarchy closure lives in `org-graph-hierarchy`, which consumes the
//! types defined here.
//!
//! # Example
//!
//! ```
//! use org_graph_core::types::Employee;
//!
//! let boss = Employee::new(1, "Jan Kowalski");
//! let report = Employee::new(2, "Kamil Nowak").with_superior(boss.id);
//! assert!(boss.is_root());
//! assert_eq!(report.superior_id, Some(1));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod types;
pub mod vacation;

// Re-exports for convenience
pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use types::{
    Employee, EmployeeId, Team, TeamId, Vacation, VacationId, VacationPackage, VacationPackageId,
};
