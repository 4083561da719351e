//! Core domain types for the org graph.
//!
//! Records reference each other purely by integer id. Nothing here holds a
//! pointer to another record, so collections can be loaded, cloned and
//! shared without ownership cycles.

mod employee;
mod team;
mod vacation;

pub use employee::*;
pub use team::*;
pub use vacation::*;
