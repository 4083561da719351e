//! Tests for the closure builder and index.


use org_graph_core::Employee;

pub(super) use crate::test_support::employees;

/// CEO, two managers, two reports under manager 2, one under employee 4.
pub(super) fn company() -> Vec<Employee> {
    employees(&[
        (1, None),
        (2, Some(1)),
        (3, Some(1)),
        (4, Some(2)),
        (5, Some(2)),
        (6, Some(4)),
    ])
}
