//! Deterministic organisation generators.

use org_graph_core::{Employee, EmployeeId};

/// Tree where employee `i` reports to `(i - 1) / branching`, ids from 0.
///
/// Employees are emitted leaf-first so the build has to climb before it can
/// inherit anything.
pub fn generate_org(count: usize, branching: usize) -> Vec<Employee> {
    let mut out: Vec<Employee> = (0..count)
        .map(|i| {
            let e = Employee::new(i as EmployeeId, String::new());
            if i == 0 {
                e
            } else {
                e.with_superior(((i - 1) / branching) as EmployeeId)
            }
        })
        .collect();
    out.reverse();
    out
}

/// Single reporting line of `count` employees.
pub fn generate_chain(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| {
            let e = Employee::new(i as EmployeeId, String::new());
            if i == 0 {
                e
            } else {
                e.with_superior(i as EmployeeId - 1)
            }
        })
        .collect()
}

/// Deterministic (employee, candidate superior) pairs within `0..count`.
pub fn generate_pairs(count: usize, n: usize) -> Vec<(EmployeeId, EmployeeId)> {
    let mut seed: u64 = 0x2545_f491;
    (0..n)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let a = (seed >> 33) as usize % count;
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let b = (seed >> 33) as usize % count;
            (a as EmployeeId, b as EmployeeId)
        })
        .collect()
}
