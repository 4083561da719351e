//! Closure properties over generated forests.

use org_graph_core::Employee;
use org_graph_hierarchy::{build_index, HierarchyService};

use crate::common::fixtures::{
    chain, complete_tree, complete_tree_relation_count, naive_depths, shuffled,
};

/// 3-ary tree of depth 5 plus a 40-long reporting line and a lone root.
fn wide_deep_forest() -> Vec<Employee> {
    let mut forest = complete_tree(1, 3, 5);
    forest.extend(chain(10_000, 40));
    forest.push(Employee::new(20_000, "Contractor"));
    forest
}

#[test]
fn test_relation_count_matches_sum_of_depths() {
    let forest = wide_deep_forest();
    let index = build_index(&forest).expect("build failed");

    let expected = complete_tree_relation_count(3, 5) + 40 * 39 / 2;
    assert_eq!(index.relation_count(), expected);

    let naive_total: usize = naive_depths(&forest).iter().map(|&(_, d)| d).sum();
    assert_eq!(index.relation_count(), naive_total);
}

#[test]
fn test_depths_match_naive_walk() {
    let forest = wide_deep_forest();
    let index = build_index(&forest).expect("build failed");

    for (id, depth) in naive_depths(&forest) {
        assert_eq!(index.depth_of(id), Some(depth), "depth of {id}");
    }
}

#[test]
fn test_direct_superiors_at_distance_one() {
    let forest = wide_deep_forest();
    let service = HierarchyService::new();
    service.build_closure(Some(&forest)).expect("build failed");

    for e in &forest {
        if let Some(s) = e.superior_id {
            assert_eq!(service.distance_to_superior(e.id, s), Ok(Some(1)));
        }
    }
}

#[test]
fn test_grand_superiors_at_distance_two() {
    let forest = complete_tree(1, 2, 4);
    let index = build_index(&forest).expect("build failed");

    for e in &forest {
        let grand = e
            .superior_id
            .and_then(|s| forest.iter().find(|m| m.id == s))
            .and_then(|m| m.superior_id);
        if let Some(g) = grand {
            assert_eq!(index.distance(e.id, g), Some(2));
        }
    }
}

#[test]
fn test_transitivity() {
    let forest = complete_tree(1, 3, 4);
    let index = build_index(&forest).expect("build failed");

    for e in &forest {
        for (a, d1) in index.ancestors_of(e.id) {
            for (b, d2) in index.ancestors_of(a) {
                assert_eq!(index.distance(e.id, b), Some(d1 + d2));
            }
        }
    }
}

#[test]
fn test_siblings_and_cousins_unrelated() {
    let forest = complete_tree(1, 2, 2);
    // ids: 1; 2,3; 4,5 (under 2), 6,7 (under 3)
    let index = build_index(&forest).expect("build failed");

    assert_eq!(index.distance(2, 3), None);
    assert_eq!(index.distance(4, 5), None);
    assert_eq!(index.distance(4, 6), None);
    assert_eq!(index.distance(4, 3), None);
    assert_eq!(index.distance(6, 3), Some(1));
}

#[test]
fn test_roots_have_no_ancestors() {
    let forest = wide_deep_forest();
    let index = build_index(&forest).expect("build failed");

    for root in forest.iter().filter(|e| e.is_root()) {
        assert!(index.ancestors_of(root.id).is_empty());
        assert!(!index.relations().iter().any(|r| r.employee_id == root.id));
    }
}

#[test]
fn test_shuffled_input_same_closure_and_linear_walk() {
    let forest = wide_deep_forest();
    let reference = build_index(&forest).expect("build failed");
    let mut expected = reference.relations();
    expected.sort();

    let with_superior = forest.iter().filter(|e| !e.is_root()).count();

    for seed in [1u32, 7, 42, 1_000_003] {
        let index = build_index(&shuffled(forest.clone(), seed)).expect("build failed");
        let mut got = index.relations();
        got.sort();
        assert_eq!(got, expected, "seed {seed}");

        // Shared prefixes are inherited, never re-walked
        assert_eq!(index.stats().hops_walked, with_superior, "seed {seed}");
        assert_eq!(
            index.stats().entries_inherited,
            index.relation_count() - with_superior,
            "seed {seed}"
        );
    }
}

#[test]
fn test_rebuild_with_identical_input_is_identical() {
    let forest = shuffled(wide_deep_forest(), 99);
    let service = HierarchyService::new();

    let first = service.build_closure(Some(&forest)).expect("build failed");
    let second = service.build_closure(Some(&forest)).expect("build failed");
    assert_eq!(first, second);
}
